//! Core data structures for generalized Sudoku boards.
//!
//! This crate provides the board/cell data model used by the solving engine.
//! Boards are square grids of side `n` subdivided into `√n × √n` sub-squares,
//! so the admissible sides are the perfect squares: 4, 9, 16, 25, and so on.
//! Nothing here is fixed to the classic 9×9 shape.
//!
//! # Overview
//!
//! The crate is organized around four types:
//!
//! - [`Position`]: the positional identity of a cell. Equality and hashing
//!   compare coordinates only, never the value stored at them.
//! - [`CandidateSet`]: the set of values not yet excluded for an empty cell,
//!   stored as a bitset.
//! - [`Cell`]: one grid position holding a value (0 = empty) and its
//!   candidate set.
//! - [`Board`]: owner of all `n²` cells, exposing row, column, and square
//!   views over them.
//!
//! # Examples
//!
//! ```
//! use omnidoku_core::Board;
//!
//! let board = Board::from_values(&[
//!     3, 4, 1, 2,
//!     0, 2, 3, 0,
//!     0, 3, 2, 1,
//!     2, 1, 4, 3,
//! ])?;
//!
//! assert_eq!(board.size(), 4);
//! assert_eq!(board.square_size(), 2);
//! assert_eq!(board.cell(1, 0).value(), 4);
//! assert!(board.cell(0, 1).is_empty());
//! # Ok::<(), omnidoku_core::BoardError>(())
//! ```

pub mod board;
pub mod candidate_set;
pub mod cell;
pub mod position;

pub use self::{
    board::{Board, BoardError},
    candidate_set::CandidateSet,
    cell::Cell,
    position::Position,
};
