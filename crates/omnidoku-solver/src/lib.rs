//! Solving engine for generalized Sudoku boards.
//!
//! This crate pairs a pluggable rule evaluation layer with a backtracking
//! search that interleaves constraint propagation (candidate pruning plus
//! naked-single commitment) with trial assignments. It operates on the
//! [`Board`](omnidoku_core::Board) model from `omnidoku-core` and works for
//! any admissible board side, not just 9.
//!
//! # Overview
//!
//! - [`rules`]: the [`Rule`] trait, the three default uniqueness rules, and
//!   [`RuleSet`], an ordered, short-circuiting rule list.
//! - [`solver`]: [`BacktrackingSolver`], producing either the first solution
//!   ([`solve`](BacktrackingSolver::solve)) or a lazy stream of all
//!   solutions ([`solutions`](BacktrackingSolver::solutions)).
//!
//! # Examples
//!
//! ```
//! use omnidoku_core::Board;
//! use omnidoku_solver::BacktrackingSolver;
//!
//! let board = Board::from_values(&[
//!     3, 4, 1, 2,
//!     0, 2, 3, 0,
//!     0, 3, 2, 1,
//!     2, 1, 4, 3,
//! ])?;
//!
//! let solver = BacktrackingSolver::default();
//! let solution = solver.solve(&board)?;
//! assert!(solver.is_solved(&solution));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod rules;
pub mod solver;

pub use self::{
    rules::{Rule, RuleSet, UniqueInColumn, UniqueInRow, UniqueInSquare},
    solver::{BacktrackingSolver, NoSolutionFound, Solutions},
};
