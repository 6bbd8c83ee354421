//! Structured JSON format: an array of row arrays.
//!
//! ```json
//! [
//!     [5, 3, 0, 0, 7, 0, 0, 0, 0],
//!     [6, 0, 0, 1, 9, 5, 0, 0, 0],
//!     [0, 9, 8, 0, 0, 0, 0, 6, 0],
//!     [8, 0, 0, 0, 6, 0, 0, 0, 3],
//!     [4, 0, 0, 8, 0, 3, 0, 0, 1],
//!     [7, 0, 0, 0, 2, 0, 0, 0, 6],
//!     [0, 6, 0, 0, 0, 0, 2, 8, 0],
//!     [0, 0, 0, 4, 1, 9, 0, 0, 5],
//!     [0, 0, 0, 0, 8, 0, 0, 7, 9]
//! ]
//! ```
//!
//! Empty cells are 0. Unlike the text format, values are numbers rather
//! than characters, so boards larger than 9×9 are representable.

use omnidoku_core::{Board, Cell};

use crate::{BoardFormat, ParseError};

/// The JSON array-of-rows format.
///
/// # Examples
///
/// ```
/// use omnidoku_format::{BoardFormat, JsonFormat};
///
/// let board = JsonFormat.load("[[3,4,1,2],[0,2,3,0],[0,3,2,1],[2,1,4,3]]")?;
/// assert_eq!(board.size(), 4);
/// assert_eq!(JsonFormat.dump(&board), "[[3,4,1,2],[0,2,3,0],[0,3,2,1],[2,1,4,3]]");
/// # Ok::<(), omnidoku_format::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl BoardFormat for JsonFormat {
    fn load(&self, input: &str) -> Result<Board, ParseError> {
        let rows: Vec<Vec<u8>> = serde_json::from_str(input)?;
        let values: Vec<u8> = rows.into_iter().flatten().collect();
        Ok(Board::from_values(&values)?)
    }

    fn dump(&self, board: &Board) -> String {
        let rows: Vec<Vec<u8>> = (0..board.size())
            .map(|y| board.row(y).map(Cell::value).collect())
            .collect();
        serde_json::to_string(&rows).expect("a grid of integers always serializes")
    }
}
