//! Loading and dumping boards in textual and structured representations.
//!
//! Two formats are provided: a compact [`text`] format (one character per
//! cell) and a [`json`] format (array of row arrays). Both round-trip
//! exactly for already-valid boards and refuse malformed input with a
//! [`ParseError`] instead of coercing it.
//!
//! The front end picks a format by file extension via [`format_for_path`].

use std::path::{Path, PathBuf};

use omnidoku_core::{Board, BoardError};

pub mod json;
pub mod text;

pub use self::{json::JsonFormat, text::TextFormat};

/// Error raised when puzzle input cannot be turned into a board.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseError {
    /// The input contains a character that is neither a digit nor a
    /// free-space marker.
    #[display("unsupported symbol {symbol:?} in puzzle input")]
    BadSymbol {
        /// The offending character.
        symbol: char,
    },
    /// The parsed values do not form a valid board (wrong length or a value
    /// out of range).
    #[display("invalid board: {_0}")]
    Board(#[from] BoardError),
    /// The input is not well-formed JSON of the expected shape.
    #[display("malformed JSON board: {_0}")]
    Json(#[from] serde_json::Error),
    /// No format is registered for the file extension.
    #[display("unknown file extension: {}", path.display())]
    UnknownExtension {
        /// The path whose extension was not recognized.
        path: PathBuf,
    },
}

/// A puzzle serialization format.
///
/// Loaders parse a textual representation into a [`Board`]; dumpers
/// serialize a board's current cell values back out. For a board that
/// already satisfies a format's constraints, `load(dump(board))` yields an
/// identical board.
pub trait BoardFormat {
    /// Parses `input` into a board.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on unknown symbols, an inadmissible cell
    /// count, or out-of-range values. Malformed input is never silently
    /// coerced.
    fn load(&self, input: &str) -> Result<Board, ParseError>;

    /// Serializes the board's current cell values.
    fn dump(&self, board: &Board) -> String;
}

/// Selects a format by file extension: `.txt` for [`TextFormat`], `.json`
/// for [`JsonFormat`].
///
/// # Errors
///
/// Returns [`ParseError::UnknownExtension`] for any other extension, or for
/// a path without one.
pub fn format_for_path(path: &Path) -> Result<Box<dyn BoardFormat>, ParseError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => Ok(Box::new(TextFormat::default())),
        Some("json") => Ok(Box::new(JsonFormat)),
        _ => Err(ParseError::UnknownExtension {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_path() {
        assert!(format_for_path(Path::new("puzzle.txt")).is_ok());
        assert!(format_for_path(Path::new("dir/puzzle.json")).is_ok());
        assert!(matches!(
            format_for_path(Path::new("puzzle.yaml")),
            Err(ParseError::UnknownExtension { .. })
        ));
        assert!(matches!(
            format_for_path(Path::new("puzzle")),
            Err(ParseError::UnknownExtension { .. })
        ));
    }

    #[test]
    fn test_parse_error_from_board_error() {
        let err = ParseError::from(BoardError::InvalidSize { len: 10 });
        assert!(err.to_string().contains("10"));
    }
}
