//! Compact text format: one character per cell.
//!
//! ```text
//! 53_ _7_ ___           53**7****
//! 6__ 195 ___           6**195***
//! _98 ___ _6_           *98****6*
//!                       8***6***3
//! 8__ _6_ __3    or     4**8*3**1
//! 4__ 8_3 __1           7***2***6
//! 7__ _2_ __6           *6****28*
//!                       ***419**5
//! _6_ ___ 28_           ****8**79
//! ___ 419 __5
//! ___ _8_ _79
//! ```
//!
//! All whitespace is ignored on load, so both layouts above parse the same.
//! The characters `_`, `*`, and `.` mark empty cells. One character per
//! cell limits this format to boards of side 9 or smaller; larger boards
//! use the JSON format.

use omnidoku_core::Board;

use crate::{BoardFormat, ParseError};

/// The text format, with configurable free-space characters.
///
/// # Examples
///
/// ```
/// use omnidoku_format::{BoardFormat, TextFormat};
///
/// let format = TextFormat::default();
/// let board = format.load("3412 _23_ _321 2143")?;
/// assert_eq!(board.size(), 4);
/// assert!(board.cell(0, 1).is_empty());
/// # Ok::<(), omnidoku_format::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TextFormat {
    free_chars: Vec<char>,
}

impl Default for TextFormat {
    /// The standard free-space characters: `_`, `*`, and `.`.
    fn default() -> Self {
        Self::new("_*.")
    }
}

impl TextFormat {
    /// Creates a text format treating each character of `free_chars` as an
    /// empty-cell marker. Dumps use the first one.
    ///
    /// # Panics
    ///
    /// Panics if `free_chars` is empty.
    #[must_use]
    pub fn new(free_chars: &str) -> Self {
        assert!(!free_chars.is_empty(), "at least one free-space character is required");
        Self {
            free_chars: free_chars.chars().collect(),
        }
    }
}

impl BoardFormat for TextFormat {
    fn load(&self, input: &str) -> Result<Board, ParseError> {
        let mut values = Vec::new();
        for symbol in input.chars() {
            if symbol.is_whitespace() {
                continue;
            }
            if self.free_chars.contains(&symbol) {
                values.push(0);
            } else if let Some(digit) = symbol.to_digit(10) {
                #[expect(clippy::cast_possible_truncation)]
                values.push(digit as u8);
            } else {
                return Err(ParseError::BadSymbol { symbol });
            }
        }
        Ok(Board::from_values(&values)?)
    }

    fn dump(&self, board: &Board) -> String {
        let size = board.size();
        let square = board.square_size();
        let free_char = self.free_chars[0];

        let mut lines = Vec::new();
        for y in 0..size {
            let mut line = String::new();
            for (x, cell) in board.row(y).enumerate() {
                if cell.is_empty() {
                    line.push(free_char);
                } else {
                    line.push_str(&cell.value().to_string());
                }
                let column = x + 1;
                if column % usize::from(square) == 0 && column < usize::from(size) {
                    line.push(' ');
                }
            }
            lines.push(line);
            let row = y + 1;
            if row % square == 0 && row < size {
                lines.push(String::new());
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE_9: &str = "\
        53_ _7_ ___\n\
        6__ 195 ___\n\
        _98 ___ _6_\n\
        \n\
        8__ _6_ __3\n\
        4__ 8_3 __1\n\
        7__ _2_ __6\n\
        \n\
        _6_ ___ 28_\n\
        ___ 419 __5\n\
        ___ _8_ _79";

    #[test]
    fn test_load_ignores_whitespace_and_free_chars() {
        let format = TextFormat::default();
        let board = format.load(PUZZLE_9).unwrap();
        assert_eq!(board.size(), 9);
        assert_eq!(board.cell(0, 0).value(), 5);
        assert_eq!(board.cell(4, 0).value(), 7);
        assert!(board.cell(2, 0).is_empty());
        assert_eq!(board.cell(8, 8).value(), 9);
    }

    #[test]
    fn test_load_star_form() {
        let format = TextFormat::default();
        let compact = format.load("3412.23..3212143");
        // `.` and `*` both mean empty.
        let starred = format.load("3412*23**3212143");
        assert_eq!(compact.unwrap(), starred.unwrap());
    }

    #[test]
    fn test_load_rejects_unknown_symbols() {
        let format = TextFormat::default();
        assert!(matches!(
            format.load("3412_23x_3212143"),
            Err(ParseError::BadSymbol { symbol: 'x' })
        ));
    }

    #[test]
    fn test_load_rejects_wrong_length() {
        let format = TextFormat::default();
        assert!(matches!(
            format.load("123456789"),
            Err(ParseError::Board(_))
        ));
    }

    #[test]
    fn test_load_rejects_out_of_range_value() {
        // 9 is not a valid value on a 4×4 board.
        let format = TextFormat::default();
        assert!(matches!(
            format.load("9412_23__3212143"),
            Err(ParseError::Board(_))
        ));
    }

    #[test]
    fn test_dump_groups_squares() {
        let format = TextFormat::default();
        let board = format.load("3412 _23_ _321 2143").unwrap();
        assert_eq!(format.dump(&board), "34 12\n_2 3_\n\n_3 21\n21 43");
    }

    #[test]
    fn test_round_trip() {
        let format = TextFormat::default();
        let board = format.load(PUZZLE_9).unwrap();
        let dumped = format.dump(&board);
        assert_eq!(format.load(&dumped).unwrap(), board);
    }

    #[test]
    fn test_custom_free_char() {
        let format = TextFormat::new("?");
        let board = format.load("3412?23??3212143").unwrap();
        assert!(board.cell(0, 1).is_empty());
        assert!(format.dump(&board).contains('?'));
    }
}
