//! Board position (x, y) coordinate type.
//!
//! ```text
//!  0 1 2 3
//! ┌──────► X, columns
//! │
//! │
//! ▼
//! Y, rows
//! ```

use std::{cmp::Ordering, fmt};

/// A cell position on a board, identified by `(x, y)` coordinates.
///
/// `Position` carries the *positional identity* of a cell: two positions are
/// equal iff their coordinates match, regardless of what value the board
/// holds there. This is the key used for hashing, deduplication, and change
/// tracking. Comparing a cell's *value* against a number is a separate
/// operation, [`Cell::matches`](crate::Cell::matches).
///
/// Positions order row-major (by `y`, then `x`), matching the board's cell
/// layout.
///
/// # Examples
///
/// ```
/// use omnidoku_core::Position;
///
/// let a = Position::new(2, 0);
/// let b = Position::new(0, 1);
/// assert!(a < b); // row-major: all of row 0 precedes row 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from `x` (column) and `y` (row) coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column coordinate.
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate.
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_identity_is_positional() {
        let mut seen = HashSet::new();
        seen.insert(Position::new(1, 2));
        assert!(seen.contains(&Position::new(1, 2)));
        assert!(!seen.contains(&Position::new(2, 1)));
    }

    #[test]
    fn test_row_major_order() {
        let mut positions = vec![
            Position::new(0, 1),
            Position::new(3, 0),
            Position::new(0, 0),
            Position::new(1, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(3, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(4, 7).to_string(), "(4, 7)");
    }
}
