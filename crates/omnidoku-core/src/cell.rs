//! A single board cell: value plus candidate tracking.

use crate::{CandidateSet, Position};

/// One grid position holding a value and a candidate set.
///
/// A value of 0 means the cell is empty; `1..=n` is a filled value for a
/// board of side `n`. The candidate set is only meaningful for empty cells
/// and is maintained exclusively by the solver: it is reinitialized at the
/// start of every solving attempt and pruned during propagation. A filled
/// cell's candidate set is ignored.
///
/// Cell identity is positional. To ask "does this cell hold value 3?" use
/// [`matches`](Cell::matches); to ask "is this the cell at (2, 1)?" compare
/// [`position`](Cell::position)s. The two relations are deliberately kept
/// apart.
///
/// # Examples
///
/// ```
/// use omnidoku_core::{Cell, Position};
///
/// let mut cell = Cell::new(Position::new(2, 1), 0);
/// assert!(cell.is_empty());
///
/// cell.set_value(3);
/// assert!(cell.matches(3));
/// assert!(!cell.matches(4));
///
/// cell.clear();
/// assert!(cell.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    value: u8,
    candidates: CandidateSet,
}

impl Cell {
    /// Creates a cell at `position` with the given value (0 = empty) and an
    /// empty candidate set.
    #[must_use]
    pub const fn new(position: Position, value: u8) -> Self {
        Self {
            position,
            value,
            candidates: CandidateSet::EMPTY,
        }
    }

    /// Returns the cell's position. This is the cell's identity key.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the cell's value, 0 meaning empty.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Sets the cell's value.
    #[inline]
    pub const fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Marks the cell as empty.
    #[inline]
    pub const fn clear(&mut self) {
        self.value = 0;
    }

    /// Returns `true` if the cell is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Returns `true` if the cell's value equals `value`.
    ///
    /// This is the narrow value-comparison relation used by constraint
    /// rules when counting occurrences within a row, column, or square.
    /// It says nothing about cell identity.
    #[inline]
    #[must_use]
    pub const fn matches(&self, value: u8) -> bool {
        self.value == value
    }

    /// Returns the cell's candidate set.
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> CandidateSet {
        self.candidates
    }

    /// Returns a mutable reference to the cell's candidate set.
    #[inline]
    pub const fn candidates_mut(&mut self) -> &mut CandidateSet {
        &mut self.candidates
    }

    /// Replaces the cell's candidate set.
    #[inline]
    pub const fn set_candidates(&mut self, candidates: CandidateSet) {
        self.candidates = candidates;
    }
}
