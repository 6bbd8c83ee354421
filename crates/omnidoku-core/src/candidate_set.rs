//! A set of candidate values for a single cell.
//!
//! This module provides [`CandidateSet`], a bitset over the values `1..=n`
//! for boards of side `n`. The backing store is a single `u128`, so any
//! admissible board side (the largest below 128 is 121) fits without
//! allocation.

use std::{fmt, iter::FusedIterator};

/// Largest value a [`CandidateSet`] can hold.
///
/// The set is backed by a `u128`, one bit per value. Admissible board sides
/// are perfect squares, so the largest side actually reachable is 121 (11²).
pub const MAX_VALUE: u8 = 127;

/// A set of values in `1..=n`, represented as a bitset.
///
/// Bit `v - 1` represents value `v`. Iteration yields values in ascending
/// order; the solver's branching step relies on this order being
/// deterministic.
///
/// # Examples
///
/// ```
/// use omnidoku_core::CandidateSet;
///
/// // All candidates for a 9×9 board.
/// let mut candidates = CandidateSet::full(9);
/// candidates.remove(5);
/// candidates.remove(7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(5));
/// assert!(candidates.contains(1));
///
/// let collected: Vec<u8> = candidates.iter().collect();
/// assert_eq!(collected, vec![1, 2, 3, 4, 6, 8, 9]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CandidateSet {
    bits: u128,
}

impl CandidateSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty candidate set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates the full set `{1..=size}`.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_VALUE`].
    #[must_use]
    pub fn full(size: u8) -> Self {
        assert!(size <= MAX_VALUE, "board side {size} exceeds {MAX_VALUE}");
        if size == 0 {
            Self::EMPTY
        } else {
            Self {
                bits: (1u128 << size) - 1,
            }
        }
    }

    /// Inserts a value into the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0 or exceeds [`MAX_VALUE`].
    #[inline]
    pub fn insert(&mut self, value: u8) {
        self.bits |= Self::bit(value);
    }

    /// Removes a value from the set. Removing an absent value is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0 or exceeds [`MAX_VALUE`].
    #[inline]
    pub fn remove(&mut self, value: u8) {
        self.bits &= !Self::bit(value);
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0 or exceeds [`MAX_VALUE`].
    #[inline]
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        self.bits & Self::bit(value) != 0
    }

    /// Returns the number of values in the set.
    #[inline]
    #[must_use]
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole member of the set, or `None` if the set does not
    /// contain exactly one value.
    ///
    /// A cell whose candidate set answers `Some` here is a naked single.
    ///
    /// # Examples
    ///
    /// ```
    /// use omnidoku_core::CandidateSet;
    ///
    /// let mut set = CandidateSet::full(4);
    /// assert_eq!(set.as_single(), None);
    ///
    /// set.remove(1);
    /// set.remove(2);
    /// set.remove(4);
    /// assert_eq!(set.as_single(), Some(3));
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<u8> {
        if self.bits.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            Some(self.bits.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns an iterator over the values in ascending order.
    #[inline]
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }

    fn bit(value: u8) -> u128 {
        assert!(
            (1..=MAX_VALUE).contains(&value),
            "candidate value must be in 1..={MAX_VALUE}, got {value}"
        );
        1u128 << (value - 1)
    }
}

impl FromIterator<u8> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Debug for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Ascending-order iterator over a [`CandidateSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_contains_whole_range() {
        let set = CandidateSet::full(16);
        assert_eq!(set.len(), 16);
        for value in 1..=16 {
            assert!(set.contains(value));
        }
        assert!(!set.contains(17));
    }

    #[test]
    fn test_insert_remove() {
        let mut set = CandidateSet::new();
        set.insert(3);
        set.insert(9);
        assert_eq!(set.len(), 2);

        set.remove(3);
        assert!(!set.contains(3));
        assert!(set.contains(9));

        // Removing an absent value is a no-op.
        set.remove(3);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(CandidateSet::from_iter([7]).as_single(), Some(7));
        assert_eq!(CandidateSet::from_iter([7, 8]).as_single(), None);
        assert_eq!(CandidateSet::EMPTY.as_single(), None);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let set = CandidateSet::from_iter([9, 1, 5, 3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_exact_size() {
        let set = CandidateSet::from_iter([2, 4, 6]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_largest_side() {
        let set = CandidateSet::full(121);
        assert_eq!(set.len(), 121);
        assert!(set.contains(121));
    }

    #[test]
    #[should_panic(expected = "candidate value must be")]
    fn test_rejects_zero() {
        let mut set = CandidateSet::new();
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "board side")]
    fn test_full_rejects_oversized() {
        let _ = CandidateSet::full(128);
    }
}
