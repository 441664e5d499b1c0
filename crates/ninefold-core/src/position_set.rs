//! Compact sets of board positions.

use std::{
    iter::FusedIterator,
    ops::{BitOr, BitOrAssign},
};

use crate::Position;

/// A set of board positions backed by a 128-bit mask.
///
/// Bit `i` corresponds to the position with row-major index `i`. Used for
/// conflict sets and other per-cell flags where the board size is fixed.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Position, PositionSet};
///
/// let mut set = PositionSet::new();
/// set.insert(Position::new(0, 0));
/// set.insert(Position::new(8, 0));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Position::new(8, 0)));
/// assert!(!set.contains(Position::new(4, 4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PositionSet {
    bits: u128,
}

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a position to the set.
    #[inline]
    pub const fn insert(&mut self, pos: Position) {
        self.bits |= 1 << pos.index();
    }

    /// Removes a position from the set.
    #[inline]
    pub const fn remove(&mut self, pos: Position) {
        self.bits &= !(1 << pos.index());
    }

    /// Returns `true` if the set contains the position.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & (1 << pos.index()) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates the contained positions in row-major order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl BitOr for PositionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for PositionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut set = Self::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`].
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
