//! Board position coordinates.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom).
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column and row coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Converts a box index (0-8) and a cell index within the box (0-8)
    /// into an absolute position.
    ///
    /// Boxes and cells are both numbered left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self::new(box_index % 3 * 3 + cell % 3, box_index / 3 * 3 + cell / 3)
    }

    /// Creates a position from a row-major linear index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self::new(index % 9, index / 9)
    }

    /// The column coordinate (0-8).
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// The row coordinate (0-8).
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Row-major linear index of this position (0-80).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Index of the containing 3×3 box (0-8, left to right, top to bottom).
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Top-left position of the containing 3×3 box.
    #[must_use]
    #[inline]
    pub const fn box_origin(self) -> Self {
        Self {
            x: self.x - self.x % 3,
            y: self.y - self.y % 3,
        }
    }

    /// The position one row up, or `None` at the top edge.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        match self.y.checked_sub(1) {
            Some(y) => Some(Self { x: self.x, y }),
            None => None,
        }
    }

    /// The position one row down, or `None` at the bottom edge.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.y < 8 {
            Some(Self {
                x: self.x,
                y: self.y + 1,
            })
        } else {
            None
        }
    }

    /// The position one column left, or `None` at the left edge.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        match self.x.checked_sub(1) {
            Some(x) => Some(Self { x, y: self.y }),
            None => None,
        }
    }

    /// The position one column right, or `None` at the right edge.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.x < 8 {
            Some(Self {
                x: self.x + 1,
                y: self.y,
            })
        } else {
            None
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.y + 1, self.x + 1)
    }
}
