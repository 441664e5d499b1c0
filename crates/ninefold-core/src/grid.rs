//! A 9×9 grid of optional digits.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 grid where each cell holds an optional [`Digit`].
///
/// `None` denotes an empty cell. The same type serves both as a solution
/// grid (always fully filled once generated) and as a problem grid (only
/// the clue cells filled).
///
/// The grid has a text notation of 81 characters in row-major order, using
/// `1`-`9` for digits and `.` for empty cells:
///
/// ```
/// use ninefold_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("5.3{}", ".".repeat(78)).parse().unwrap();
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(1, 0)], None);
/// assert_eq!(grid[Position::new(2, 0)], Some(Digit::D3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at the given position, or `None` if the cell is
    /// empty.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at the given position.
    #[inline]
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

/// Errors from parsing the 81-character grid notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDigitGridError {
    /// The input does not contain exactly 81 characters.
    #[display("grid notation must be 81 characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The input contains a character other than `1`-`9` or `.`.
    #[display("invalid character in grid notation: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for DigitGrid {
    type Err = ParseDigitGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseDigitGridError::InvalidLength(len));
        }
        let mut grid = Self::new();
        for (pos, c) in Position::ALL.into_iter().zip(s.chars()) {
            let digit = match c {
                '.' => None,
                '1'..='9' => Digit::try_from_value(c as u8 - b'0'),
                _ => return Err(ParseDigitGridError::InvalidCharacter(c)),
            };
            grid.set(pos, digit);
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    #[test]
    fn test_get_set() {
        let mut grid = DigitGrid::new();
        assert_eq!(grid.get(Position::new(3, 5)), None);

        grid.set(Position::new(3, 5), Some(Digit::D7));
        assert_eq!(grid.get(Position::new(3, 5)), Some(Digit::D7));
        assert_eq!(grid[Position::new(3, 5)], Some(Digit::D7));
        assert_eq!(grid.count_filled(), 1);

        grid.set(Position::new(3, 5), None);
        assert_eq!(grid.get(Position::new(3, 5)), None);
        assert_eq!(grid.count_filled(), 0);
    }

    #[test]
    fn test_parse_and_display() {
        let grid: DigitGrid = SOLVED.parse().unwrap();
        assert!(grid.is_complete());
        assert_eq!(grid.count_filled(), 81);
        assert_eq!(grid.to_string(), SOLVED);
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D1));
        assert_eq!(grid[Position::new(8, 8)], Some(Digit::D2));

        let empty: DigitGrid = ".".repeat(81).parse().unwrap();
        assert_eq!(empty, DigitGrid::new());
        assert!(!empty.is_complete());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseDigitGridError::InvalidLength(3))
        );
        let with_zero = format!("0{}", ".".repeat(80));
        assert_eq!(
            with_zero.parse::<DigitGrid>(),
            Err(ParseDigitGridError::InvalidCharacter('0'))
        );
    }
}
