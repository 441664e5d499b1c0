//! Per-cell state of the player board.

use ninefold_core::Digit;

/// The state of a single cell in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// A clue cell revealed at puzzle creation; never editable.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// No digit.
    Empty,
}

impl CellState {
    /// Returns the digit held by the cell, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}
