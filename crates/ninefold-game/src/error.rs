//! Rejection and failure types.
//!
//! Everything here is a user-input rejection, not a system failure: the
//! operation that produced the error leaves the game state untouched.

use ninefold_core::PositionSet;

/// Errors returned by board-mutating game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The target cell is a given (clue) cell and cannot be modified.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
}

/// Why a session command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RejectReason {
    /// The command needs a selected cell and none is selected.
    #[display("select a cell first")]
    NoCellSelected,
    /// The selected cell is a given (clue) cell.
    #[display("this cell is part of the puzzle")]
    GivenCell,
}

/// Why a solution check did not succeed.
///
/// The variants form a gate evaluated in order: conflicts are reported
/// first (and the solution comparison skipped), then incompleteness, and
/// only a full, conflict-free board is compared against the stored
/// solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CheckFailure {
    /// The validator flagged duplicate digits at these positions.
    #[display("there are errors on the board; fix them before checking")]
    Conflicts(#[error(not(source))] PositionSet),
    /// These cells are still empty.
    #[display("fill all cells before checking the solution")]
    Incomplete(#[error(not(source))] PositionSet),
    /// The board is full and conflict-free but these cells do not match
    /// the stored solution.
    #[display("there are mistakes in the solution")]
    Incorrect(#[error(not(source))] PositionSet),
}
