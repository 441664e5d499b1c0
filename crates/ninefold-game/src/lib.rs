//! Game session management for the Ninefold Sudoku engine.
//!
//! This crate turns a generated puzzle into an interactive solve session:
//!
//! - [`Game`]: the player board (given/filled/empty cells) plus the stored
//!   solution, with given-cell protection, hints, reset, and the
//!   solve-check gate
//! - [`validate::conflicts`]: the board validator flagging every cell that
//!   participates in a row, column, or box duplicate
//! - [`SolveClock`]: the elapsed-time value fed by the presentation
//!   layer's one-second tick
//! - [`Session`]: a reducer consuming [`Command`]s and emitting
//!   [`Event`]s, so any presentation layer can drive the engine without
//!   the engine knowing about rendering or persistence
//!
//! # Examples
//!
//! ```
//! use ninefold_game::{Command, Event, Session};
//! use ninefold_generator::{Difficulty, PuzzleGenerator};
//!
//! let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
//! let mut session = Session::new(&puzzle);
//!
//! // Checking an incomplete board is rejected without changing state.
//! let events = session.apply(Command::CheckSolution);
//! assert!(matches!(events[0], Event::CheckFailed(_)));
//! assert!(!session.is_solved());
//! ```

pub mod cell;
pub mod clock;
pub mod error;
pub mod game;
pub mod session;
pub mod validate;

// Re-export commonly used types
pub use self::{
    cell::CellState,
    clock::SolveClock,
    error::{CheckFailure, GameError, RejectReason},
    game::Game,
    session::{Command, Event, MoveDirection, Session},
};
