//! The interactive solve session.

use ninefold_core::{Digit, Position, PositionSet};
use ninefold_generator::{Difficulty, GeneratedPuzzle};

use crate::{CheckFailure, Game, RejectReason, SolveClock};

/// Directions for moving the cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl MoveDirection {
    /// Applies the move to a position, or `None` at the board edge.
    #[must_use]
    pub fn apply_to(self, pos: Position) -> Option<Position> {
        match self {
            Self::Up => pos.up(),
            Self::Down => pos.down(),
            Self::Left => pos.left(),
            Self::Right => pos.right(),
        }
    }
}

/// A command consumed by [`Session::apply`].
///
/// Commands are the only way state changes; the presentation layer
/// translates raw input (clicks, keys, the timer) into commands and
/// renders from the emitted [`Event`]s plus the session's accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Atomically replace the current puzzle with a freshly generated one.
    StartNewGame(GeneratedPuzzle),
    /// Select the cell at the given position.
    SelectCell(Position),
    /// Drop the current selection.
    ClearSelection,
    /// Move the selection one cell in the given direction.
    MoveSelection(MoveDirection),
    /// Enter a digit into the selected cell.
    InputDigit(Digit),
    /// Clear the selected cell.
    ClearCell,
    /// Reveal the solution digit of the selected cell.
    RequestHint,
    /// Clear every player-entered digit, keeping the clues.
    ResetInputs,
    /// Check the board against the stored solution.
    CheckSolution,
    /// One-second timer tick from the presentation layer's scheduler.
    Tick,
}

/// What the session reports back after applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new puzzle is in place; render everything from scratch.
    PuzzleStarted,
    /// The board changed; `conflicts` is the freshly computed conflict set
    /// for error highlighting.
    BoardChanged {
        /// Conflict set of the board after the change.
        conflicts: PositionSet,
    },
    /// A hint revealed the solution digit of the selected cell.
    HintRevealed {
        /// The hinted cell.
        position: Position,
        /// The revealed digit.
        digit: Digit,
    },
    /// The command was rejected; no state changed.
    InputRejected(RejectReason),
    /// A solution check did not succeed; no state changed.
    CheckFailed(CheckFailure),
    /// The puzzle was solved. Fired exactly once per puzzle; observers
    /// persist their puzzles-solved counter on this event.
    Solved {
        /// Elapsed solve time in whole seconds.
        elapsed_seconds: u64,
    },
}

/// An interactive solve session: one puzzle, a selection, and the clock.
///
/// The session is a synchronous reducer: every [`Command`] runs to
/// completion and returns the [`Event`]s the presentation layer needs to
/// react to. Exactly one actor drives it, so no locking is involved.
///
/// # Examples
///
/// ```
/// use ninefold_game::{Command, Event, RejectReason, Session};
/// use ninefold_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
/// let mut session = Session::new(&puzzle);
///
/// // A hint needs a selected cell.
/// let events = session.apply(Command::RequestHint);
/// assert_eq!(
///     events,
///     vec![Event::InputRejected(RejectReason::NoCellSelected)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    difficulty: Difficulty,
    selected_cell: Option<Position>,
    clock: SolveClock,
    solved: bool,
}

impl Session {
    /// Creates a session for a generated puzzle and starts the clock.
    #[must_use]
    pub fn new(puzzle: &GeneratedPuzzle) -> Self {
        log::info!(
            "new game: difficulty={}, clues={}",
            puzzle.difficulty,
            puzzle.problem.count_filled(),
        );
        let mut clock = SolveClock::new();
        clock.start();
        Self {
            game: Game::new(puzzle),
            difficulty: puzzle.difficulty,
            selected_cell: None,
            clock,
            solved: false,
        }
    }

    /// The current game board.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The difficulty of the current puzzle.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The currently selected cell, if any.
    #[must_use]
    pub fn selected_cell(&self) -> Option<Position> {
        self.selected_cell
    }

    /// The solve clock; read it after a `Tick` to refresh the display.
    #[must_use]
    pub fn clock(&self) -> SolveClock {
        self.clock
    }

    /// Whether the puzzle has been solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Applies a command and returns the resulting events.
    pub fn apply(&mut self, command: Command) -> Vec<Event> {
        match command {
            Command::StartNewGame(puzzle) => self.start_new_game(&puzzle),
            Command::SelectCell(pos) => {
                self.selected_cell = Some(pos);
                Vec::new()
            }
            Command::ClearSelection => {
                self.selected_cell = None;
                Vec::new()
            }
            Command::MoveSelection(direction) => {
                let pos = self.selected_cell.get_or_insert(Position::new(0, 0));
                if let Some(new_pos) = direction.apply_to(*pos) {
                    *pos = new_pos;
                }
                Vec::new()
            }
            Command::InputDigit(digit) => self.with_selected(|session, pos| {
                match session.game.set_digit(pos, digit) {
                    Ok(()) => vec![session.board_changed()],
                    Err(_) => vec![Event::InputRejected(RejectReason::GivenCell)],
                }
            }),
            Command::ClearCell => self.with_selected(|session, pos| {
                match session.game.clear_cell(pos) {
                    Ok(()) => vec![session.board_changed()],
                    Err(_) => vec![Event::InputRejected(RejectReason::GivenCell)],
                }
            }),
            Command::RequestHint => self.with_selected(|session, pos| {
                match session.game.hint(pos) {
                    Ok(digit) => vec![
                        Event::HintRevealed {
                            position: pos,
                            digit,
                        },
                        session.board_changed(),
                    ],
                    Err(_) => vec![Event::InputRejected(RejectReason::GivenCell)],
                }
            }),
            Command::ResetInputs => {
                self.game.reset_inputs();
                vec![self.board_changed()]
            }
            Command::CheckSolution => self.check_solution(),
            Command::Tick => {
                if !self.solved {
                    self.clock.tick();
                }
                Vec::new()
            }
        }
    }

    fn start_new_game(&mut self, puzzle: &GeneratedPuzzle) -> Vec<Event> {
        log::info!(
            "new game: difficulty={}, clues={}",
            puzzle.difficulty,
            puzzle.problem.count_filled(),
        );
        self.game = Game::new(puzzle);
        self.difficulty = puzzle.difficulty;
        self.selected_cell = None;
        self.solved = false;
        self.clock.start();
        vec![Event::PuzzleStarted]
    }

    fn check_solution(&mut self) -> Vec<Event> {
        // The solved latch guarantees one completion event per puzzle, so
        // observers can increment a persisted counter without dedup logic.
        if self.solved {
            return Vec::new();
        }
        match self.game.check_solution() {
            Ok(()) => {
                self.solved = true;
                self.clock.stop();
                log::info!("puzzle solved in {}", self.clock);
                vec![Event::Solved {
                    elapsed_seconds: self.clock.elapsed_seconds(),
                }]
            }
            Err(failure) => vec![Event::CheckFailed(failure)],
        }
    }

    fn with_selected<F>(&mut self, f: F) -> Vec<Event>
    where
        F: FnOnce(&mut Self, Position) -> Vec<Event>,
    {
        match self.selected_cell {
            Some(pos) => f(self, pos),
            None => vec![Event::InputRejected(RejectReason::NoCellSelected)],
        }
    }

    fn board_changed(&self) -> Event {
        Event::BoardChanged {
            conflicts: self.game.conflicts(),
        }
    }
}
