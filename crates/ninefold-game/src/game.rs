//! A single puzzle instance.

use ninefold_core::{Digit, DigitGrid, Position, PositionSet};
use ninefold_generator::GeneratedPuzzle;

use crate::{CellState, CheckFailure, GameError, validate};

/// A single puzzle instance: the player board plus the stored solution.
///
/// Cells from the puzzle's problem grid are given (fixed) cells and can
/// never be modified; everything else is player input. The solution grid
/// backs hints and the solve check.
///
/// # Examples
///
/// ```
/// use ninefold_game::{CellState, Game};
/// use ninefold_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Medium).generate();
/// let game = Game::new(&puzzle);
///
/// let givens = ninefold_core::Position::ALL
///     .into_iter()
///     .filter(|&pos| game.cell(pos).is_given())
///     .count();
/// assert_eq!(givens, 36);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// Filled cells of the problem grid become givens; the rest start
    /// empty.
    #[must_use]
    pub fn new(puzzle: &GeneratedPuzzle) -> Self {
        Self::from_grids(&puzzle.problem, &puzzle.solution)
    }

    /// Creates a game from explicit problem and solution grids.
    ///
    /// The solution grid must be complete; filled cells of `problem` are
    /// treated as givens.
    #[must_use]
    pub fn from_grids(problem: &DigitGrid, solution: &DigitGrid) -> Self {
        debug_assert!(solution.is_complete());
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution: solution.clone(),
        }
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    #[inline]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the stored solution grid for this puzzle.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Places a player digit at the given position, replacing any prior
    /// player digit there.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position holds a
    /// given cell; the board is left unchanged.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the player digit at the given position. Clearing an already
    /// empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position holds a
    /// given cell; the board is left unchanged.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Empty;
        Ok(())
    }

    /// Clears every player-entered digit, restoring the board to its
    /// clues-only state. Given cells keep their values.
    pub fn reset_inputs(&mut self) {
        for cell in &mut self.cells {
            if cell.is_filled() {
                *cell = CellState::Empty;
            }
        }
    }

    /// Fills the cell at `pos` with its solution digit and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the position holds a
    /// given cell; the board is left unchanged.
    pub fn hint(&mut self, pos: Position) -> Result<Digit, GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        let Some(digit) = self.solution[pos] else {
            unreachable!("solution grid is complete");
        };
        self.cells[pos.index()] = CellState::Filled(digit);
        Ok(digit)
    }

    /// Returns the board as a plain digit grid (givens and player digits
    /// alike; empty cells as `None`).
    #[must_use]
    pub fn digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).as_digit());
        }
        grid
    }

    /// Returns the current conflict set of the board.
    ///
    /// See [`validate::conflicts`] for the flagging rules.
    #[must_use]
    pub fn conflicts(&self) -> PositionSet {
        validate::conflicts(&self.digit_grid())
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns the positions of all empty cells.
    #[must_use]
    pub fn empty_positions(&self) -> PositionSet {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.cell(pos).is_empty())
            .collect()
    }

    /// Checks the board against the stored solution.
    ///
    /// Preconditions gate the comparison: a board with validator conflicts
    /// fails with [`CheckFailure::Conflicts`] (comparison skipped), an
    /// incomplete board fails with [`CheckFailure::Incomplete`]. Only a
    /// full, conflict-free board is compared cell-by-cell; mismatches are
    /// reported in [`CheckFailure::Incorrect`].
    ///
    /// Success means equality with the stored solution. A puzzle admitting
    /// other valid solutions will report those as incorrect; the engine
    /// deliberately does not re-solve.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`CheckFailure`] gate, as described above.
    pub fn check_solution(&self) -> Result<(), CheckFailure> {
        let conflicts = self.conflicts();
        if !conflicts.is_empty() {
            return Err(CheckFailure::Conflicts(conflicts));
        }

        let empty = self.empty_positions();
        if !empty.is_empty() {
            return Err(CheckFailure::Incomplete(empty));
        }

        let incorrect: PositionSet = Position::ALL
            .into_iter()
            .filter(|&pos| self.cell(pos).as_digit() != self.solution[pos])
            .collect();
        if incorrect.is_empty() {
            Ok(())
        } else {
            Err(CheckFailure::Incorrect(incorrect))
        }
    }
}
