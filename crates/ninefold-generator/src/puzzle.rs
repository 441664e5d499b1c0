//! Difficulty levels and clue selection.

use std::fmt::{self, Display};

use ninefold_core::{DigitGrid, Position};
use rand::{Rng, RngExt as _};

use crate::seed::PuzzleSeed;

/// Puzzle difficulty, controlling how many clue cells are revealed.
///
/// This is a coarse cell-count heuristic, not a rating of required solving
/// techniques: fewer clues generally means harder, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Difficulty {
    /// 45 clues revealed.
    Easy,
    /// 36 clues revealed.
    #[default]
    Medium,
    /// 30 clues revealed.
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The number of clue cells revealed at this difficulty.
    #[must_use]
    pub const fn clue_count(self) -> usize {
        match self {
            Self::Easy => 45,
            Self::Medium => 36,
            Self::Hard => 30,
        }
    }

    /// The next level in the easy → medium → hard → easy cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// A generated puzzle: the problem grid, its solution, and provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The clue cells; filled positions are the fixed (given) cells of the
    /// puzzle, everything else starts empty.
    pub problem: DigitGrid,
    /// The complete solution the problem was derived from.
    pub solution: DigitGrid,
    /// The difficulty used for clue selection.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Derives a problem grid by revealing clue cells from a solution.
///
/// Positions are drawn uniformly at random until exactly
/// [`Difficulty::clue_count`] distinct cells carry their solution digit.
/// The derived puzzle is not guaranteed to have a unique solution; the
/// game only ever checks the player's board against the stored solution.
pub fn derive_puzzle<R>(solution: &DigitGrid, difficulty: Difficulty, rng: &mut R) -> DigitGrid
where
    R: Rng + ?Sized,
{
    let mut problem = DigitGrid::new();
    let mut revealed = 0;
    while revealed < difficulty.clue_count() {
        let x = rng.random_range(0..9);
        let y = rng.random_range(0..9);
        let pos = Position::new(x, y);
        if problem[pos].is_none() {
            problem.set(pos, solution[pos]);
            revealed += 1;
        }
    }
    problem
}
