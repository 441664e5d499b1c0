//! The puzzle generation entry point.

use crate::{
    puzzle::{self, Difficulty, GeneratedPuzzle},
    seed::PuzzleSeed,
    solution,
};

/// Generates Sudoku puzzles at a fixed difficulty.
///
/// # Examples
///
/// ```
/// use ninefold_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(Difficulty::Hard);
/// let puzzle = generator.generate();
/// assert_eq!(puzzle.problem.count_filled(), 30);
/// assert!(puzzle.solution.is_complete());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// The difficulty this generator produces.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// Repeated calls produce different puzzles with overwhelming
    /// probability (the seed space is 256 bits).
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and difficulty always yield the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = solution::generate_solution(&mut rng);
        let problem = puzzle::derive_puzzle(&solution, self.difficulty, &mut rng);
        log::debug!(
            "generated puzzle: difficulty={}, clues={}, seed={seed}",
            self.difficulty,
            problem.count_filled(),
        );
        GeneratedPuzzle {
            problem,
            solution,
            difficulty: self.difficulty,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::is_valid_placement;
    use ninefold_core::{House, Position};

    #[test]
    fn test_generate_with_seed_is_deterministic() {
        let generator = PuzzleGenerator::new(Difficulty::Medium);
        let seed = PuzzleSeed::from_phrase("determinism");
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
    }

    #[test]
    fn test_generate_varies_across_calls() {
        let generator = PuzzleGenerator::new(Difficulty::Easy);
        assert_ne!(generator.generate(), generator.generate());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_generated_puzzles_are_well_formed(bytes in any::<[u8; 32]>()) {
            let generator = PuzzleGenerator::new(Difficulty::Hard);
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes(bytes));

            // Solution: every house is a permutation of 1-9.
            prop_assert!(puzzle.solution.is_complete());
            for house in House::ALL {
                for pos in house.positions() {
                    let digit = puzzle.solution[pos].unwrap();
                    prop_assert!(is_valid_placement(&puzzle.solution, pos, digit));
                }
            }

            // Problem: exact clue count, every clue matches the solution.
            prop_assert_eq!(puzzle.problem.count_filled(), 30);
            for pos in Position::ALL {
                if puzzle.problem[pos].is_some() {
                    prop_assert_eq!(puzzle.problem[pos], puzzle.solution[pos]);
                }
            }
        }
    }
}
