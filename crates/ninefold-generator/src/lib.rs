//! Sudoku puzzle generation for the Ninefold engine.
//!
//! Generation runs in two phases:
//!
//! 1. [`solution::generate_solution`] builds a complete, valid solution
//!    grid via backtracking, seeded by filling the three diagonal boxes
//!    with random permutations (they share no row, column, or box, so the
//!    seed never conflicts with itself).
//! 2. [`puzzle::derive_puzzle`] reveals a difficulty-dependent number of
//!    clue cells from that solution; everything else starts empty.
//!
//! All randomness flows from a [`PuzzleSeed`], so a seed reproduces the
//! exact puzzle:
//!
//! ```
//! use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(Difficulty::Medium);
//! let seed = PuzzleSeed::from_phrase("doc example");
//! let a = generator.generate_with_seed(seed);
//! let b = generator.generate_with_seed(seed);
//! assert_eq!(a, b);
//! assert_eq!(a.problem.count_filled(), 36);
//! ```

pub mod generator;
pub mod placement;
pub mod puzzle;
pub mod seed;
pub mod solution;

// Re-export commonly used types
pub use self::{
    generator::PuzzleGenerator,
    placement::is_valid_placement,
    puzzle::{Difficulty, GeneratedPuzzle},
    seed::{ParsePuzzleSeedError, PuzzleSeed},
};
