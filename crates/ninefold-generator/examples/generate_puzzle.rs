//! Example demonstrating basic Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty level
//! - Generate a random puzzle, or reproduce one from a seed
//! - Display the problem, solution, and seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a puzzle from its 64-character hex seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <SEED>
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use ninefold_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty controlling the number of revealed clues.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// 64-character hex seed for reproducible generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = PuzzleGenerator::new(args.difficulty.into());
    let puzzle = match &args.seed {
        Some(seed) => match seed.parse::<PuzzleSeed>() {
            Ok(seed) => generator.generate_with_seed(seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => generator.generate(),
    };

    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!(
        "  {} ({} clues)",
        puzzle.difficulty,
        puzzle.difficulty.clue_count()
    );
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
