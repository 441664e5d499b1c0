//! Core data structures for the Ninefold Sudoku engine.
//!
//! This crate provides the grid data model shared by puzzle generation and
//! game session management:
//!
//! - [`digit`]: Type-safe representation of Sudoku digits 1-9
//! - [`position`]: Board position (x, y) coordinates
//! - [`house`]: Rows, columns, and 3×3 boxes as a single enumeration
//! - [`grid`]: A 9×9 grid of optional digits with a text notation
//! - [`position_set`]: Compact sets of board positions
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! assert_eq!(grid[Position::new(4, 4)], Some(Digit::D5));
//! assert_eq!(grid.count_filled(), 1);
//! ```

pub mod digit;
pub mod grid;
pub mod house;
pub mod position;
pub mod position_set;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    grid::{DigitGrid, ParseDigitGridError},
    house::House,
    position::Position,
    position_set::PositionSet,
};
