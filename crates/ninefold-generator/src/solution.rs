//! Complete solution grid generation.

use ninefold_core::{Digit, DigitGrid, Position};
use rand::{Rng, seq::SliceRandom as _};

use crate::placement::is_valid_placement;

/// Generates a complete, valid solution grid.
///
/// The three diagonal boxes (indices 0, 4, 8) are filled first with random
/// permutations of 1-9; they share no row, column, or box, so any
/// combination is a valid partial grid. Backtracking then fills the
/// remaining cells in row-major order, trying digits in ascending order.
/// Solution variety comes entirely from the diagonal seed, which keeps the
/// seed → solution mapping stable.
///
/// # Panics
///
/// Panics if the backtracking search fails at the top level. A valid
/// diagonal seed always extends to a full solution, so this indicates an
/// internal consistency bug rather than a recoverable condition.
pub fn generate_solution<R>(rng: &mut R) -> DigitGrid
where
    R: Rng + ?Sized,
{
    let mut grid = DigitGrid::new();
    fill_diagonal_boxes(&mut grid, rng);
    let solved = solve(&mut grid);
    assert!(solved, "diagonally seeded grid must have a solution");
    grid
}

fn fill_diagonal_boxes<R>(grid: &mut DigitGrid, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for box_index in [0, 4, 8] {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        for (cell, digit) in (0..9).zip(digits) {
            grid.set(Position::from_box(box_index, cell), Some(digit));
        }
    }
}

// Classic recursive backtracking. Depth is bounded by the 81 cells, so
// true recursion is fine here.
fn solve(grid: &mut DigitGrid) -> bool {
    let Some(pos) = find_empty_cell(grid) else {
        return true;
    };
    for digit in Digit::ALL {
        if is_valid_placement(grid, pos, digit) {
            grid.set(pos, Some(digit));
            if solve(grid) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

fn find_empty_cell(grid: &DigitGrid) -> Option<Position> {
    Position::ALL.into_iter().find(|&pos| grid[pos].is_none())
}
