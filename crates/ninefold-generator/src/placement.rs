//! Placement legality checks used during generation.

use ninefold_core::{Digit, DigitGrid, House, Position};

/// Returns `true` if placing `digit` at `pos` would not duplicate a digit
/// in the cell's row, column, or box.
///
/// The cell's own current value is ignored; only *other* cells are checked.
/// This answers "would this placement be legal against the rest of the
/// board" and is the primitive the backtracking search is built on. For
/// flagging conflicts on an already-placed board, use the board validator
/// in the game crate instead.
#[must_use]
pub fn is_valid_placement(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    House::of(pos)
        .into_iter()
        .flat_map(House::positions)
        .all(|other| other == pos || grid[other] != Some(digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[(Position, Digit)]) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for &(pos, digit) in cells {
            grid.set(pos, Some(digit));
        }
        grid
    }

    #[test]
    fn test_empty_grid_accepts_everything() {
        let grid = DigitGrid::new();
        for pos in [Position::new(0, 0), Position::new(4, 4), Position::new(8, 8)] {
            for digit in Digit::ALL {
                assert!(is_valid_placement(&grid, pos, digit));
            }
        }
    }

    #[test]
    fn test_row_column_and_box_duplicates_rejected() {
        let grid = grid_with(&[(Position::new(4, 2), Digit::D7)]);

        // Same row
        assert!(!is_valid_placement(&grid, Position::new(0, 2), Digit::D7));
        // Same column
        assert!(!is_valid_placement(&grid, Position::new(4, 8), Digit::D7));
        // Same box
        assert!(!is_valid_placement(&grid, Position::new(3, 0), Digit::D7));
        // Unrelated cell
        assert!(is_valid_placement(&grid, Position::new(0, 0), Digit::D7));
        // Other digits stay legal everywhere
        assert!(is_valid_placement(&grid, Position::new(0, 2), Digit::D6));
    }

    #[test]
    fn test_own_cell_value_is_ignored() {
        let grid = grid_with(&[(Position::new(4, 2), Digit::D7)]);

        // Re-placing the digit already in the target cell is legal.
        assert!(is_valid_placement(&grid, Position::new(4, 2), Digit::D7));
        // Replacing it with a digit free in all three houses is legal too.
        assert!(is_valid_placement(&grid, Position::new(4, 2), Digit::D1));
    }

    #[test]
    fn test_iff_characterization() {
        // Spot-check the contract: rejected iff the digit occurs at some
        // other position sharing a house with the target.
        let grid = grid_with(&[
            (Position::new(1, 1), Digit::D3),
            (Position::new(6, 6), Digit::D3),
            (Position::new(0, 8), Digit::D5),
        ]);

        for pos in Position::ALL {
            for digit in Digit::ALL {
                let conflicting = Position::ALL.into_iter().any(|other| {
                    other != pos
                        && grid[other] == Some(digit)
                        && (other.x() == pos.x()
                            || other.y() == pos.y()
                            || other.box_index() == pos.box_index())
                });
                assert_eq!(is_valid_placement(&grid, pos, digit), !conflicting);
            }
        }
    }
}
