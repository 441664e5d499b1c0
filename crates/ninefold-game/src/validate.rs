//! Board validation for live player feedback.

use ninefold_core::{DigitGrid, House, PositionSet};

/// Returns every position participating in a row, column, or box duplicate.
///
/// For each house, every non-empty digit appearing two or more times flags
/// *all* cells in that house holding it, so both members of a duplicate
/// pair are reported, not just the second-seen one. Empty cells are never
/// flagged. The result is a pure function of the grid, so re-validating an
/// unchanged board yields an identical conflict set.
///
/// This complements [`is_valid_placement`]: the placement check judges a
/// hypothetical digit against the rest of the board during generation,
/// while this judges the board as the player has actually placed it.
///
/// [`is_valid_placement`]: ninefold_generator::is_valid_placement
#[must_use]
pub fn conflicts(grid: &DigitGrid) -> PositionSet {
    let mut flagged = PositionSet::new();
    for house in House::ALL {
        let positions = house.positions();

        let mut counts = [0u8; 9];
        for pos in positions {
            if let Some(digit) = grid[pos] {
                counts[usize::from(digit.value() - 1)] += 1;
            }
        }

        for pos in positions {
            if let Some(digit) = grid[pos]
                && counts[usize::from(digit.value() - 1)] >= 2
            {
                flagged.insert(pos);
            }
        }
    }
    flagged
}

#[cfg(test)]
mod tests {
    use ninefold_core::{Digit, Position};
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    #[test]
    fn test_clean_boards_have_no_conflicts() {
        assert!(conflicts(&DigitGrid::new()).is_empty());

        let solved: DigitGrid = SOLVED.parse().unwrap();
        assert!(conflicts(&solved).is_empty());
    }

    #[test]
    fn test_row_duplicate_flags_both_cells() {
        // Row 0 holds `5 3 . . 7 . . . 5`: the two 5s conflict, nothing else.
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Some(Digit::D5));
        grid.set(Position::new(1, 0), Some(Digit::D3));
        grid.set(Position::new(4, 0), Some(Digit::D7));
        grid.set(Position::new(8, 0), Some(Digit::D5));

        let flagged = conflicts(&grid);
        assert_eq!(flagged.len(), 2);
        assert!(flagged.contains(Position::new(0, 0)));
        assert!(flagged.contains(Position::new(8, 0)));
    }

    #[test]
    fn test_column_duplicate_flags_both_cells() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(2, 0), Some(Digit::D4));
        grid.set(Position::new(2, 8), Some(Digit::D4));

        let flagged = conflicts(&grid);
        assert_eq!(flagged.len(), 2);
        assert!(flagged.contains(Position::new(2, 0)));
        assert!(flagged.contains(Position::new(2, 8)));
    }

    #[test]
    fn test_box_duplicate_flags_both_cells() {
        // Same box, different row and column.
        let mut grid = DigitGrid::new();
        grid.set(Position::new(3, 3), Some(Digit::D9));
        grid.set(Position::new(5, 5), Some(Digit::D9));

        let flagged = conflicts(&grid);
        assert_eq!(flagged.len(), 2);
        assert!(flagged.contains(Position::new(3, 3)));
        assert!(flagged.contains(Position::new(5, 5)));
    }

    #[test]
    fn test_triplicate_flags_all_members() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 4), Some(Digit::D6));
        grid.set(Position::new(3, 4), Some(Digit::D6));
        grid.set(Position::new(8, 4), Some(Digit::D6));

        let flagged = conflicts(&grid);
        assert_eq!(flagged.len(), 3);
    }

    #[test]
    fn test_families_union() {
        // One row conflict and one independent box conflict.
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Some(Digit::D1));
        grid.set(Position::new(8, 0), Some(Digit::D1));
        grid.set(Position::new(6, 6), Some(Digit::D2));
        grid.set(Position::new(7, 7), Some(Digit::D2));

        let flagged = conflicts(&grid);
        assert_eq!(flagged.len(), 4);
    }

    #[test]
    fn test_idempotent_on_unchanged_grid() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        grid.set(Position::new(0, 0), Some(Digit::D8));

        let first = conflicts(&grid);
        let second = conflicts(&grid);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_flagged_iff_sharing_a_house_with_a_duplicate() {
        let mut grid: DigitGrid = SOLVED.parse().unwrap();
        // Overwrite one cell to create a conflict somewhere in the middle.
        grid.set(Position::new(4, 4), Some(Digit::D1));

        let flagged = conflicts(&grid);
        for pos in Position::ALL {
            let expected = grid[pos].is_some_and(|digit| {
                Position::ALL.into_iter().any(|other| {
                    other != pos
                        && grid[other] == Some(digit)
                        && (other.x() == pos.x()
                            || other.y() == pos.y()
                            || other.box_index() == pos.box_index())
                })
            });
            assert_eq!(flagged.contains(pos), expected, "at {pos}");
        }
    }

    proptest! {
        #[test]
        fn prop_flagged_iff_sharing_a_house_with_a_duplicate(
            cells in prop::collection::vec((0u8..81, 1u8..=9), 0..30),
        ) {
            let mut grid = DigitGrid::new();
            for (index, value) in cells {
                grid.set(Position::from_index(index), Digit::try_from_value(value));
            }

            let flagged = conflicts(&grid);
            for pos in Position::ALL {
                let expected = grid[pos].is_some_and(|digit| {
                    Position::ALL.into_iter().any(|other| {
                        other != pos
                            && grid[other] == Some(digit)
                            && (other.x() == pos.x()
                                || other.y() == pos.y()
                                || other.box_index() == pos.box_index())
                    })
                });
                prop_assert_eq!(flagged.contains(pos), expected, "at {}", pos);
            }
        }
    }
}
