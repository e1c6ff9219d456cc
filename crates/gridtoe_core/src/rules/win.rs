//! Win detection.

use super::lines::all_lines;
use crate::grid::Grid;
use crate::types::{Cell, Marker};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns true if every cell of some row, column or main diagonal holds
/// `marker`.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn has_won(grid: &Grid, marker: Marker) -> bool {
    let target = Cell::Occupied(marker);
    all_lines(grid.size())
        .iter()
        .any(|line| line.cells.iter().all(|&coord| grid.get(coord) == Some(target)))
}

/// Returns the first marker, in priority order, that has completed a line.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn check_winner(grid: &Grid) -> Option<Marker> {
    Marker::iter().find(|&marker| has_won(grid, marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(check_winner(&Grid::empty(3)), None);
    }

    #[test]
    fn test_winner_top_row() {
        let grid: Grid = "xxx/o.o/...".parse().unwrap();
        assert!(has_won(&grid, Marker::X));
        assert!(!has_won(&grid, Marker::O));
        assert_eq!(check_winner(&grid), Some(Marker::X));
    }

    #[test]
    fn test_winner_column() {
        let grid: Grid = "o../ox./o.x".parse().unwrap();
        assert_eq!(check_winner(&grid), Some(Marker::O));
    }

    #[test]
    fn test_winner_right_diagonal_four() {
        let grid: Grid = "...o/..o./.o../o...".parse().unwrap();
        assert!(has_won(&grid, Marker::O));
    }

    #[test]
    fn test_priority_order_when_both_complete() {
        let grid: Grid = "xxx/ooo/...".parse().unwrap();
        assert_eq!(check_winner(&grid), Some(Marker::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let grid: Grid = "xx./.../...".parse().unwrap();
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_single_cell_grid() {
        let grid: Grid = "o".parse().unwrap();
        assert!(has_won(&grid, Marker::O));
    }
}
