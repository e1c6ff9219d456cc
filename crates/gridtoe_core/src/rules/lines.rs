//! Line enumeration: rows, columns and the two main diagonals.

use crate::types::Coord;

/// Which family a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum LineKind {
    /// A full row.
    Row,
    /// A full column.
    Column,
    /// Top-left to bottom-right.
    LeftDiagonal,
    /// Top-right to bottom-left.
    RightDiagonal,
}

/// A line of cells checked for a win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line family.
    pub kind: LineKind,
    /// Cells along the line, in scan order.
    pub cells: Vec<Coord>,
}

/// Cells of row `r`, left to right.
pub fn row(size: usize, r: usize) -> Vec<Coord> {
    (0..size).map(|c| Coord::new(r, c)).collect()
}

/// Cells of column `c`, top to bottom.
pub fn column(size: usize, c: usize) -> Vec<Coord> {
    (0..size).map(|r| Coord::new(r, c)).collect()
}

/// Cells `(i, i)`.
pub fn left_diagonal(size: usize) -> Vec<Coord> {
    (0..size).map(|i| Coord::new(i, i)).collect()
}

/// Cells `(i, size - 1 - i)`.
pub fn right_diagonal(size: usize) -> Vec<Coord> {
    (0..size).map(|i| Coord::new(i, size - 1 - i)).collect()
}

/// Returns true if `coord` lies on either main diagonal.
pub fn on_diagonal(size: usize, coord: Coord) -> bool {
    coord.row < size
        && coord.col < size
        && (coord.row == coord.col || coord.row + coord.col == size - 1)
}

/// Every winning line: rows, then columns, then left and right diagonals.
pub fn all_lines(size: usize) -> Vec<Line> {
    if size == 0 {
        return Vec::new();
    }
    let rows = (0..size).map(|r| Line {
        kind: LineKind::Row,
        cells: row(size, r),
    });
    let columns = (0..size).map(|c| Line {
        kind: LineKind::Column,
        cells: column(size, c),
    });
    let diagonals = [
        Line {
            kind: LineKind::LeftDiagonal,
            cells: left_diagonal(size),
        },
        Line {
            kind: LineKind::RightDiagonal,
            cells: right_diagonal(size),
        },
    ];
    rows.chain(columns).chain(diagonals).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(all_lines(3).len(), 8);
        assert_eq!(all_lines(4).len(), 10);
        assert!(all_lines(0).is_empty());
    }

    #[test]
    fn test_scan_order() {
        let kinds: Vec<_> = all_lines(2).iter().map(|line| line.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Row,
                LineKind::Row,
                LineKind::Column,
                LineKind::Column,
                LineKind::LeftDiagonal,
                LineKind::RightDiagonal,
            ]
        );
    }

    #[test]
    fn test_right_diagonal_on_larger_board() {
        assert_eq!(
            right_diagonal(4),
            vec![
                Coord::new(0, 3),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(3, 0)
            ]
        );
    }

    #[test]
    fn test_on_diagonal() {
        assert!(on_diagonal(3, Coord::new(1, 1)));
        assert!(on_diagonal(3, Coord::new(0, 2)));
        assert!(!on_diagonal(3, Coord::new(0, 1)));
        assert!(on_diagonal(4, Coord::new(2, 1)));
        assert!(!on_diagonal(4, Coord::new(0, 1)));
    }
}
