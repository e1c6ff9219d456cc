//! Per-cell heuristic scores produced by the opponent.

use crate::types::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score given to occupied cells.
pub const INELIGIBLE: i32 = -1;

/// Heuristic scores laid out like the grid they were computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredBoard {
    scores: Vec<Vec<i32>>,
}

impl ScoredBoard {
    pub(crate) fn from_rows(scores: Vec<Vec<i32>>) -> Self {
        Self { scores }
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.scores.len()
    }

    /// Scores as rows.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.scores
    }

    /// Score at `coord`, or `None` when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<i32> {
        self.scores.get(coord.row)?.get(coord.col).copied()
    }

    /// Highest-scoring cell.
    ///
    /// Ties go to the first cell in row-major order. Returns `None` only
    /// for a zero-size board; a board with no eligible cell yields a score
    /// of [`INELIGIBLE`].
    pub fn best(&self) -> Option<(Coord, i32)> {
        let mut best: Option<(Coord, i32)> = None;
        for (row, scores) in self.scores.iter().enumerate() {
            for (col, &score) in scores.iter().enumerate() {
                if best.is_none_or(|(_, top)| score > top) {
                    best = Some((Coord::new(row, col), score));
                }
            }
        }
        best
    }
}

impl fmt::Display for ScoredBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .scores
            .iter()
            .flatten()
            .map(|score| score.to_string().len())
            .max()
            .unwrap_or(1);
        for row in &self.scores {
            let line = row
                .iter()
                .map(|score| format!("{score:>width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_prefers_first_in_row_major_order() {
        let scored = ScoredBoard::from_rows(vec![vec![-1, 4, 2], vec![4, 1, 4], vec![0, 0, 0]]);
        assert_eq!(scored.best(), Some((Coord::new(0, 1), 4)));
    }

    #[test]
    fn test_best_on_full_board_is_ineligible() {
        let scored = ScoredBoard::from_rows(vec![vec![INELIGIBLE; 2]; 2]);
        assert_eq!(scored.best(), Some((Coord::new(0, 0), INELIGIBLE)));
        assert_eq!(ScoredBoard::from_rows(Vec::new()).best(), None);
    }

    #[test]
    fn test_display_right_aligns() {
        let scored = ScoredBoard::from_rows(vec![vec![-1, 3], vec![10, 6]]);
        assert_eq!(scored.to_string(), "-1  3\n10  6\n");
    }

    #[test]
    fn test_serializes_as_rows() {
        let scored = ScoredBoard::from_rows(vec![vec![1, -1], vec![0, 2]]);
        let json = serde_json::to_string(&scored).unwrap();
        assert_eq!(json, r#"{"scores":[[1,-1],[0,2]]}"#);
    }
}
