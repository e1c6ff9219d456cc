//! Heuristic automated opponent.
//!
//! The opponent is stateless: it is handed a [`Grid`] snapshot, scores every
//! empty cell by scanning the lines through it, and plays the best one. It is
//! an offence-and-contested-line heuristic, not a game-tree search.

use crate::error::OpponentError;
use crate::grid::Grid;
use crate::rules::lines;
use crate::scoring::{INELIGIBLE, ScoredBoard};
use crate::types::{Cell, Coord, Marker};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Cells of row `row` followed by cells of column `col`.
pub fn row_col_coords(size: usize, row: usize, col: usize) -> Vec<Coord> {
    let mut coords = lines::row(size, row);
    coords.extend(lines::column(size, col));
    coords
}

/// Cells of the left diagonal followed by cells of the right diagonal.
///
/// On odd sizes the centre appears in both halves.
pub fn diagonal_coords(size: usize) -> Vec<Coord> {
    let mut coords = lines::left_diagonal(size);
    coords.extend(lines::right_diagonal(size));
    coords
}

/// Automated player scoring cells by the lines that pass through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Opponent {
    /// Marker this opponent plays.
    marker: Marker,
}

impl Opponent {
    /// Creates an opponent playing `marker`.
    #[instrument]
    pub fn new(marker: Marker) -> Self {
        Self { marker }
    }

    /// Chooses the next cell to play.
    ///
    /// A single-cell board always answers `(0, 0)`. Otherwise the highest
    /// scoring cell wins, ties going to the first in row-major order.
    ///
    /// # Errors
    ///
    /// - [`OpponentError::InvalidBoard`] for a zero-size grid
    /// - [`OpponentError::NoMovesAvailable`] when every cell is occupied
    #[instrument(skip(self, grid), fields(marker = %self.marker, size = grid.size()))]
    pub fn best_move(&self, grid: &Grid) -> Result<Coord, OpponentError> {
        match grid.size() {
            0 => return Err(OpponentError::InvalidBoard),
            1 => return Ok(Coord::new(0, 0)),
            _ => {}
        }

        let scored = self.score_board(grid);
        match scored.best() {
            Some((coord, score)) if score != INELIGIBLE => {
                debug!(%coord, score, "Opponent chose cell");
                Ok(coord)
            }
            _ => Err(OpponentError::NoMovesAvailable),
        }
    }

    /// Scores every cell: occupied cells get [`INELIGIBLE`], empty cells
    /// their line-scan score.
    #[instrument(skip(self, grid), fields(marker = %self.marker, size = grid.size()))]
    pub fn score_board(&self, grid: &Grid) -> ScoredBoard {
        let size = grid.size();
        let mut scores = vec![vec![INELIGIBLE; size]; size];
        for (coord, cell) in grid.iter() {
            if cell.is_empty() {
                scores[coord.row][coord.col] = self.score_cell(grid, coord);
            }
        }
        ScoredBoard::from_rows(scores)
    }

    /// Line-scan score for one cell.
    ///
    /// Collects the cell's row and column, plus both diagonals when the cell
    /// lies on either of them. Duplicates are counted each time they appear,
    /// so the centre of an odd board sees the diagonals' shared cell twice.
    /// Each collected cell adds 1 if it holds this opponent's marker and 1
    /// more if it is occupied at all.
    pub fn score_cell(&self, grid: &Grid, coord: Coord) -> i32 {
        let size = grid.size();
        let mut coords = row_col_coords(size, coord.row, coord.col);
        if lines::on_diagonal(size, coord) {
            coords.extend(diagonal_coords(size));
        }

        coords
            .into_iter()
            .filter_map(|c| grid.get(c))
            .map(|cell| match cell {
                Cell::Occupied(marker) if marker == self.marker => 2,
                Cell::Occupied(_) => 1,
                Cell::Empty => 0,
            })
            .sum()
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Self::new(Marker::O)
    }
}
