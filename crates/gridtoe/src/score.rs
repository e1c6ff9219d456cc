//! One-shot position scoring for the `score` subcommand.

use derive_getters::Getters;
use gridtoe_core::{Coord, Grid, Marker, Opponent, ScoredBoard};
use serde::Serialize;
use std::fmt;
use tracing::{info, instrument};

/// Scores of every cell of a position, seen from one marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ScoreReport {
    /// Marker the scores are computed for.
    marker: Marker,
    /// Per-cell scores; occupied cells are `-1`.
    scores: ScoredBoard,
    /// Cell the opponent would play, if it has a move.
    best: Option<Coord>,
}

/// Scores `grid` as the heuristic opponent playing `marker` would.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn score_position(grid: &Grid, marker: Marker) -> ScoreReport {
    let opponent = Opponent::new(marker);
    let scores = opponent.score_board(grid);
    let best = opponent.best_move(grid).ok();
    info!(%marker, ?best, "Position scored");
    ScoreReport {
        marker,
        scores,
        best,
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scores for {}:", self.marker)?;
        write!(f, "{}", self.scores)?;
        match self.best {
            Some(coord) => writeln!(f, "Best move: {coord}"),
            None => writeln!(f, "No moves available"),
        }
    }
}
