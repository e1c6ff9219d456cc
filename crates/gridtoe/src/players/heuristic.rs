//! Automated player backed by the line-scan opponent.

use super::Player;
use anyhow::Result;
use gridtoe_core::{Board, Coord, Marker, Opponent};
use tracing::debug;

/// Plays whatever [`Opponent::best_move`] picks.
pub struct HeuristicPlayer {
    name: String,
    opponent: Opponent,
}

impl HeuristicPlayer {
    /// Creates a heuristic player for `marker`.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            opponent: Opponent::new(marker),
        }
    }

    /// The evaluator behind this player.
    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }
}

impl Player for HeuristicPlayer {
    fn next_move(&mut self, board: &Board, marker: Marker) -> Result<Option<Coord>> {
        if marker != *self.opponent.marker() {
            anyhow::bail!(
                "{} plays {} but was asked to move for {}",
                self.name,
                self.opponent.marker(),
                marker
            );
        }

        let coord = self.opponent.best_move(board.grid())?;
        debug!(ai = %self.name, %coord, "AI chose cell");
        Ok(Some(coord))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtoe_core::OpponentError;

    #[test]
    fn test_picks_centre_on_contested_board() {
        let grid = "x.o/.../o.x".parse().unwrap();
        let board = Board::from_grid(grid).unwrap();
        let mut ai = HeuristicPlayer::new("Opponent", Marker::O);
        assert_eq!(
            ai.next_move(&board, Marker::O).unwrap(),
            Some(Coord::new(1, 1))
        );
    }

    #[test]
    fn test_full_board_surfaces_error() {
        let board = Board::from_grid("xxo/oox/oxx".parse().unwrap()).unwrap();
        let mut ai = HeuristicPlayer::new("Opponent", Marker::O);
        let err = ai.next_move(&board, Marker::O).unwrap_err();
        assert_eq!(
            err.downcast_ref::<OpponentError>(),
            Some(&OpponentError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_wrong_marker_rejected() {
        let mut ai = HeuristicPlayer::new("Opponent", Marker::O);
        assert!(ai.next_move(&Board::default(), Marker::X).is_err());
        assert!(!ai.retries_rejected_moves());
    }
}
