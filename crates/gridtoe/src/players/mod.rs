//! Player trait and implementations.

mod console;
mod heuristic;

pub use console::ConsolePlayer;
pub use heuristic::HeuristicPlayer;

use anyhow::Result;
use gridtoe_core::{Board, Coord, Marker};

/// Something that can choose moves.
pub trait Player {
    /// Chooses the next cell for `marker`.
    ///
    /// Returns `Ok(None)` when the player abandons the match.
    fn next_move(&mut self, board: &Board, marker: Marker) -> Result<Option<Coord>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether a move the board rejects should be asked for again.
    ///
    /// Defaults to false: a rejected move from an automated player ends the
    /// match with an error.
    fn retries_rejected_moves(&self) -> bool {
        false
    }
}
