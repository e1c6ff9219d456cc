//! Match orchestration between two players.

use crate::config::GameConfig;
use crate::players::{HeuristicPlayer, Player};
use anyhow::{Context, Result};
use gridtoe_core::{Board, GameStatus, Marker, Move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// How a match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// Board status when the loop stopped.
    pub status: GameStatus,
    /// Moves applied, in order.
    pub history: Vec<Move>,
    /// True if a player quit before the game reached a terminal status.
    pub abandoned: bool,
}

/// Alternates turns between two players until the board is decided.
pub struct Orchestrator<W> {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    to_move: Marker,
    history: Vec<Move>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator; `first` moves first.
    pub fn new(
        board: Board,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        first: Marker,
        out: W,
    ) -> Self {
        Self {
            board,
            player_x,
            player_o,
            to_move: first,
            history: Vec::new(),
            out,
        }
    }

    /// The board being played.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker whose turn it is.
    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    /// Runs the game loop.
    ///
    /// Before every turn the board is printed; a terminal status is printed
    /// as `Player <m> has won.` or `stalemate` and ends the loop. Moves the
    /// board rejects are asked for again from players that allow it and are
    /// fatal otherwise.
    #[instrument(skip(self), fields(size = self.board.size(), first = %self.to_move))]
    pub fn run(&mut self) -> Result<MatchReport> {
        info!("Starting match");

        loop {
            write!(self.out, "{}", self.board)?;

            let status = self.board.status();
            if status.is_terminal() {
                writeln!(self.out, "{status}")?;
                info!(%status, moves = self.history.len(), "Match finished");
                return Ok(self.report(status, false));
            }

            let marker = self.to_move;
            writeln!(self.out, "Player {marker}'s turn.")?;

            let player = match marker {
                Marker::X => &mut self.player_x,
                Marker::O => &mut self.player_o,
            };

            debug!(player = player.name(), %marker, "Waiting for move");
            let Some(coord) = player.next_move(&self.board, marker)? else {
                info!(%marker, "Player abandoned the match");
                writeln!(self.out, "Player {marker} quit.")?;
                let status = self.board.status();
                return Ok(self.report(status, true));
            };

            let action = Move::new(marker, coord);
            match self.board.apply(action) {
                Ok(()) => {
                    debug!(%action, "Move made");
                    self.history.push(action);
                    self.to_move = marker.other();
                }
                Err(err) if player.retries_rejected_moves() => {
                    warn!(%err, %action, "Move rejected");
                    writeln!(self.out, "{err}. Try again.")?;
                }
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("{} produced an illegal move", player.name()));
                }
            }
        }
    }

    fn report(&self, status: GameStatus, abandoned: bool) -> MatchReport {
        MatchReport {
            status,
            history: self.history.clone(),
            abandoned,
        }
    }
}

/// Sets up a match between `human` and the heuristic opponent from `config`.
///
/// The starting marker comes from the configured [`FirstPlayer`], with the
/// coin flip seeded from `config.seed()` when one is set.
///
/// [`FirstPlayer`]: crate::FirstPlayer
#[instrument(skip(human, out))]
pub fn setup_match<W: Write>(
    config: &GameConfig,
    human: Box<dyn Player>,
    out: W,
) -> Result<Orchestrator<W>> {
    let board = Board::new(*config.board_size()).context("Invalid board size")?;
    let opponent_marker = *config.opponent_marker();
    let opponent: Box<dyn Player> = Box::new(HeuristicPlayer::new("Opponent", opponent_marker));

    let first = match config.seed() {
        Some(seed) => config
            .first_player()
            .resolve(opponent_marker, &mut StdRng::seed_from_u64(*seed)),
        None => config
            .first_player()
            .resolve(opponent_marker, &mut rand::thread_rng()),
    };
    info!(%first, human = human.name(), %opponent_marker, "Match configured");

    let (player_x, player_o) = match opponent_marker {
        Marker::X => (opponent, human),
        Marker::O => (human, opponent),
    };
    Ok(Orchestrator::new(board, player_x, player_o, first, out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FirstPlayer, Overrides};
    use crate::players::ConsolePlayer;
    use gridtoe_core::Coord;
    use std::io::{Cursor, sink};

    fn human(input: &str) -> Box<dyn Player> {
        Box::new(ConsolePlayer::new(
            "Human",
            Cursor::new(input.as_bytes().to_vec()),
            sink(),
        ))
    }

    fn human_first() -> GameConfig {
        GameConfig::default()
            .merge(Overrides {
                first_player: Some(FirstPlayer::Human),
                ..Overrides::default()
            })
            .unwrap()
    }

    #[test]
    fn test_human_wins_middle_row() {
        let mut game = setup_match(&human_first(), human("1\n1\n1\n0\n1\n2\n"), Vec::new()).unwrap();
        let report = game.run().unwrap();

        assert_eq!(report.status, GameStatus::Won(Marker::X));
        assert!(!report.abandoned);
        let history: Vec<_> = report.history.iter().map(|m| (*m.marker(), *m.coord())).collect();
        assert_eq!(
            history,
            vec![
                (Marker::X, Coord::new(1, 1)),
                (Marker::O, Coord::new(0, 0)),
                (Marker::X, Coord::new(1, 0)),
                (Marker::O, Coord::new(2, 0)),
                (Marker::X, Coord::new(1, 2)),
            ]
        );

        let output = String::from_utf8(game.out).unwrap();
        assert!(output.starts_with("   |   |   \n---+---+---\n"));
        assert!(output.contains("Player x's turn."));
        assert!(output.contains("Player o's turn."));
        assert!(output.ends_with("Player x has won.\n"));
    }

    #[test]
    fn test_rejected_move_is_asked_again() {
        let mut game = setup_match(&human_first(), human("1\n1\n0\n0\n1\n0\nq\n"), Vec::new()).unwrap();
        let report = game.run().unwrap();

        assert!(report.abandoned);
        assert_eq!(report.status, GameStatus::Ongoing);
        // x(1,1), o(0,0), x tried (0,0) and then played (1,0), o replied
        assert_eq!(report.history.len(), 4);
        let output = String::from_utf8(game.out).unwrap();
        assert!(output.contains("Cell (0, 0) is already occupied. Try again."));
        assert!(output.ends_with("Player x quit.\n"));
    }

    #[test]
    fn test_out_of_bounds_is_asked_again() {
        let mut game = setup_match(&human_first(), human("5\n5\nq\n"), Vec::new()).unwrap();
        let report = game.run().unwrap();
        assert!(report.history.is_empty());
        let output = String::from_utf8(game.out).unwrap();
        assert!(output.contains("Cell (5, 5) is outside a 3x3 board. Try again."));
    }

    #[test]
    fn test_opponent_first_when_configured() {
        let config = GameConfig::default()
            .merge(Overrides {
                first_player: Some(FirstPlayer::Opponent),
                ..Overrides::default()
            })
            .unwrap();
        let mut game = setup_match(&config, human("q\n"), Vec::new()).unwrap();
        assert_eq!(game.to_move(), Marker::O);

        let report = game.run().unwrap();
        assert_eq!(report.history, vec![Move::new(Marker::O, (0, 0))]);
    }

    #[test]
    fn test_two_automated_players_finish_the_game() {
        let board = Board::new(4).unwrap();
        let mut game = Orchestrator::new(
            board,
            Box::new(HeuristicPlayer::new("X bot", Marker::X)),
            Box::new(HeuristicPlayer::new("O bot", Marker::O)),
            Marker::X,
            Vec::new(),
        );
        let report = game.run().unwrap();
        assert!(report.status.is_terminal());
        assert_eq!(report.history.len(), game.board().moves_played());
    }

    #[test]
    fn test_single_cell_board() {
        let config = human_first()
            .merge(Overrides {
                board_size: Some(1),
                ..Overrides::default()
            })
            .unwrap();
        let mut game = setup_match(&config, human("0\n0\n"), Vec::new()).unwrap();
        let report = game.run().unwrap();
        assert_eq!(report.status, GameStatus::Won(Marker::X));
    }
}
