//! The board state machine.
//!
//! A [`Board`] owns its grid and a move counter. The only mutation is
//! [`Board::apply`] (and its convenience form [`Board::place`]), which checks
//! the move contract before touching the grid. Status is derived from the
//! grid on demand, so it can never drift out of sync with the cells.

use crate::action::Move;
use crate::contracts::{Contract, MoveContract};
use crate::error::{BoardError, MoveError};
use crate::grid::Grid;
use crate::rules;
use crate::types::{Cell, Coord, Marker};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Default board dimension.
pub const DEFAULT_SIZE: usize = 3;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be made and nobody has won.
    Ongoing,
    /// A marker completed a line.
    Won(Marker),
    /// Every cell is occupied and nobody has won.
    Stalemate,
}

impl GameStatus {
    /// Returns true for `Won` and `Stalemate`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Marker> {
        match self {
            GameStatus::Won(marker) => Some(marker),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Won(marker) => write!(f, "Player {} has won.", marker),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// N×N tic-tac-toe board.
///
/// Serialises as its [`Grid`]; deserialising recomputes the move counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Grid", try_from = "Grid")]
pub struct Board {
    grid: Grid,
    moves_played: usize,
}

impl Board {
    /// Creates an empty board of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroSize`] for a size of 0 and
    /// [`BoardError::TooLarge`] above [`MAX_SIZE`](crate::MAX_SIZE).
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        Ok(Self {
            grid: Grid::new(size)?,
            moves_played: 0,
        })
    }

    /// Adopts an existing grid, e.g. a position parsed from notation.
    ///
    /// The move counter is set to the number of occupied cells.
    #[instrument(skip(grid), fields(size = grid.size()))]
    pub fn from_grid(grid: Grid) -> Result<Self, BoardError> {
        if grid.size() == 0 {
            return Err(BoardError::ZeroSize);
        }
        let moves_played = grid.occupied();
        debug!(moves_played, "Board adopted grid");
        Ok(Self { grid, moves_played })
    }

    /// Places `marker` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if the position is off the board
    /// - [`MoveError::CellOccupied`] if the cell already holds a marker
    ///
    /// The board is unchanged when an error is returned.
    pub fn place(&mut self, marker: Marker, row: usize, col: usize) -> Result<(), MoveError> {
        self.apply(Move::new(marker, Coord::new(row, col)))
    }

    /// Applies a move after checking its preconditions.
    ///
    /// Postconditions are verified in debug builds.
    #[instrument(skip(self), fields(size = self.size(), moves = self.moves_played))]
    pub fn apply(&mut self, action: Move) -> Result<(), MoveError> {
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.grid
            .set(*action.coord(), Cell::Occupied(*action.marker()));
        self.moves_played += 1;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        debug!(%action, moves_played = self.moves_played, "Move applied");
        Ok(())
    }

    /// Returns true if `marker` holds a full row, column or main diagonal.
    #[instrument(skip(self))]
    pub fn has_player_won(&self, marker: Marker) -> bool {
        rules::has_won(&self.grid, marker)
    }

    /// Derives the game status.
    ///
    /// Winners are checked in marker priority order before fullness.
    #[instrument(skip(self), fields(moves = self.moves_played))]
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = rules::check_winner(&self.grid) {
            GameStatus::Won(winner)
        } else if rules::is_full(self) {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }

    /// Borrowed view of the cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Number of successfully applied moves.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Owned snapshot of the cells as rows.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.grid.rows()
    }

    #[cfg(test)]
    pub(crate) fn corrupt_counter_for_test(&mut self, moves_played: usize) {
        self.moves_played = moves_played;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            grid: Grid::empty(DEFAULT_SIZE),
            moves_played: 0,
        }
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        board.grid
    }
}

impl TryFrom<Grid> for Board {
    type Error = BoardError;

    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        Board::from_grid(grid)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
