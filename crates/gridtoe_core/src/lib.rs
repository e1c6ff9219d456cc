//! Pure N×N tic-tac-toe logic with a heuristic opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Marker`], [`Cell`], [`Coord`] value types
//! - **Grid**: row-major N×N snapshot shared by board and opponent
//! - **Board**: state machine with a single guarded mutation, [`Board::apply`]
//! - **Rules**: line enumeration, win and fullness checks
//! - **Contracts / invariants**: move preconditions and debug-build postconditions
//! - **Opponent**: stateless line-scan heuristic over a [`Grid`]
//!
//! # Example
//!
//! ```
//! use gridtoe_core::{Board, GameStatus, Marker, Opponent};
//!
//! let mut board = Board::default();
//! board.place(Marker::X, 1, 1)?;
//!
//! let opponent = Opponent::new(Marker::O);
//! let reply = opponent.best_move(board.grid())?;
//! board.apply(gridtoe_core::Move::new(Marker::O, reply))?;
//!
//! assert_eq!(board.status(), GameStatus::Ongoing);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
mod error;
mod grid;
pub mod invariants;
mod opponent;
pub mod rules;
mod scoring;
mod types;

#[cfg(kani)]
mod verification;

pub use action::Move;
pub use board::{Board, DEFAULT_SIZE, GameStatus};
pub use error::{BoardError, MoveError, OpponentError};
pub use grid::{Grid, MAX_SIZE};
pub use opponent::{Opponent, diagonal_coords, row_col_coords};
pub use scoring::{INELIGIBLE, ScoredBoard};
pub use types::{Cell, Coord, Marker};
