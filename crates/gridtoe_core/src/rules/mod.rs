//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Grid`](crate::Grid). Rules are kept apart from
//! board storage so the board, the contracts and the opponent can share
//! them.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_full;
pub use lines::{Line, LineKind, all_lines, column, left_diagonal, on_diagonal, right_diagonal, row};
pub use win::{check_winner, has_won};
