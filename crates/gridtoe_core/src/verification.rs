//! Kani proof harnesses for the board contract.
//!
//! Run with `cargo kani -p gridtoe_core`.

use crate::{Board, GameStatus, Marker};

#[kani::proof]
#[kani::unwind(10)]
fn place_changes_counter_only_on_success() {
    let mut board = Board::default();
    let row: usize = kani::any();
    let col: usize = kani::any();
    let marker = if kani::any() { Marker::X } else { Marker::O };

    let before = board.clone();
    match board.place(marker, row, col) {
        Ok(()) => {
            assert!(row < 3 && col < 3);
            assert_eq!(board.moves_played(), before.moves_played() + 1);
        }
        Err(_) => assert_eq!(board, before),
    }
}

#[kani::proof]
#[kani::unwind(10)]
fn single_move_never_ends_three_by_three_game() {
    let mut board = Board::default();
    let row: usize = kani::any();
    let col: usize = kani::any();
    kani::assume(row < 3 && col < 3);

    if board.place(Marker::X, row, col).is_ok() {
        assert_eq!(board.status(), GameStatus::Ongoing);
    }
}
