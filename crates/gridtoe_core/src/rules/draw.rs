//! Fullness check backing stalemate detection.

use crate::board::Board;
use tracing::instrument;

/// Checks if every cell has been played.
///
/// A full board with no winner is a stalemate. The check relies on the
/// move counter, which always equals the number of occupied cells.
#[instrument(skip(board), fields(size = board.size(), moves = board.moves_played()))]
pub fn is_full(board: &Board) -> bool {
    board.moves_played() == board.size() * board.size()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Marker;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::default();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::default();
        board.place(Marker::X, 1, 1).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2).unwrap();
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            board.place(Marker::X, row, col).unwrap();
        }
        assert!(is_full(&board));
    }
}
