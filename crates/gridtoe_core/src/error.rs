//! Error types for board construction, moves and opponent evaluation.

use derive_more::Display;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Marker text is not one of the recognised markers.
    #[display("Invalid player marker {:?}", _0)]
    InvalidPlayer(String),

    /// Row or column lies outside the board.
    #[display("Cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board dimension.
        size: usize,
    },

    /// The target cell already holds a marker.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error raised while building a board or grid.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// A board needs at least one cell.
    #[display("Board size must be at least 1")]
    ZeroSize,

    /// Rows do not form a square.
    #[display("Row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Cells found in that row.
        len: usize,
        /// Cells required per row.
        expected: usize,
    },

    /// Notation contains a character that is neither a marker nor empty.
    #[display("Unknown cell character {:?}", _0)]
    UnknownCell(char),
    /// Dimension above [`MAX_SIZE`](crate::MAX_SIZE).
    #[display("Board size {size} exceeds the maximum of {max}")]
    TooLarge {
        /// Requested dimension.
        size: usize,
        /// Largest supported dimension.
        max: usize,
    },
    /// Stored cells do not fill a `size`×`size` grid.
    #[display("A {size}x{size} grid needs {expected} cells, found {len}")]
    CellCount {
        /// Claimed dimension.
        size: usize,
        /// Cells required.
        expected: usize,
        /// Cells present.
        len: usize,
    },
}

impl std::error::Error for BoardError {}

/// Error raised by the heuristic opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OpponentError {
    /// The grid has no cells to evaluate.
    #[display("Opponent was given an empty board")]
    InvalidBoard,

    /// Every cell is occupied.
    #[display("No moves available: the board is full")]
    NoMovesAvailable,
}

impl std::error::Error for OpponentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfBounds {
            row: 3,
            col: 0,
            size: 3,
        };
        assert_eq!(err.to_string(), "Cell (3, 0) is outside a 3x3 board");

        let err = MoveError::CellOccupied { row: 0, col: 0 };
        assert_eq!(err.to_string(), "Cell (0, 0) is already occupied");

        let err = MoveError::InvalidPlayer("a".to_string());
        assert_eq!(err.to_string(), "Invalid player marker \"a\"");
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::NotSquare {
            row: 1,
            len: 2,
            expected: 3,
        };
        assert_eq!(err.to_string(), "Row 1 has 2 cells, expected 3");
    }

    #[test]
    fn test_opponent_error_display() {
        assert_eq!(
            OpponentError::NoMovesAvailable.to_string(),
            "No moves available: the board is full"
        );
    }
}
