//! Contract-based validation for moves.
//!
//! Contracts formalise Hoare-style reasoning, `{P} action {Q}`: the
//! precondition is checked before every move, the postcondition after it
//! in debug builds.

use crate::action::Move;
use crate::board::Board;
use crate::error::MoveError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::types::Cell;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the coordinate lies on the board.
pub struct InBounds;

impl InBounds {
    /// Fails with `OutOfBounds` when the move leaves the board.
    #[instrument(skip(board))]
    pub fn check(action: &Move, board: &Board) -> Result<(), MoveError> {
        let coord = *action.coord();
        if board.grid().contains(coord) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: board.size(),
            })
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `CellOccupied` when the cell holds a marker.
    #[instrument(skip(board))]
    pub fn check(action: &Move, board: &Board) -> Result<(), MoveError> {
        let coord = *action.coord();
        match board.grid().get(coord) {
            Some(Cell::Empty) => Ok(()),
            _ => Err(MoveError::CellOccupied {
                row: coord.row,
                col: coord.col,
            }),
        }
    }
}

/// Composite precondition: in bounds, then empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(action: &Move, board: &Board) -> Result<(), MoveError> {
        InBounds::check(action, board)?;
        CellIsEmpty::check(action, board)?;
        Ok(())
    }
}

/// Contract for placing a marker.
///
/// Postconditions:
/// - exactly one cell changed, from empty to occupied
/// - the move counter grew by one
/// - board invariants still hold
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        let mut problems = Vec::new();

        let changed: Vec<_> = before
            .grid()
            .iter()
            .zip(after.grid().iter())
            .filter(|((_, old), (_, new))| old != new)
            .collect();
        match changed.as_slice() {
            [((_, Cell::Empty), (_, Cell::Occupied(_)))] => {}
            _ => problems.push(format!(
                "expected one empty cell to become occupied, {} cells changed",
                changed.len()
            )),
        }

        if after.moves_played() != before.moves_played() + 1 {
            problems.push(format!(
                "move counter went from {} to {}",
                before.moves_played(),
                after.moves_played()
            ));
        }

        if let Err(violations) = BoardInvariants::check_all(after) {
            problems.extend(violations.into_iter().map(|v| v.description));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            let description = problems.join("; ");
            warn!(%description, "Move postcondition failed");
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                description
            )))
        }
    }
}
