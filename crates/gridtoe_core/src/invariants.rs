//! First-class board invariants.
//!
//! Invariants are properties that hold for every reachable board. They are
//! checked after each move in debug builds and can be tested on their own.

use crate::board::Board;

/// Property of a state `S` that every reachable state satisfies.
pub trait Invariant<S> {
    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// An invariant that failed on some state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The failed property's [`Invariant::description`].
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants composed as a tuple and checked in order.
pub trait InvariantSet<S> {
    /// Ok if all hold, otherwise every violation found.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A: Invariant<S>, B: Invariant<S>> InvariantSet<S> for (A, B) {
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the move counter equals the number of occupied cells.
pub struct MoveCountInvariant;

impl Invariant<Board> for MoveCountInvariant {
    fn holds(board: &Board) -> bool {
        board.moves_played() == board.grid().occupied()
    }

    fn description() -> &'static str {
        "Moves played equals occupied cells"
    }
}

/// Invariant: no more moves than cells.
pub struct MoveBoundInvariant;

impl Invariant<Board> for MoveBoundInvariant {
    fn holds(board: &Board) -> bool {
        board.moves_played() <= board.size() * board.size()
    }

    fn description() -> &'static str {
        "Moves played never exceeds the number of cells"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MoveCountInvariant, MoveBoundInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Marker;

    #[test]
    fn test_invariants_hold_for_new_board() {
        let board = Board::default();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut board = Board::default();
        board.place(Marker::X, 0, 0).unwrap();
        board.place(Marker::O, 2, 1).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_move_count_detects_corruption() {
        let mut board = Board::default();
        board.place(Marker::X, 0, 0).unwrap();
        board.corrupt_counter_for_test(5);

        assert!(!MoveCountInvariant::holds(&board));
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, MoveCountInvariant::description());
    }

    #[test]
    fn test_move_bound_detects_overflow() {
        let mut board = Board::new(1).unwrap();
        board.corrupt_counter_for_test(2);
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                MoveCountInvariant::description(),
                MoveBoundInvariant::description()
            ]
        );
    }
}
