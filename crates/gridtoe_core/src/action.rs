//! First-class move records.
//!
//! A move is the intent to place a marker at a coordinate. It can be
//! validated before application and logged or replayed afterwards.

use crate::types::{Coord, Marker};
use serde::{Deserialize, Serialize};

/// A marker placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Move {
    /// The marker being placed.
    marker: Marker,
    /// Where it is placed.
    coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, coord: impl Into<Coord>) -> Self {
        Self {
            marker,
            coord: coord.into(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let action = Move::new(Marker::X, (1, 1));
        assert_eq!(action.to_string(), "x -> (1, 1)");
        assert_eq!(*action.coord(), Coord::new(1, 1));
    }
}
