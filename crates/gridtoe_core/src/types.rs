//! Core value types: markers, cells and coordinates.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Symbol identifying which player occupies a cell.
///
/// Iteration order (`Marker::iter()`) is the fixed priority order used when
/// reporting a winner: `x` before `o`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Player x.
    #[serde(rename = "x", alias = "X")]
    #[strum(serialize = "x")]
    X,
    /// Player o.
    #[serde(rename = "o", alias = "O")]
    #[strum(serialize = "o")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn other(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Canonical single-character form.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'x',
            Marker::O => 'o',
        }
    }
}

impl FromStr for Marker {
    type Err = MoveError;

    /// Canonicalises marker text. Matching ignores ASCII case and
    /// surrounding whitespace.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Marker::iter()
            .find(|marker| marker.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| MoveError::InvalidPlayer(s.to_string()))
    }
}

impl TryFrom<char> for Marker {
    type Error = MoveError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'x' => Ok(Marker::X),
            'o' => Ok(Marker::O),
            other => Err(MoveError::InvalidPlayer(other.to_string())),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// Cell occupied by a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns true if the cell holds no marker.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// Character used when rendering the board (blank for empty).
    pub fn symbol(self) -> char {
        self.marker().map_or(' ', Marker::symbol)
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        Cell::Occupied(marker)
    }
}

/// Zero-based `(row, col)` position.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}
