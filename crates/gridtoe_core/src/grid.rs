//! Square grid of cells, stored row-major.
//!
//! A [`Grid`] is the read-only shape shared by the board and the opponent.
//! The board owns one and mutates it through its guarded move entry point;
//! the opponent only ever borrows one.

use crate::error::BoardError;
use crate::types::{Cell, Coord, Marker};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Largest supported board dimension.
pub const MAX_SIZE: usize = 1024;

/// Number of cells in a `size`×`size` grid, if `size` is supported.
fn cell_count(size: usize) -> Result<usize, BoardError> {
    size.checked_mul(size)
        .filter(|_| size <= MAX_SIZE)
        .ok_or(BoardError::TooLarge {
            size,
            max: MAX_SIZE,
        })
}

/// N×N cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire shape of a [`Grid`].
#[derive(Deserialize)]
struct GridRepr {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = BoardError;

    fn try_from(GridRepr { size, cells }: GridRepr) -> Result<Self, Self::Error> {
        let expected = cell_count(size)?;
        if cells.len() != expected {
            return Err(BoardError::CellCount {
                size,
                expected,
                len: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }
}

impl Grid {
    /// Creates a grid with every cell empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooLarge`] above [`MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let cells = vec![Cell::Empty; cell_count(size)?];
        Ok(Self { size, cells })
    }

    /// Creates a grid with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_SIZE`]; use [`Grid::new`] for
    /// untrusted sizes.
    pub fn empty(size: usize) -> Self {
        assert!(size <= MAX_SIZE, "grid size {size} exceeds {MAX_SIZE}");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Builds a grid from explicit rows.
    ///
    /// Zero rows yield a zero-size grid. Every row must have exactly as many
    /// cells as there are rows.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(cell_count(size)?);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: cols.len(),
                    expected: size,
                });
            }
            cells.extend(cols);
        }
        Ok(Self { size, cells })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Returns the cell at `coord`, or `None` when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.contains(coord) {
            self.cells.get(self.index(coord)).copied()
        } else {
            None
        }
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) outside {}x{} grid",
            self.size,
            self.size
        );
        self.cells[row * self.size + col]
    }

    /// Overwrites a cell. Callers check bounds first.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        let index = self.index(coord);
        self.cells[index] = cell;
    }

    /// All positions with their cells, row ascending then column ascending.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / size, i % size), *cell))
    }

    /// Number of cells holding a marker.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Owned copy of the grid as nested rows.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(<[Cell]>::to_vec).collect()
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }
}

impl FromStr for Grid {
    type Err = BoardError;

    /// Parses `/`-separated rows, e.g. `x.o/.../o.x`.
    ///
    /// `x` and `o` (any case) are markers; `.` and `_` are empty cells.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Grid::empty(0));
        }
        let rows = s
            .split('/')
            .map(|row| {
                row.trim()
                    .chars()
                    .map(|c| match c {
                        '.' | '_' => Ok(Cell::Empty),
                        other => Marker::try_from(other)
                            .map(Cell::Occupied)
                            .map_err(|_| BoardError::UnknownCell(other)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    /// Renders cells separated by ` | `, rows separated by `---+---` lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = vec!["---"; self.size].join("+");
        for row in 0..self.size {
            if row > 0 {
                writeln!(f, "{divider}")?;
            }
            let line = (0..self.size)
                .map(|col| format!(" {} ", self.cell(row, col).symbol()))
                .collect::<Vec<_>>()
                .join("|");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
