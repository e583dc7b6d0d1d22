//! The 3×3 grid.
//!
//! ## Layout
//!
//! Nine cells in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5
//!  6 | 7 | 8
//! ```
//!
//! `CellIndex` is the only way to address a cell, so an out-of-range index
//! never reaches the board.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::error::EngineError;
use super::marker::Marker;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A validated cell index in 0..=8.
///
/// ```
/// use rust_ttt::core::CellIndex;
///
/// assert!(CellIndex::new(4).is_some());
/// assert!(CellIndex::new(9).is_none());
/// assert_eq!(CellIndex::parse(" 7 ").unwrap().get(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CellIndex(u8);

impl CellIndex {
    /// Create a cell index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Parse untrusted text such as a path segment or a CLI argument.
    pub fn parse(raw: &str) -> Result<Self, EngineError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| EngineError::NotANumber(trimmed.to_string()))?;
        Self::try_from(value)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Row (0..3) of this cell.
    #[must_use]
    pub const fn row(self) -> usize {
        self.get() / 3
    }

    /// Column (0..3) of this cell.
    #[must_use]
    pub const fn col(self) -> usize {
        self.get() % 3
    }

    /// All nine indices in row-major order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT as u8).map(CellIndex)
    }
}

impl TryFrom<i64> for CellIndex {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(CellIndex::new)
            .ok_or(EngineError::InvalidIndex(value))
    }
}

impl TryFrom<u8> for CellIndex {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CellIndex::try_from(i64::from(value))
    }
}

impl From<CellIndex> for u8 {
    fn from(cell: CellIndex) -> Self {
        cell.0
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contents of a single cell.
///
/// Serializes as `null`, `"X"` or `"O"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Marker>", into = "Option<Marker>")]
pub enum Cell {
    #[default]
    Empty,
    Marked(Marker),
}

impl Cell {
    /// The marker in this cell, if any.
    #[must_use]
    pub const fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(m) => Some(m),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Option<Marker>> for Cell {
    fn from(marker: Option<Marker>) -> Self {
        marker.map_or(Cell::Empty, Cell::Marked)
    }
}

impl From<Cell> for Option<Marker> {
    fn from(cell: Cell) -> Self {
        cell.marker()
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        Cell::Marked(marker)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => f.write_str(" "),
            Cell::Marked(m) => write!(f, "{m}"),
        }
    }
}

/// The nine cells of a game.
///
/// Fixed-size array, so the length invariant holds by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from explicit cells (replays, tests).
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get the cell at `index`.
    #[must_use]
    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index.get()]
    }

    /// Check whether a cell is empty.
    #[must_use]
    pub fn is_empty(&self, index: CellIndex) -> bool {
        self.get(index).is_empty()
    }

    /// Write a marker into a cell, overwriting whatever was there.
    ///
    /// Callers that must respect occupancy check `is_empty` first.
    pub fn place(&mut self, index: CellIndex, marker: Marker) {
        self.cells[index.get()] = Cell::Marked(marker);
    }

    /// Clear every cell.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        CellIndex::all().filter(move |&i| self.is_empty(i))
    }

    /// Check whether no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Check whether every cell is empty.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Number of cells holding `marker`.
    #[must_use]
    pub fn count(&self, marker: Marker) -> usize {
        self.cells.iter().filter(|c| c.marker() == Some(marker)).count()
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index.get()]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            write!(f, "{}|{}|{}", chunk[0], chunk[1], chunk[2])?;
        }
        Ok(())
    }
}
