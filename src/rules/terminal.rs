//! Terminal-state detection.

use serde::{Deserialize, Serialize};

use crate::core::board::{Board, CellIndex};
use crate::core::marker::Marker;

/// A winning triple of cell indices.
pub type Line = [CellIndex; 3];

const fn line(a: usize, b: usize, c: usize) -> Line {
    // Indices are literal constants below 9.
    match (CellIndex::new(a), CellIndex::new(b), CellIndex::new(c)) {
        (Some(a), Some(b), Some(c)) => [a, b, c],
        _ => panic!("winning line index out of range"),
    }
}

/// The eight winning triples, in evaluation order.
pub const LINES: [Line; 8] = [
    // rows
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    // cols
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    // diags
    line(0, 4, 8),
    line(2, 4, 6),
];

/// Result of evaluating a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Empty cells remain and no triple is complete.
    InProgress,
    /// `marker` holds every cell of `line`.
    Win { marker: Marker, line: Line },
    /// Board full, no triple complete.
    Draw,
}

impl Outcome {
    /// Check if this outcome ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning marker, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Win { marker, .. } => Some(*marker),
            _ => None,
        }
    }

    /// The completed triple, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluate a board. Pure.
///
/// Triples are checked in `LINES` order and the first complete one wins.
/// A full board with no complete triple is a draw.
///
/// ```
/// use rust_ttt::core::{Board, Cell, Marker};
/// use rust_ttt::rules::{evaluate, Outcome};
///
/// assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
///
/// let x = Cell::Marked(Marker::X);
/// let e = Cell::Empty;
/// let board = Board::from_cells([x, x, x, e, e, e, e, e, e]);
/// assert_eq!(evaluate(&board).winner(), Some(Marker::X));
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(marker) = board.get(a).marker() {
            if board.get(b).marker() == Some(marker) && board.get(c).marker() == Some(marker) {
                return Outcome::Win { marker, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
