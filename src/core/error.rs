//! Errors raised at the engine boundary.
//!
//! The engine itself is total: once a `CellIndex` exists, every operation
//! succeeds. The only failures come from turning untrusted input into a
//! `CellIndex`, or from restoring an engine out of a `Snapshot` that
//! alternating play could not have produced.

use super::marker::Marker;

/// Error produced while validating externally supplied input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The index lies outside 0..=8.
    #[display("cell index {_0} is outside 0..=8")]
    InvalidIndex(i64),

    /// The input is not an integer at all.
    #[display("cell {_0:?} is not an integer")]
    NotANumber(String),

    /// The board already holds a win or a draw.
    #[display("snapshot board holds a finished game")]
    FinishedBoard,

    /// X and O counts that alternating play from X cannot reach.
    #[display("snapshot has {x} X and {o} O markers")]
    MarkerCounts { x: usize, o: usize },

    /// `current_player` disagrees with the markers on the board.
    #[display("snapshot says {found} to move, but the board has {expected} to move")]
    WrongTurn { expected: Marker, found: Marker },
}

impl std::error::Error for EngineError {}
