//! Observable game state.
//!
//! A `Snapshot` is an owned copy of everything a front end renders:
//! the board, whose turn it is, and the running score. Every engine
//! operation returns one, so callers never hold a borrow into the engine
//! (or a lock guard) while rendering.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::marker::{Marker, Score};

/// Board, active marker, and score at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// The nine cells.
    pub board: Board,

    /// Marker that places next.
    pub current_player: Marker,

    /// Wins per marker since the last score reset.
    pub score: Score,
}

impl Snapshot {
    /// The state of a freshly started engine.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            board: Board::new(),
            current_player: Marker::FIRST,
            score: Score::new(),
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f, "Current player: {}", self.current_player)?;
        write!(f, "Score {}", self.score)
    }
}
