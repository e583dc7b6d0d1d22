//! Core game types: markers, cells, the board, score, and snapshots.
//!
//! Everything here is plain data with no knowledge of rules. Win detection
//! lives in `rules`; turn sequencing lives in `engine`.

pub mod marker;
pub mod board;
pub mod state;
pub mod error;

pub use marker::{Marker, Score};
pub use board::{Board, Cell, CellIndex, CELL_COUNT};
pub use state::Snapshot;
pub use error::EngineError;
