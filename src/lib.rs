//! # rust-ttt
//!
//! A tic-tac-toe turn/state engine, plus the small record stores that sit
//! beside it (a kanban task board and a study-session log).
//!
//! ## Design Principles
//!
//! 1. **No ambient globals**: The game lives in an explicit `GameEngine`
//!    value. Hosts that serve several threads share one `SharedEngine`
//!    handle, which serializes every operation behind a mutex.
//!
//! 2. **Validate at the edge**: Cells are addressed by `CellIndex`, which
//!    cannot hold a value outside 0..=8. Untrusted input is parsed into a
//!    `CellIndex` (or rejected) before the engine sees it.
//!
//! 3. **Snap back**: A win or draw is scored and the board resets in the
//!    same call. The returned `MoveReport` is the only trace of the
//!    finished game.
//!
//! ## Modules
//!
//! - `core`: Markers, cells, board, score, snapshots, input errors
//! - `rules`: Winning triples and terminal-state evaluation
//! - `engine`: `GameEngine` and the lock-guarded `SharedEngine`
//! - `store`: Memory or bincode-file persistence for record stores
//! - `tasks`: Task board with priority-ordered to-do column
//! - `study`: Study-session log

pub mod core;
pub mod rules;
pub mod engine;
pub mod store;
pub mod tasks;
pub mod study;

// Re-export commonly used types
pub use crate::core::{Board, Cell, CellIndex, EngineError, Marker, Score, Snapshot};

pub use crate::rules::{evaluate, Line, Outcome, LINES};

pub use crate::engine::{GameEngine, MoveReport, SharedEngine};

pub use crate::store::{Storage, StoreConfig, StoreError};

pub use crate::tasks::{Column, NewTask, Priority, Task, TaskBoard, TaskError, TaskId, TaskUpdate};

pub use crate::study::{NewSession, SessionId, StudyError, StudyLog, StudySession};
