//! The game engine and its shared, lock-guarded handle.
//!
//! ## Key Types
//!
//! - `GameEngine`: Owns board, turn, and score. Single-threaded.
//! - `MoveReport`: What an `apply_move` call did (placed, ignored, won, drawn)
//! - `SharedEngine`: `Arc<Mutex<GameEngine>>` handle for multi-threaded hosts

mod game;
mod shared;

pub use game::{GameEngine, MoveReport};
pub use shared::SharedEngine;
