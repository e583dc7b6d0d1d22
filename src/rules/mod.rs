//! Tic-tac-toe rules.
//!
//! The rules are a single pure function over a `Board`: which of the
//! eight triples (if any) is complete, and whether the board is full.
//! Turn order and scoring belong to `engine`, which calls into here
//! after every placement.

pub mod terminal;

pub use terminal::{evaluate, Line, Outcome, LINES};
