//! A single engine shared between request handlers.
//!
//! Handlers receive a cloned `SharedEngine` handle instead of reaching for
//! a global. Every operation runs under one mutex, so a move, its
//! evaluation, and any resulting reset are observed as one step.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::{CellIndex, Snapshot};

use super::game::{GameEngine, MoveReport};

/// Cloneable, thread-safe handle to one `GameEngine`.
#[derive(Clone, Debug, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    /// Create a handle to a fresh engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing engine.
    #[must_use]
    pub fn from_engine(engine: GameEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // Transitions never panic midway; a poisoned guard still holds a
    // consistent engine.
    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`GameEngine::apply_move`].
    pub fn apply_move(&self, cell: CellIndex) -> (Snapshot, MoveReport) {
        self.lock().apply_move(cell)
    }

    /// See [`GameEngine::reset_board`].
    pub fn reset_board(&self) -> Snapshot {
        self.lock().reset_board()
    }

    /// See [`GameEngine::reset_score`].
    pub fn reset_score(&self) -> Snapshot {
        self.lock().reset_score()
    }

    /// Current state.
    #[must_use]
    pub fn get_state(&self) -> Snapshot {
        self.lock().state()
    }

    /// Run `f` with exclusive access to the engine.
    ///
    /// For callers that need several operations to appear atomic.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameEngine) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Marker;
    use std::thread;

    fn cell(i: usize) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    #[test]
    fn test_handles_share_state() {
        let a = SharedEngine::new();
        let b = a.clone();

        a.apply_move(cell(0));
        let snap = b.get_state();
        assert!(!snap.board.is_empty(cell(0)));
        assert_eq!(snap.current_player, Marker::O);
    }

    #[test]
    fn test_resets_through_handle() {
        let engine = SharedEngine::new();
        for i in [0, 3, 1, 4, 2, 8] {
            engine.apply_move(cell(i));
        }
        assert_eq!(engine.get_state().score[Marker::X], 1);

        let snap = engine.reset_board();
        assert!(snap.board.is_clear());
        assert_eq!(snap.score[Marker::X], 1);

        let snap = engine.reset_score();
        assert_eq!(snap.score.total(), 0);
    }

    #[test]
    fn test_with_runs_atomically() {
        let engine = SharedEngine::new();
        let placed = engine.with(|e| {
            e.apply_move(cell(4));
            e.apply_move(cell(0));
            e.board().count(Marker::X) + e.board().count(Marker::O)
        });
        assert_eq!(placed, 2);
    }

    #[test]
    fn test_concurrent_moves_keep_board_consistent() {
        let engine = SharedEngine::new();
        let handles: Vec<_> = (0..9)
            .map(|i| {
                let engine = engine.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        engine.apply_move(cell(i));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let snap = engine.get_state();
        let x = snap.board.count(Marker::X);
        let o = snap.board.count(Marker::O);
        // Alternation holds: X is level with O or one ahead.
        assert!(x == o || x == o + 1, "x={x} o={o}");
        let expected_next = if x == o { Marker::X } else { Marker::O };
        assert_eq!(snap.current_player, expected_next);
    }

    #[test]
    fn test_from_engine() {
        let mut engine = GameEngine::new();
        engine.apply_move(cell(8));
        let shared = SharedEngine::from_engine(engine.clone());
        assert_eq!(shared.get_state(), engine.state());
    }
}
