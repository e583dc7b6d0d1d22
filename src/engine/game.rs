//! Turn and score sequencing.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::core::{Board, CellIndex, EngineError, Marker, Score, Snapshot};
use crate::rules::{evaluate, Line, Outcome};

/// What a single `apply_move` call did.
///
/// The board has already snapped back to empty by the time a `Won` or
/// `Drawn` report is returned; the report is the only record of the
/// finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveReport {
    /// Marker placed, game continues.
    Placed { cell: CellIndex, marker: Marker },
    /// Target cell was occupied; nothing changed.
    Ignored { cell: CellIndex },
    /// Marker placed and completed `line`. Score updated, board reset.
    Won {
        cell: CellIndex,
        marker: Marker,
        line: Line,
    },
    /// Marker placed into the last empty cell with no line. Board reset.
    Drawn { cell: CellIndex, marker: Marker },
}

impl MoveReport {
    /// Check whether the move changed any state.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, MoveReport::Ignored { .. })
    }

    /// Check whether the move ended a game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveReport::Won { .. } | MoveReport::Drawn { .. })
    }
}

impl std::fmt::Display for MoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveReport::Placed { cell, marker } => write!(f, "{marker} takes cell {cell}"),
            MoveReport::Ignored { cell } => write!(f, "cell {cell} is taken, move ignored"),
            MoveReport::Won { marker, line, .. } => {
                let [a, b, c] = line;
                write!(f, "{marker} wins on {a}-{b}-{c}")
            }
            MoveReport::Drawn { .. } => f.write_str("draw"),
        }
    }
}

/// The tic-tac-toe engine: one board, the marker to move, and the score.
///
/// ## Lifecycle
///
/// Starts on an empty board with X to move and a zero score. Any win or
/// draw resets the board and hands the move back to X; the score keeps
/// accumulating until `reset_score`.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{CellIndex, Marker};
/// use rust_ttt::engine::GameEngine;
///
/// let mut engine = GameEngine::new();
/// for i in [0, 3, 1, 4, 2] {
///     engine.apply_move(CellIndex::new(i).unwrap());
/// }
///
/// let state = engine.state();
/// assert_eq!(state.score[Marker::X], 1);
/// assert!(state.board.is_clear());
/// assert_eq!(state.current_player, Marker::X);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current: Marker,
    score: Score,
}

impl GameEngine {
    /// Create an engine in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore an engine from a snapshot.
    ///
    /// Only states the engine itself can reach are accepted: the game is in
    /// progress, X has as many markers as O or one more, and
    /// `current_player` is the marker those counts put on move.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, EngineError> {
        let board = snapshot.board;
        if evaluate(&board).is_terminal() {
            return Err(EngineError::FinishedBoard);
        }

        let x = board.count(Marker::X);
        let o = board.count(Marker::O);
        let expected = if x == o {
            Marker::X
        } else if x == o + 1 {
            Marker::O
        } else {
            return Err(EngineError::MarkerCounts { x, o });
        };
        if snapshot.current_player != expected {
            return Err(EngineError::WrongTurn {
                expected,
                found: snapshot.current_player,
            });
        }

        Ok(Self {
            board,
            current: expected,
            score: snapshot.score,
        })
    }

    /// Current state, read-only.
    #[must_use]
    pub fn state(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            current_player: self.current,
            score: self.score,
        }
    }

    /// Board, read-only.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker that places next.
    #[must_use]
    pub fn current_player(&self) -> Marker {
        self.current
    }

    /// Score, read-only.
    #[must_use]
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Place the current marker at `cell`.
    ///
    /// An occupied cell is a no-op. Otherwise the board is evaluated:
    /// a win scores one for the mover and resets the board, a draw resets
    /// the board, and anything else passes the turn.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&mut self, cell: CellIndex) -> (Snapshot, MoveReport) {
        let report = self.place(cell);
        (self.state(), report)
    }

    fn place(&mut self, cell: CellIndex) -> MoveReport {
        if !self.board.is_empty(cell) {
            warn!(%cell, "cell occupied, ignoring move");
            return MoveReport::Ignored { cell };
        }

        let marker = self.current;
        self.board.place(cell, marker);

        match evaluate(&self.board) {
            Outcome::Win { marker: winner, line } => {
                self.score.record_win(winner);
                info!(%winner, score = %self.score, "game won");
                self.clear_board();
                MoveReport::Won {
                    cell,
                    marker: winner,
                    line,
                }
            }
            Outcome::Draw => {
                info!(score = %self.score, "game drawn");
                self.clear_board();
                MoveReport::Drawn { cell, marker }
            }
            Outcome::InProgress => {
                self.current = marker.opponent();
                debug!(%cell, %marker, next = %self.current, "marker placed");
                MoveReport::Placed { cell, marker }
            }
        }
    }

    /// Clear the board and give the move to X. Score is kept.
    pub fn reset_board(&mut self) -> Snapshot {
        self.clear_board();
        info!("board reset");
        self.state()
    }

    /// Zero the score. Board and turn are kept.
    pub fn reset_score(&mut self) -> Snapshot {
        self.score.reset();
        info!("score reset");
        self.state()
    }

    fn clear_board(&mut self) {
        self.board.clear();
        self.current = Marker::FIRST;
    }
}
