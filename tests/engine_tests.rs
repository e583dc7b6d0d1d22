//! Engine behaviour across whole games.
//!
//! Scenario tests for the documented end-to-end flows, followed by
//! property tests over arbitrary move sequences.

use proptest::prelude::*;

use rust_ttt::core::{Board, Cell, CellIndex, Marker, Score, Snapshot};
use rust_ttt::engine::{GameEngine, MoveReport, SharedEngine};
use rust_ttt::rules::{evaluate, Outcome};

fn cell(i: usize) -> CellIndex {
    CellIndex::new(i).unwrap()
}

fn play(engine: &mut GameEngine, cells: &[usize]) -> Vec<(Snapshot, MoveReport)> {
    cells.iter().map(|&i| engine.apply_move(cell(i))).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

/// Moves 0,3,1,4,2: X completes the top row.
#[test]
fn test_end_to_end_row_win() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.state(), Snapshot::initial());

    let steps = play(&mut engine, &[0, 3, 1, 4, 2]);

    let (s, _) = steps[0];
    assert_eq!(s.board[cell(0)], Cell::Marked(Marker::X));
    assert_eq!(s.current_player, Marker::O);

    let (s, _) = steps[1];
    assert_eq!(s.board[cell(3)], Cell::Marked(Marker::O));
    assert_eq!(s.current_player, Marker::X);

    let (s, _) = steps[2];
    assert_eq!(s.board[cell(1)], Cell::Marked(Marker::X));
    assert_eq!(s.current_player, Marker::O);

    let (s, _) = steps[3];
    assert_eq!(s.board[cell(4)], Cell::Marked(Marker::O));
    assert_eq!(s.current_player, Marker::X);

    let (s, report) = steps[4];
    assert!(matches!(report, MoveReport::Won { marker: Marker::X, .. }));
    assert_eq!(s.score[Marker::X], 1);
    assert_eq!(s.score[Marker::O], 0);
    assert_eq!(s.board, Board::new());
    assert_eq!(s.current_player, Marker::X);
}

/// Fills X,O,X / X,O,O / O,X,X with no triple.
#[test]
fn test_end_to_end_draw() {
    let mut engine = GameEngine::new();
    let steps = play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let (s, report) = steps[8];
    assert!(matches!(report, MoveReport::Drawn { .. }));
    assert_eq!(s.score, Score::new());
    assert!(s.board.is_clear());
    assert_eq!(s.current_player, Marker::X);
}

/// Score accumulates over several games and survives board resets.
#[test]
fn test_score_accumulates_across_games() {
    let mut engine = GameEngine::new();

    // X wins twice, O once, one draw, one abandoned game.
    play(&mut engine, &[0, 3, 1, 4, 2]);
    play(&mut engine, &[6, 0, 7, 1, 8]);
    play(&mut engine, &[0, 2, 1, 4, 8, 6]);
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    play(&mut engine, &[4, 0]);
    engine.reset_board();

    let s = engine.state();
    assert_eq!(s.score[Marker::X], 2);
    assert_eq!(s.score[Marker::O], 1);
    assert!(s.board.is_clear());

    let s = engine.reset_score();
    assert_eq!(s.score.total(), 0);
}

/// Moving onto an occupied cell mid-game is ignored and does not pass the turn.
#[test]
fn test_occupied_cell_keeps_turn() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4]);

    let (s, report) = engine.apply_move(cell(4));
    assert_eq!(report, MoveReport::Ignored { cell: cell(4) });
    assert_eq!(s.current_player, Marker::O);

    let (s, _) = engine.apply_move(cell(0));
    assert_eq!(s.board[cell(0)], Cell::Marked(Marker::O));
}

/// A shared handle gives the same results as a private engine.
#[test]
fn test_shared_engine_matches_engine() {
    let shared = SharedEngine::new();
    let mut local = GameEngine::new();
    for i in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        assert_eq!(shared.apply_move(cell(i)), local.apply_move(cell(i)));
    }
    assert_eq!(shared.get_state(), local.state());
}

// =============================================================================
// Properties
// =============================================================================

fn moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..9, 0..60)
}

proptest! {
    /// The state reachable through the engine never shows a finished game,
    /// and alternation keeps X level with O or one ahead.
    #[test]
    fn prop_snapshots_are_consistent(seq in moves()) {
        let mut engine = GameEngine::new();
        for i in seq {
            let (s, _) = engine.apply_move(cell(i));
            prop_assert_eq!(s.board.cells().len(), 9);
            prop_assert_eq!(evaluate(&s.board), Outcome::InProgress);

            let x = s.board.count(Marker::X);
            let o = s.board.count(Marker::O);
            prop_assert!(x == o || x == o + 1);
            let next = if x == o { Marker::X } else { Marker::O };
            prop_assert_eq!(s.current_player, next);
        }
    }

    /// Each report agrees with the before/after states.
    #[test]
    fn prop_reports_match_transitions(seq in moves()) {
        let mut engine = GameEngine::new();
        for i in seq {
            let before = engine.state();
            let (after, report) = engine.apply_move(cell(i));
            match report {
                MoveReport::Ignored { .. } => {
                    prop_assert!(!before.board.is_empty(cell(i)));
                    prop_assert_eq!(after, before);
                }
                MoveReport::Placed { marker, .. } => {
                    prop_assert_eq!(marker, before.current_player);
                    prop_assert_eq!(after.current_player, marker.opponent());
                    prop_assert_eq!(after.board[cell(i)], Cell::Marked(marker));
                    prop_assert_eq!(after.score, before.score);
                }
                MoveReport::Won { marker, line, .. } => {
                    prop_assert_eq!(marker, before.current_player);
                    prop_assert!(line.contains(&cell(i)));
                    prop_assert_eq!(after.score[marker], before.score[marker] + 1);
                    prop_assert_eq!(after.score[marker.opponent()], before.score[marker.opponent()]);
                    prop_assert!(after.board.is_clear());
                    prop_assert_eq!(after.current_player, Marker::X);
                }
                MoveReport::Drawn { .. } => {
                    prop_assert_eq!(before.board.empty_cells().count(), 1);
                    prop_assert_eq!(after.score, before.score);
                    prop_assert!(after.board.is_clear());
                    prop_assert_eq!(after.current_player, Marker::X);
                }
            }
        }
    }

    /// Score totals equal the number of wins reported, and resets behave.
    #[test]
    fn prop_score_counts_wins(seq in moves()) {
        let mut engine = GameEngine::new();
        let mut wins = 0u32;
        for i in seq {
            if let (_, MoveReport::Won { .. }) = engine.apply_move(cell(i)) {
                wins += 1;
            }
        }
        prop_assert_eq!(engine.score().total(), wins);

        let score = *engine.score();
        prop_assert_eq!(engine.reset_board().score, score);
        prop_assert_eq!(engine.reset_score().score, Score::new());
    }
}
