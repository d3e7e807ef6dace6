//! Engine behaviour on small positions

use std::time::Duration;

use pente::{AiConfig, Error, GameState, MinimaxAI, Pos, SearchType, Stone};

fn play_all(moves: &[(i32, i32)]) -> GameState {
    let mut state = GameState::new();
    for &(r, c) in moves {
        assert!(state.make_move(r, c), "move ({r}, {c}) rejected");
    }
    state
}

#[test]
fn test_first_move_is_center() {
    let mut ai = MinimaxAI::new(Stone::White, 2, 2.0).unwrap();
    assert_eq!(ai.get_best_move(&GameState::new()), Some(Pos::new(9, 9)));
}

#[test]
fn test_completes_open_four() {
    // Black to move with an open four on row 9
    let state = play_all(&[
        (0, 0), (9, 5), (0, 2), (9, 6), (0, 4), (9, 7), (0, 6), (9, 8), (0, 8),
    ]);
    let mut ai = MinimaxAI::new(Stone::Black, 2, 30.0).unwrap();
    let result = ai.search(&state);

    assert_eq!(result.search_type, SearchType::AlphaBeta);
    let best = result.best_move.unwrap();
    assert!(
        best == Pos::new(9, 4) || best == Pos::new(9, 9),
        "expected a winning move, got {best}"
    );
    assert_eq!(result.score, pente::search::WIN_SCORE);

    let mut next = state.clone();
    assert!(next.play(best));
    assert_eq!(next.get_winner(), Some(Stone::Black));
}

#[test]
fn test_search_is_deterministic() {
    let state = play_all(&[(9, 9), (9, 10), (10, 10)]);
    let config = AiConfig::new(2, 30.0).unwrap();

    let first = MinimaxAI::with_config(Stone::Black, config).search(&state);
    let second = MinimaxAI::with_config(Stone::Black, config).search(&state);
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn test_move_is_always_legal() {
    let state = play_all(&[(9, 9), (9, 10), (8, 8)]);
    let mut ai = MinimaxAI::new(Stone::Black, 1, 5.0).unwrap();
    let pos = ai.get_best_move(&state).unwrap();
    assert!(state.is_valid_move(i32::from(pos.row), i32::from(pos.col)));
    assert!(ai.nodes_evaluated() > 0);
}

#[test]
fn test_tight_deadline_still_answers() {
    let state = play_all(&[(9, 9), (9, 10)]);
    let mut ai = MinimaxAI::with_config(
        Stone::White,
        AiConfig {
            max_depth: 4,
            time_limit: Duration::from_millis(1),
        },
    );
    let result = ai.search(&state);
    assert!(result.best_move.is_some());
    assert!(result.timed_out);
}

#[test]
fn test_invalid_configuration() {
    assert_eq!(
        AiConfig::new(0, 1.0).unwrap_err(),
        Error::InvalidDepth { depth: 0 }
    );
    assert!(matches!(
        AiConfig::new(2, f64::NAN),
        Err(Error::InvalidTimeLimit { .. })
    ));
}
