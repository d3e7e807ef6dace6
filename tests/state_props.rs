//! Property tests for move validity and make/undo

use pente::{GameState, Pos, Stone};
use proptest::prelude::*;

/// Observable parts of a position that undo must restore
fn snapshot(state: &GameState) -> (pente::Board, Stone, u32, u32, Option<Pos>, usize) {
    (
        *state.board(),
        state.current_player(),
        state.captures(Stone::Black),
        state.captures(Stone::White),
        state.last_move(),
        state.move_count(),
    )
}

fn moves_strategy() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((-2i32..21, -2i32..21), 0..80)
}

proptest! {
    /// A move is accepted exactly when the cell is on the board and empty.
    #[test]
    fn prop_validity_matches_board(moves in moves_strategy()) {
        let mut state = GameState::new();
        for (r, c) in moves {
            let expected = Pos::checked(r, c)
                .is_some_and(|pos| state.board().get(pos) == Stone::Empty);
            prop_assert_eq!(state.is_valid_move(r, c), expected);

            let mover = state.current_player();
            let applied = state.make_move(r, c);
            prop_assert_eq!(applied, expected);
            if applied {
                prop_assert_eq!(state.current_player(), mover.opponent());
            }
            if state.is_game_over() {
                break;
            }
        }
    }

    /// Undoing a move restores the position it was played from.
    #[test]
    fn prop_make_undo_round_trip(moves in moves_strategy()) {
        let mut state = GameState::new();
        let mut history = Vec::new();

        for (r, c) in moves {
            let before = snapshot(&state);
            if state.make_move(r, c) {
                history.push(before);
            }
            if state.is_game_over() {
                break;
            }
        }

        while let Some(before) = history.pop() {
            prop_assert!(state.undo_move());
            prop_assert_eq!(snapshot(&state), before);
            prop_assert!(!state.is_game_over());
        }
        prop_assert!(!state.undo_move());
        prop_assert_eq!(state.board().stone_count(), 0);
    }

    /// Capture counts always match the stones missing from the board.
    #[test]
    fn prop_captures_account_for_stones(moves in moves_strategy()) {
        let mut state = GameState::new();
        for (r, c) in moves {
            state.make_move(r, c);
            if state.is_game_over() {
                break;
            }
        }
        let removed: u32 = state.move_history().iter().map(|m| m.captured.len() as u32).sum();
        let pairs = state.captures(Stone::Black) + state.captures(Stone::White);
        prop_assert_eq!(removed, pairs * 2);
        prop_assert_eq!(state.board().stone_count() + removed, state.move_count() as u32);
    }
}
