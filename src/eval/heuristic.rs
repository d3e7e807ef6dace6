//! Static evaluation of a Pente position
//!
//! The score for `player` combines:
//! - captured pairs
//! - line patterns (runs and their open ends)
//! - center control
//! - capture threats
//!
//! with the opponent's line and threat terms subtracted at a discount.
//! Every function here is a pure read of the position.

use crate::board::{Board, Pos, Stone, LINE_DIRECTIONS, RAY_DIRECTIONS};
use crate::rules::count_direction;
use crate::GameState;

use super::patterns::{
    run_score, PatternScore, CAPTURE_PAIR_WEIGHT, CENTER_BONUS, CENTER_FALLOFF, CENTER_RADIUS,
    OPPONENT_WEIGHT,
};

/// Evaluate the position from `player`'s point of view.
///
/// Positive values favour `player`. The function is not symmetric: the
/// opponent's terms are discounted by [`OPPONENT_WEIGHT`] and center control
/// is only counted for `player`.
#[must_use]
pub fn evaluate(state: &GameState, player: Stone) -> f64 {
    let board = state.board();
    let opponent = player.opponent();

    let mine = f64::from(state.captures(player)) * CAPTURE_PAIR_WEIGHT
        + f64::from(line_score(board, player))
        + center_control(board, player)
        + f64::from(potential_captures(board, player));

    let theirs = f64::from(line_score(board, opponent)) + f64::from(potential_captures(board, opponent));

    mine - theirs * OPPONENT_WEIGHT
}

/// Sum of [`run_score`] over every (stone, direction) pair of `player`.
///
/// A physical run of n stones is scored n times, once from each member.
pub fn line_score(board: &Board, player: Stone) -> i32 {
    let Some(stones) = board.stones(player) else {
        return 0;
    };

    let mut score = 0;
    for pos in stones.iter_ones() {
        for &(dr, dc) in &LINE_DIRECTIONS {
            let forward = count_direction(board, pos, dr, dc, player);
            let backward = count_direction(board, pos, -dr, -dc, player);
            let open_ends = u8::from(is_open_end(board, pos, dr, dc, forward + 1))
                + u8::from(is_open_end(board, pos, -dr, -dc, backward + 1));
            score += run_score(1 + forward + backward, open_ends);
        }
    }
    score
}

/// The cell `steps` away along the ray is on the board and empty.
#[inline]
fn is_open_end(board: &Board, pos: Pos, dr: i32, dc: i32, steps: usize) -> bool {
    pos.offset(dr, dc, steps as i32)
        .is_some_and(|cell| board.is_empty(cell))
}

/// Bonus for `player` stones near the center: `3 - 0.5 * distance` within
/// Chebyshev distance 2.
pub fn center_control(board: &Board, player: Stone) -> f64 {
    let Some(stones) = board.stones(player) else {
        return 0.0;
    };

    let center = Pos::center();
    stones
        .iter_ones()
        .map(|pos| pos.chebyshev(center))
        .filter(|&distance| distance <= CENTER_RADIUS)
        .map(|distance| CENTER_BONUS - f64::from(distance) * CENTER_FALLOFF)
        .sum()
}

/// Count `player` stones followed by opponent, opponent, empty along a ray.
///
/// Each match is worth [`PatternScore::CAPTURE_THREAT`]. The pattern starts
/// from the player's own stone, which is not the same as the bracket the
/// capture rule needs; it is kept this way for play strength.
pub fn potential_captures(board: &Board, player: Stone) -> i32 {
    let Some(stones) = board.stones(player) else {
        return 0;
    };

    let opponent = player.opponent();
    let mut score = 0;
    for pos in stones.iter_ones() {
        for &(dr, dc) in &RAY_DIRECTIONS {
            let cells = [1, 2, 3].map(|step| pos.offset(dr, dc, step).map(|p| board.get(p)));
            if cells == [Some(opponent), Some(opponent), Some(Stone::Empty)] {
                score += PatternScore::CAPTURE_THREAT;
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(r, c, s) in stones {
            board.set(Pos::new(r, c), s);
        }
        board
    }

    #[test]
    fn test_evaluate_empty_board() {
        let state = GameState::new();
        assert_eq!(evaluate(&state, Stone::Black), 0.0);
        assert_eq!(evaluate(&state, Stone::White), 0.0);
    }

    #[test]
    fn test_single_stone_line_score_is_zero() {
        let board = board_with(&[(9, 9, Stone::Black)]);
        assert_eq!(line_score(&board, Stone::Black), 0);
    }

    #[test]
    fn test_open_two_counted_per_stone() {
        // _BB_ horizontally: each of the 2 stones sees an open two
        let board = board_with(&[(5, 5, Stone::Black), (5, 6, Stone::Black)]);
        assert_eq!(line_score(&board, Stone::Black), 2 * PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_closed_three_against_opponent() {
        // W B B B _ : one open end for each of the 3 stones
        let board = board_with(&[
            (5, 4, Stone::White),
            (5, 5, Stone::Black),
            (5, 6, Stone::Black),
            (5, 7, Stone::Black),
        ]);
        assert_eq!(line_score(&board, Stone::Black), 3 * PatternScore::CLOSED_THREE);
    }

    #[test]
    fn test_board_edge_is_not_open() {
        // B B at the left edge: only the right end is open
        let board = board_with(&[(0, 0, Stone::Black), (0, 1, Stone::Black)]);
        // Plus the vertical/diagonal singles score nothing
        assert_eq!(line_score(&board, Stone::Black), 2 * PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_gap_does_not_extend_run() {
        // B B _ B B is two separate open twos, not a four
        let board = board_with(&[
            (9, 3, Stone::Black),
            (9, 4, Stone::Black),
            (9, 6, Stone::Black),
            (9, 7, Stone::Black),
        ]);
        assert_eq!(line_score(&board, Stone::Black), 4 * PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_five_scores_each_member() {
        let mut board = Board::new();
        for c in 0..5 {
            board.set(Pos::new(9, c), Stone::White);
        }
        assert_eq!(line_score(&board, Stone::White), 5 * PatternScore::FIVE);
    }

    #[test]
    fn test_center_control() {
        let board = board_with(&[
            (9, 9, Stone::Black),
            (8, 10, Stone::Black),
            (7, 11, Stone::Black),
            (6, 9, Stone::Black),
        ]);
        // 3.0 + 2.5 + 2.0, the stone at distance 3 earns nothing
        assert_eq!(center_control(&board, Stone::Black), 7.5);
        assert_eq!(center_control(&board, Stone::White), 0.0);
    }

    #[test]
    fn test_potential_captures_pattern() {
        // B W W _ : one threat for Black
        let board = board_with(&[
            (3, 3, Stone::Black),
            (3, 4, Stone::White),
            (3, 5, Stone::White),
        ]);
        assert_eq!(potential_captures(&board, Stone::Black), PatternScore::CAPTURE_THREAT);

        // Closing the far end removes the threat
        let closed = board_with(&[
            (3, 3, Stone::Black),
            (3, 4, Stone::White),
            (3, 5, Stone::White),
            (3, 6, Stone::Black),
        ]);
        assert_eq!(potential_captures(&closed, Stone::Black), 0);
    }

    #[test]
    fn test_potential_captures_needs_board_room() {
        let board = board_with(&[
            (0, 16, Stone::Black),
            (0, 17, Stone::White),
            (0, 18, Stone::White),
        ]);
        assert_eq!(potential_captures(&board, Stone::Black), 0);
    }

    #[test]
    fn test_evaluate_composition() {
        let mut state = GameState::new();
        // White opens in the center, Black answers next to it
        assert!(state.make_move(9, 9));
        assert!(state.make_move(9, 10));

        let board = state.board();
        let expected = f64::from(line_score(board, Stone::White))
            + center_control(board, Stone::White)
            + f64::from(potential_captures(board, Stone::White))
            - 0.8 * f64::from(line_score(board, Stone::Black))
            - 0.8 * f64::from(potential_captures(board, Stone::Black));
        assert_eq!(evaluate(&state, Stone::White), expected);
        assert_eq!(evaluate(&state, Stone::White), 3.0);
        assert_eq!(evaluate(&state, Stone::Black), 2.5);
    }
}
