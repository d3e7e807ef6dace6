//! Candidate generation and root move ordering

use crate::board::{Pos, Stone};
use crate::eval::{line_score, potential_captures};
use crate::GameState;

/// Children examined per node, root included
pub const MAX_CANDIDATES: usize = 50;

/// Candidates for an interior node: generation order, capped.
#[inline]
pub fn candidate_moves(state: &GameState) -> Vec<Pos> {
    let mut moves = state.get_valid_moves();
    moves.truncate(MAX_CANDIDATES);
    moves
}

/// Ordering key of `mv` for `player`: `2 * lines + 3 * threats - distance`
/// measured on the position after the move.
pub fn ordering_score(state: &GameState, mv: Pos, player: Stone) -> i32 {
    let mut next = state.clone();
    next.play(mv);
    let board = next.board();
    2 * line_score(board, player) + 3 * potential_captures(board, player)
        - i32::from(mv.chebyshev(Pos::center()))
}

/// Root candidates, best first, capped at [`MAX_CANDIDATES`].
///
/// Equal keys fall back to the later cell in row-major order, which keeps
/// the ordering total and deterministic.
pub fn order_moves(state: &GameState, player: Stone) -> Vec<Pos> {
    let mut scored: Vec<(i32, Pos)> = state
        .get_valid_moves()
        .into_iter()
        .map(|mv| (ordering_score(state, mv, player), mv))
        .collect();
    scored.sort_unstable_by(|a, b| b.cmp(a));
    scored
        .into_iter()
        .take(MAX_CANDIDATES)
        .map(|(_, mv)| mv)
        .collect()
}
