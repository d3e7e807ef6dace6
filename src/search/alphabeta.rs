//! Depth-limited minimax with alpha-beta pruning and a soft deadline
//!
//! Every child is an independent clone of its parent, so no make/unmake
//! bookkeeping is needed and branches can never observe each other.
//!
//! Leaf scores are always taken from the searching player's point of view,
//! at maximizing and minimizing nodes alike.

use std::time::{Duration, Instant};

use crate::board::{Pos, Stone};
use crate::eval::evaluate;
use crate::GameState;

use super::movegen::{candidate_moves, order_moves};

/// Score of a decided game won by the searching player
pub const WIN_SCORE: f64 = 100_000.0;

/// Score of a finished game with no winner
pub const DRAW_SCORE: f64 = 0.0;

/// Outcome of one root search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any candidate existed
    pub best_move: Option<Pos>,
    /// Minimax score of the best move
    pub score: f64,
    /// Interior and leaf nodes visited below the root
    pub nodes: u64,
    /// Root candidates fully searched before returning
    pub root_moves_searched: usize,
    /// The deadline cut the root loop short
    pub timed_out: bool,
}

/// One search traversal: owns the node counter and the deadline.
pub struct Searcher {
    player: Stone,
    start: Instant,
    time_limit: Duration,
    nodes: u64,
}

impl Searcher {
    /// Start the clock for a new search on behalf of `player`.
    pub fn new(player: Stone, time_limit: Duration) -> Self {
        Self {
            player,
            start: Instant::now(),
            time_limit,
            nodes: 0,
        }
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Sampled at every node; the deadline is soft.
    #[inline]
    fn out_of_time(&self) -> bool {
        self.start.elapsed() > self.time_limit
    }

    /// Search the ordered root candidates at `depth` plies.
    ///
    /// The root never prunes (beta stays +inf) but raises alpha after each
    /// candidate. When the deadline passes, the best move so far is kept.
    pub fn search_root(&mut self, state: &GameState, depth: u32) -> SearchResult {
        let candidates = order_moves(state, self.player);
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;
        let mut searched = 0;
        let mut timed_out = false;

        for &mv in &candidates {
            let mut child = state.clone();
            child.play(mv);

            let score = self.minimax(&child, depth.saturating_sub(1), alpha, beta, false);
            searched += 1;

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);

            if self.out_of_time() {
                log::debug!(
                    "search deadline hit after {}/{} root moves ({} nodes)",
                    searched,
                    candidates.len(),
                    self.nodes
                );
                timed_out = true;
                break;
            }
        }

        SearchResult {
            best_move: best_move.or_else(|| candidates.first().copied()),
            score: best_score,
            nodes: self.nodes,
            root_moves_searched: searched,
            timed_out,
        }
    }

    /// Alpha-beta minimax below the root.
    ///
    /// Returns the static evaluation when the game is over, the depth is
    /// exhausted, the deadline has passed, or no candidate exists.
    pub fn minimax(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.nodes += 1;

        if state.is_game_over() || depth == 0 || self.out_of_time() {
            return self.evaluate_state(state);
        }

        let moves = candidate_moves(state);
        if moves.is_empty() {
            return self.evaluate_state(state);
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in moves {
                let mut child = state.clone();
                child.play(mv);
                let score = self.minimax(&child, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in moves {
                let mut child = state.clone();
                child.play(mv);
                let score = self.minimax(&child, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Leaf score: decided games first, heuristic otherwise.
    pub fn evaluate_state(&self, state: &GameState) -> f64 {
        match state.get_winner() {
            Some(winner) if winner == self.player => WIN_SCORE,
            Some(_) => -WIN_SCORE,
            None if state.is_game_over() => DRAW_SCORE,
            None => evaluate(state, self.player),
        }
    }
}
