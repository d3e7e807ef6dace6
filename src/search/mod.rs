//! Search module for the Pente AI
//!
//! Contains:
//! - Candidate generation and root move ordering
//! - Minimax with alpha-beta pruning and a soft deadline

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, Searcher, DRAW_SCORE, WIN_SCORE};
pub use movegen::{candidate_moves, order_moves, ordering_score, MAX_CANDIDATES};
