//! Position evaluation for Pente
//!
//! Contains:
//! - Pattern weights and the run scoring table
//! - Heuristic evaluation (lines, center, capture threats)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{center_control, evaluate, line_score, potential_captures};
pub use patterns::{run_score, PatternScore};
