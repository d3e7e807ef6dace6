//! Game rules for Pente
//!
//! - Pair capture: X-O-O-X removes the O-O pair
//! - Five or more in a row wins
//! - Five captured pairs win

pub mod capture;
pub mod win;

/// Captured pairs needed for a capture win
pub const CAPTURE_WIN_PAIRS: u32 = 5;

// Re-exports for convenient access
pub use capture::{execute_captures, find_captures};
pub use win::{count_direction, find_five_line_at_pos, has_five_at_pos, line_length};
