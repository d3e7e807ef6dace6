//! Pente rules engine with a minimax opponent
//!
//! Rules implemented:
//! - Standard 19x19 board, White moves first
//! - Pair capture: X-O-O-X removes the O-O pair
//! - Five or more in a row wins
//! - Five captured pairs win
//! - A full board goes to the side with more captures, else a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Capture and five-in-a-row detection
//! - [`state`]: Game state with move history and undo
//! - [`eval`]: Heuristic position evaluation
//! - [`search`]: Move ordering and alpha-beta minimax
//! - [`engine`]: The configured AI player
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use pente::{GameState, MinimaxAI, Stone};
//!
//! let mut state = GameState::new();
//! let mut ai = MinimaxAI::new(Stone::Black, 1, 0.5).unwrap();
//!
//! assert!(state.make_move(9, 9)); // White
//! let reply = ai.get_best_move(&state).unwrap();
//! assert!(state.play(reply)); // Black
//! assert_eq!(state.current_player(), Stone::White);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{AiConfig, Difficulty};
pub use engine::{MinimaxAI, MoveResult, SearchType};
pub use error::{Error, Result};
pub use state::{GameState, MoveRecord};
