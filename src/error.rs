//! Error types for the Pente crate
//!
//! The rules core reports illegal moves and empty undo with `bool` returns.
//! This type covers configuration and the front-end's move requests.

use thiserror::Error;

/// Main error type for the Pente crate
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("search depth must be at least 1, got {depth}")]
    InvalidDepth { depth: u32 },

    #[error("time limit must be a positive number of seconds, got {seconds}")]
    InvalidTimeLimit { seconds: f64 },

    #[error("difficulty must be between 1 and {max}, got {level}")]
    InvalidDifficulty { level: u8, max: u8 },

    #[error("invalid move: ({row}, {col}) is occupied or off the board")]
    InvalidMove { row: i32, col: i32 },

    #[error("game already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("AI is thinking")]
    EngineBusy,

    #[error("no moves to undo")]
    NothingToUndo,

    #[error("AI stopped without returning a move")]
    EngineDisconnected,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
