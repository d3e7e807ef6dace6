//! egui front-end for Pente
//!
//! [`Session`] holds all game and AI-worker state; the app only renders it
//! and forwards input.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::PenteApp;
pub use session::{AiState, GameMode, MoveTimer, Session, WinType};
