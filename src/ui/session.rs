//! Play session behind the GUI: one game, its mode and the AI worker
//!
//! The session owns the live [`GameState`]. Engine searches run on a worker
//! thread against a private clone and report back over a channel, so the
//! render loop never blocks and never shares the live state.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::rules::{find_five_line_at_pos, CAPTURE_WIN_PAIRS};
use crate::{AiConfig, Difficulty, GameState, MinimaxAI, MoveResult, Pos, Stone};

/// Depth used for PvP hints
const HINT_DEPTH: u32 = 1;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI; the AI plays the other color
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::White,
        }
    }
}

/// How a finished game was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    FiveInRow,
    Capture,
    BoardFull,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// One interactive game
pub struct Session {
    state: GameState,
    mode: GameMode,
    difficulty: Difficulty,
    ai_config: AiConfig,
    ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
}

impl Session {
    pub fn new(mode: GameMode, ai_config: AiConfig) -> Self {
        Self {
            state: GameState::new(),
            mode,
            difficulty: Difficulty::default(),
            ai_config,
            ai_state: AiState::Idle,
            last_ai_result: None,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
        }
    }

    /// Fresh game, keeping mode and AI settings
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.ai_state = AiState::Idle;
        self.last_ai_result = None;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = Some("New game started!".to_string());
        log::info!("new game ({:?})", self.mode);
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn ai_config(&self) -> AiConfig {
        self.ai_config
    }

    /// Color the AI plays, if any
    pub fn ai_color(&self) -> Option<Stone> {
        match self.mode {
            GameMode::PvE { human_color } => Some(human_color.opponent()),
            GameMode::PvP => None,
        }
    }

    pub fn is_human_turn(&self) -> bool {
        self.ai_color() != Some(self.state.current_player())
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Place the human's stone.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<()> {
        if self.state.is_game_over() {
            return Err(Error::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(Error::EngineBusy);
        }
        if !self.is_human_turn() {
            return Err(Error::NotYourTurn);
        }
        if !self.execute_move(pos) {
            return Err(Error::InvalidMove {
                row: i32::from(pos.row),
                col: i32::from(pos.col),
            });
        }
        self.message = None;
        Ok(())
    }

    /// Apply a move for whoever is to play
    fn execute_move(&mut self, pos: Pos) -> bool {
        let mover = self.state.current_player();
        if !self.state.play(pos) {
            return false;
        }

        let captured = self
            .state
            .move_history()
            .last()
            .map_or(0, |record| record.pairs());
        log::info!("{} plays {}{}", mover, pos, if captured > 0 { " (capture)" } else { "" });

        self.suggested_move = None;
        self.move_timer.start();

        if self.state.is_game_over() {
            match self.state.get_winner() {
                Some(winner) => log::info!("game over: {} wins by {:?}", winner, self.win_type()),
                None => log::info!("game over: draw"),
            }
        }
        true
    }

    /// Launch the engine on a worker thread if it is its turn
    pub fn start_ai_thinking(&mut self) {
        let Some(ai_color) = self.ai_color() else {
            return;
        };
        if !self.is_ai_turn() || self.is_ai_thinking() || self.state.is_game_over() {
            return;
        }

        let snapshot = self.state.clone();
        let config = self.ai_config;
        let (tx, rx) = channel();

        let spawned = thread::Builder::new()
            .name("pente-ai".to_string())
            .spawn(move || {
                let mut engine = MinimaxAI::with_config(ai_color, config);
                let result = engine.search(&snapshot);
                // Receiver gone means the game was reset meanwhile
                let _ = tx.send(result);
            });

        match spawned {
            Ok(_) => {
                self.ai_state = AiState::Thinking {
                    receiver: rx,
                    start_time: Instant::now(),
                };
            }
            Err(err) => {
                log::warn!("failed to start AI worker: {}", err);
                self.message = Some(Error::EngineDisconnected.to_string());
            }
        }
    }

    /// Apply the engine's move once the worker has answered
    pub fn check_ai_result(&mut self) {
        let outcome = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Ok((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => Err(Error::EngineDisconnected),
            },
            AiState::Idle => return,
        };
        self.ai_state = AiState::Idle;

        match outcome {
            Ok((result, elapsed)) => {
                self.move_timer.ai_thinking_time = Some(elapsed);
                let best = result.best_move;
                self.last_ai_result = Some(result);
                match best {
                    Some(pos) if self.execute_move(pos) => {}
                    _ => {
                        log::warn!("AI returned no playable move");
                        self.message = Some("AI could not find a move".to_string());
                    }
                }
            }
            Err(err) => {
                log::warn!("AI worker ended unexpectedly");
                self.message = Some(err.to_string());
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Quick synchronous suggestion for the side to move (PvP)
    pub fn request_suggestion(&mut self) {
        if self.state.is_game_over() || self.is_ai_thinking() {
            return;
        }
        let config = AiConfig {
            max_depth: HINT_DEPTH,
            ..self.ai_config
        };
        let mut engine = MinimaxAI::with_config(self.state.current_player(), config);
        let result = engine.search(&self.state);
        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Take back the last move; in PvE also the engine's reply so the human
    /// is to move again. Returns how many moves were undone.
    pub fn undo(&mut self) -> Result<usize> {
        if self.is_ai_thinking() {
            return Err(Error::EngineBusy);
        }
        if !self.state.undo_move() {
            self.message = Some(Error::NothingToUndo.to_string());
            return Err(Error::NothingToUndo);
        }

        let mut undone = 1;
        if self.is_ai_turn() && self.state.undo_move() {
            undone = 2;
        }
        self.suggested_move = None;
        self.move_timer.start();
        self.message = Some(if undone == 2 {
            "Two moves undone!".to_string()
        } else {
            "Move undone!".to_string()
        });
        log::info!("undid {} move(s)", undone);
        Ok(undone)
    }

    /// Next difficulty preset; applies to the following AI search
    pub fn cycle_difficulty(&mut self) {
        self.difficulty = self.difficulty.next();
        self.ai_config = self.difficulty.config();
        self.message = Some(format!(
            "AI Difficulty set to {} (Depth {}, Time ~{:.1}s)",
            self.difficulty.level(),
            self.ai_config.max_depth,
            self.ai_config.time_limit.as_secs_f64()
        ));
        log::info!("difficulty {} -> {:?}", self.difficulty.level(), self.ai_config);
    }

    /// Toggle between PvE and PvP and start over
    pub fn switch_mode(&mut self) {
        self.mode = match self.mode {
            GameMode::PvE { .. } => GameMode::PvP,
            GameMode::PvP => GameMode::default(),
        };
        self.reset();
        self.message = Some(match self.mode {
            GameMode::PvE { .. } => "Mode: Player vs AI".to_string(),
            GameMode::PvP => "Mode: Player vs Player".to_string(),
        });
    }

    /// Play the other color against the AI and start over
    pub fn switch_human_color(&mut self) {
        if let GameMode::PvE { human_color } = self.mode {
            let human_color = human_color.opponent();
            self.mode = GameMode::PvE { human_color };
            self.reset();
            self.message = Some(format!("Your color is now {}", human_color));
        }
    }

    /// How the game was decided, once it is over
    pub fn win_type(&self) -> Option<WinType> {
        if !self.state.is_game_over() {
            return None;
        }
        let Some(winner) = self.state.winner() else {
            return Some(WinType::BoardFull);
        };
        if self.winning_line().is_some() {
            Some(WinType::FiveInRow)
        } else if self.state.captures(winner) >= CAPTURE_WIN_PAIRS {
            Some(WinType::Capture)
        } else {
            Some(WinType::BoardFull)
        }
    }

    /// The five (or more) through the last move, if that ended the game
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let winner = self.state.get_winner()?;
        let last = self.state.last_move()?;
        find_five_line_at_pos(self.state.board(), last, winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> Session {
        Session::new(GameMode::PvP, AiConfig::default())
    }

    #[test]
    fn test_human_moves_first_as_white() {
        let mut session = Session::new(GameMode::default(), AiConfig::default());
        assert!(session.is_human_turn());
        session.try_place_stone(Pos::new(9, 9)).unwrap();
        assert!(session.is_ai_turn());
        assert_eq!(session.try_place_stone(Pos::new(9, 10)), Err(Error::NotYourTurn));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut session = pvp();
        session.try_place_stone(Pos::new(9, 9)).unwrap();
        assert_eq!(
            session.try_place_stone(Pos::new(9, 9)),
            Err(Error::InvalidMove { row: 9, col: 9 })
        );
    }

    #[test]
    fn test_pve_undo_takes_back_two_moves() {
        let mut session = Session::new(GameMode::default(), AiConfig::default());
        session.try_place_stone(Pos::new(9, 9)).unwrap();
        // Stand in for the engine's reply
        assert!(session.execute_move(Pos::new(9, 10)));
        assert!(session.is_human_turn());

        assert_eq!(session.undo(), Ok(2));
        assert_eq!(session.state().move_count(), 0);
        assert_eq!(session.message.as_deref(), Some("Two moves undone!"));
    }

    #[test]
    fn test_pvp_undo_single_and_empty() {
        let mut session = pvp();
        assert_eq!(session.undo(), Err(Error::NothingToUndo));
        session.try_place_stone(Pos::new(9, 9)).unwrap();
        assert_eq!(session.undo(), Ok(1));
        assert_eq!(session.state().current_player(), Stone::White);
    }

    #[test]
    fn test_cycle_difficulty_updates_config() {
        let mut session = pvp();
        session.cycle_difficulty();
        assert_eq!(session.difficulty().level(), 3);
        assert_eq!(session.ai_config().max_depth, 3);
    }

    #[test]
    fn test_switch_mode_and_color() {
        let mut session = Session::new(GameMode::default(), AiConfig::default());
        session.switch_human_color();
        assert_eq!(session.mode(), GameMode::PvE { human_color: Stone::Black });
        // White moves first, so the AI is to play
        assert!(session.is_ai_turn());

        session.switch_mode();
        assert_eq!(session.mode(), GameMode::PvP);
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_five_in_row_reported() {
        let mut session = pvp();
        for (r, c) in [(0, 0), (5, 0), (0, 1), (5, 2), (0, 2), (5, 4), (0, 3), (5, 6), (0, 4)] {
            session.try_place_stone(Pos::new(r, c)).unwrap();
        }
        assert_eq!(session.win_type(), Some(WinType::FiveInRow));
        assert_eq!(session.winning_line().map(|line| line.len()), Some(5));
        assert_eq!(session.try_place_stone(Pos::new(10, 10)), Err(Error::GameOver));
    }
}
