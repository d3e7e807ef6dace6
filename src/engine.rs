//! Minimax AI player
//!
//! Wraps one configured search: which side it plays, how deep it looks and
//! how long it may think. Each call to [`MinimaxAI::get_best_move`] starts a
//! fresh [`Searcher`], so the engine keeps no position state between moves,
//! only the diagnostics of the last search.
//!
//! # Example
//!
//! ```
//! use pente::{GameState, MinimaxAI, Pos, Stone};
//!
//! let mut state = GameState::new();
//! let mut ai = MinimaxAI::new(Stone::Black, 1, 1.0).unwrap();
//!
//! // White opens, the engine answers
//! state.make_move(9, 9);
//! if let Some(pos) = ai.get_best_move(&state) {
//!     state.play(pos);
//!     println!("AI plays at {}", pos);
//! }
//! ```

use std::time::{Duration, Instant};

use crate::board::{Pos, Stone};
use crate::config::{validate_depth, validate_time_limit, AiConfig};
use crate::error::Result;
use crate::search::{SearchResult, Searcher};
use crate::GameState;

/// How the engine arrived at its move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty game: the center is played without searching
    Opening,
    /// Regular alpha-beta search
    AlphaBeta,
}

/// Move plus diagnostics of one engine call
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` only when no candidate existed
    pub best_move: Option<Pos>,
    /// Minimax score from the engine's point of view
    pub score: f64,
    pub search_type: SearchType,
    /// Wall-clock time of the call
    pub elapsed: Duration,
    /// Nodes visited below the root
    pub nodes: u64,
    /// The deadline stopped the root loop early
    pub timed_out: bool,
}

impl MoveResult {
    fn opening(elapsed: Duration) -> Self {
        Self {
            best_move: Some(Pos::center()),
            score: 0.0,
            search_type: SearchType::Opening,
            elapsed,
            nodes: 0,
            timed_out: false,
        }
    }

    fn from_search(result: SearchResult, elapsed: Duration) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            elapsed,
            nodes: result.nodes,
            timed_out: result.timed_out,
        }
    }

    /// Elapsed time in whole milliseconds
    #[inline]
    pub fn time_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

/// Depth-limited alpha-beta player with a per-move time budget.
pub struct MinimaxAI {
    player: Stone,
    config: AiConfig,
    nodes_evaluated: u64,
    last_elapsed: Duration,
}

impl MinimaxAI {
    /// Engine for `player`, searching `max_depth` plies within
    /// `time_limit_secs` seconds.
    pub fn new(player: Stone, max_depth: u32, time_limit_secs: f64) -> Result<Self> {
        Ok(Self::with_config(player, AiConfig::new(max_depth, time_limit_secs)?))
    }

    /// Engine from an already validated configuration
    #[must_use]
    pub fn with_config(player: Stone, config: AiConfig) -> Self {
        Self {
            player,
            config,
            nodes_evaluated: 0,
            last_elapsed: Duration::ZERO,
        }
    }

    #[inline]
    pub fn player(&self) -> Stone {
        self.player
    }

    #[inline]
    pub fn config(&self) -> AiConfig {
        self.config
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.config.time_limit
    }

    /// Change the ply limit (must be at least 1)
    pub fn set_max_depth(&mut self, depth: u32) -> Result<()> {
        self.config.max_depth = validate_depth(depth)?;
        Ok(())
    }

    /// Change the time budget in seconds (finite and positive)
    pub fn set_time_limit(&mut self, seconds: f64) -> Result<()> {
        self.config.time_limit = validate_time_limit(seconds)?;
        Ok(())
    }

    pub fn set_config(&mut self, config: AiConfig) {
        self.config = config;
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes_evaluated(&self) -> u64 {
        self.nodes_evaluated
    }

    /// Duration of the last search
    #[inline]
    pub fn last_elapsed(&self) -> Duration {
        self.last_elapsed
    }

    /// Best move for the engine's side.
    ///
    /// The caller must only ask when the position still has an empty cell;
    /// `None` is returned otherwise.
    #[must_use]
    pub fn get_best_move(&mut self, state: &GameState) -> Option<Pos> {
        self.search(state).best_move
    }

    /// Best move with search diagnostics.
    pub fn search(&mut self, state: &GameState) -> MoveResult {
        let start = Instant::now();
        self.nodes_evaluated = 0;

        if state.move_history().is_empty() {
            self.last_elapsed = start.elapsed();
            return MoveResult::opening(self.last_elapsed);
        }

        let mut searcher = Searcher::new(self.player, self.config.time_limit);
        let result = searcher.search_root(state, self.config.max_depth);

        self.nodes_evaluated = result.nodes;
        self.last_elapsed = start.elapsed();

        let result = MoveResult::from_search(result, self.last_elapsed);
        log::debug!(
            "{} searched depth {}: move {:?} score {:.1} nodes {} in {}ms{}",
            self.player,
            self.config.max_depth,
            result.best_move,
            result.score,
            result.nodes,
            result.time_ms(),
            if result.timed_out { " (time limit)" } else { "" }
        );
        result
    }
}
