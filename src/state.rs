//! Game state: board, turn, captures, history and terminal status
//!
//! All mutation goes through [`GameState::make_move`] and
//! [`GameState::undo_move`]. Both report failure with `false` and leave the
//! state untouched in that case.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::board::{Bitboard, Board, Pos, Stone, BOARD_SIZE};
use crate::rules::{execute_captures, has_five_at_pos, CAPTURE_WIN_PAIRS};

/// Chebyshev radius around played cells that candidate moves must fall in
pub const PROXIMITY_RADIUS: i32 = 3;

/// One applied move.
///
/// Records are never mutated after they are appended, so the captured set
/// is shared between clones instead of copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub player: Stone,
    /// Opponent stones removed by this move, row-major
    pub captured: Arc<[Pos]>,
}

impl MoveRecord {
    /// Capture pairs scored by this move
    #[inline]
    pub fn pairs(&self) -> u32 {
        (self.captured.len() / 2) as u32
    }
}

/// Full game position.
///
/// `Clone` gives an independent copy: the grid is a value type and history
/// records only share their immutable capture lists.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Stone,
    /// Capture pairs, indexed by [`capture_slot`]
    captures: [u32; 2],
    last_move: Option<Pos>,
    game_over: bool,
    winner: Option<Stone>,
    move_history: Vec<MoveRecord>,
    /// Every cell that appears in `move_history`, even if since captured
    played: Bitboard,
}

#[inline]
fn capture_slot(stone: Stone) -> Option<usize> {
    match stone {
        Stone::Black => Some(0),
        Stone::White => Some(1),
        Stone::Empty => None,
    }
}

impl GameState {
    /// Empty board, White to move, no captures.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Stone::White,
            captures: [0; 2],
            last_move: None,
            game_over: false,
            winner: None,
            move_history: Vec::with_capacity(64),
            played: Bitboard::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    /// Capture pairs scored by `player`
    #[inline]
    pub fn captures(&self, player: Stone) -> u32 {
        capture_slot(player).map_or(0, |slot| self.captures[slot])
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Raw winner field; see [`GameState::get_winner`] for the guarded read.
    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    /// Winner if the game is over. `None` while playing and on a draw.
    #[inline]
    pub fn get_winner(&self) -> Option<Stone> {
        if self.game_over {
            self.winner
        } else {
            None
        }
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// In bounds and empty
    #[inline]
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        Pos::checked(row, col).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Candidate moves in row-major order.
    ///
    /// The very first move is always the center. After that, empty cells
    /// within [`PROXIMITY_RADIUS`] of any cell ever played; if none exist,
    /// every empty cell.
    pub fn get_valid_moves(&self) -> Vec<Pos> {
        if self.move_history.is_empty() {
            return vec![Pos::center()];
        }

        let near = self.proximity_mask();
        let moves: Vec<Pos> = self
            .board
            .empty_cells()
            .filter(|&pos| near.contains(pos))
            .collect();

        if moves.is_empty() {
            self.board.empty_cells().collect()
        } else {
            moves
        }
    }

    /// Cells within the proximity radius of a played cell
    fn proximity_mask(&self) -> Bitboard {
        let mut mask = Bitboard::new();
        let max = BOARD_SIZE as i32 - 1;
        for anchor in self.played.iter_ones() {
            let (row, col) = (anchor.row as i32, anchor.col as i32);
            for r in (row - PROXIMITY_RADIUS).max(0)..=(row + PROXIMITY_RADIUS).min(max) {
                for c in (col - PROXIMITY_RADIUS).max(0)..=(col + PROXIMITY_RADIUS).min(max) {
                    mask.insert(Pos::new(r as u8, c as u8));
                }
            }
        }
        mask
    }

    /// Play the current player's stone at `(row, col)`.
    ///
    /// Returns `false` without touching the state if the cell is off the
    /// board or occupied.
    pub fn make_move(&mut self, row: i32, col: i32) -> bool {
        match Pos::checked(row, col) {
            Some(pos) => self.play(pos),
            None => false,
        }
    }

    /// [`GameState::make_move`] for an already typed position.
    pub fn play(&mut self, pos: Pos) -> bool {
        if !self.board.is_empty(pos) {
            return false;
        }

        let player = self.current_player;
        self.board.set(pos, player);
        self.last_move = Some(pos);

        let captured = execute_captures(&mut self.board, pos, player);
        let record = MoveRecord {
            pos,
            player,
            captured: captured.into(),
        };
        if let Some(slot) = capture_slot(player) {
            self.captures[slot] += record.pairs();
        }
        self.played.insert(pos);
        self.move_history.push(record);

        if has_five_at_pos(&self.board, pos, player) {
            self.finish(Some(player));
        } else if self.captures(player) >= CAPTURE_WIN_PAIRS {
            self.finish(Some(player));
        } else if self.board.is_full() {
            // With history present, no valid moves means no empty cells
            let winner = match self.captures(Stone::Black).cmp(&self.captures(Stone::White)) {
                Ordering::Greater => Some(Stone::Black),
                Ordering::Less => Some(Stone::White),
                Ordering::Equal => None,
            };
            self.finish(winner);
        }

        // Flip even on terminal moves so undo can restore the mover
        self.current_player = player.opponent();
        true
    }

    fn finish(&mut self, winner: Option<Stone>) {
        self.game_over = true;
        self.winner = winner;
    }

    /// Take back the last move.
    ///
    /// Captured stones come back as the opponent's colour and capture counts
    /// are recomputed from the remaining history. `game_over` and `winner`
    /// are cleared unconditionally, without re-checking the restored board.
    pub fn undo_move(&mut self) -> bool {
        let Some(record) = self.move_history.pop() else {
            return false;
        };

        self.board.clear(record.pos);
        self.current_player = record.player;
        let opponent = record.player.opponent();
        for &pos in record.captured.iter() {
            self.board.set(pos, opponent);
        }

        self.captures = [0; 2];
        for earlier in &self.move_history {
            if let Some(slot) = capture_slot(earlier.player) {
                self.captures[slot] += earlier.pairs();
            }
        }

        self.played = self.move_history.iter().map(|r| r.pos).collect();
        self.last_move = self.move_history.last().map(|r| r.pos);
        self.game_over = false;
        self.winner = None;
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    /// Stripes of length two in every direction, so no line reaches five.
    fn striped(pos: Pos) -> Stone {
        if (pos.col as usize / 2 + pos.row as usize) % 2 == 0 {
            Stone::White
        } else {
            Stone::Black
        }
    }

    /// Board full except (0, 0), with Black to play the last cell.
    ///
    /// Black at (0, 0) makes no capture and no five against the stripes.
    fn nearly_full(black_caps: u32, white_caps: u32) -> GameState {
        let mut state = GameState::new();
        for idx in 1..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            state.board.set(pos, striped(pos));
        }
        state.captures = [black_caps, white_caps];
        state.current_player = Stone::Black;
        state
    }

    #[test]
    fn test_full_board_higher_captures_wins() {
        let mut state = nearly_full(1, 3);
        assert!(state.make_move(0, 0));
        assert!(state.is_game_over());
        assert_eq!(state.get_winner(), Some(Stone::White));
    }

    #[test]
    fn test_full_board_tie_is_draw() {
        let mut state = nearly_full(2, 2);
        assert!(state.make_move(0, 0));
        assert!(state.is_game_over());
        assert_eq!(state.winner(), None);
        assert_eq!(state.get_winner(), None);
        assert_eq!(state.current_player(), Stone::White);
    }

    #[test]
    fn test_capture_win_on_fifth_pair() {
        let mut state = GameState::new();
        state.board.set(Pos::new(5, 5), Stone::White);
        state.board.set(Pos::new(5, 6), Stone::Black);
        state.board.set(Pos::new(5, 7), Stone::Black);
        state.captures = [0, 4];

        assert!(state.make_move(5, 8));
        assert_eq!(state.captures(Stone::White), 5);
        assert!(state.is_game_over());
        assert_eq!(state.get_winner(), Some(Stone::White));
    }

    #[test]
    fn test_proximity_uses_played_cells_not_stones() {
        let mut state = GameState::new();
        assert!(state.make_move(9, 9));
        // Vacate the cell behind the engine's back: history still anchors it
        state.board.clear(Pos::new(9, 9));

        let moves = state.get_valid_moves();
        assert!(moves.contains(&Pos::new(12, 12)));
        assert!(moves.contains(&Pos::new(9, 9)));
        assert!(!moves.contains(&Pos::new(13, 9)));
        assert_eq!(moves.len(), 49);
    }

    #[test]
    fn test_proximity_falls_back_to_all_empty_cells() {
        let mut state = GameState::new();
        assert!(state.make_move(0, 0));
        // Fill the whole neighbourhood of the only played cell
        for r in 0..=3u8 {
            for c in 0..=3u8 {
                state.board.set(Pos::new(r, c), Stone::Black);
            }
        }
        let moves = state.get_valid_moves();
        assert_eq!(moves.len(), TOTAL_CELLS - 16);
        assert_eq!(moves[0], Pos::new(0, 4));
    }
}
