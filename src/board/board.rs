//! Board grid: one bitboard layer per color

use super::bitboard::Bitboard;
use super::{Pos, Stone, TOTAL_CELLS};

/// 19x19 grid of stones.
///
/// Every cell is exactly one of Empty/Black/White: the two layers never
/// overlap. Capture counts and turn order live in [`crate::GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub const fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.contains(pos) {
            Stone::Black
        } else if self.white.contains(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_checked(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::checked(row, col).map(|pos| self.get(pos))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.contains(pos) && !self.white.contains(pos)
    }

    /// Put a stone on a cell, replacing whatever was there.
    /// `Stone::Empty` clears the cell.
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        self.black.remove(pos);
        self.white.remove(pos);
        match stone {
            Stone::Black => self.black.insert(pos),
            Stone::White => self.white.insert(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.set(pos, Stone::Empty);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }
}
