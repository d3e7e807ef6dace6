//! Five-in-a-row detection
//!
//! Only lines through the stone just played are examined; the board is
//! read after captures have been removed.

use crate::board::{Board, Pos, Stone, LINE_DIRECTIONS};

/// Contiguous `color` stones starting one step from `pos` along `(dr, dc)`.
#[inline]
pub fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    let mut cursor = pos;
    while let Some(next) = cursor.offset(dr, dc, 1) {
        if board.get(next) != color {
            break;
        }
        count += 1;
        cursor = next;
    }
    count
}

/// Length of the `color` run through `pos` along one undirected line.
#[inline]
pub fn line_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    1 + count_direction(board, pos, dr, dc, color) + count_direction(board, pos, -dr, -dc, color)
}

/// Five or more in a row through `pos` in any of the 4 orientations.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    LINE_DIRECTIONS
        .iter()
        .any(|&(dr, dc)| line_length(board, pos, dr, dc, color) >= 5)
}

/// Stones of the winning run through `pos`, ordered from one end to the other.
pub fn find_five_line_at_pos(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if board.get(pos) != color {
        return None;
    }
    for &(dr, dc) in &LINE_DIRECTIONS {
        let back = count_direction(board, pos, -dr, -dc, color) as i32;
        let forward = count_direction(board, pos, dr, dc, color) as i32;
        if back + forward + 1 >= 5 {
            return Some(
                (-back..=forward)
                    .filter_map(|step| pos.offset(dr, dc, step))
                    .collect(),
            );
        }
    }
    None
}
