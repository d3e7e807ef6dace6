//! Pair capture (Pente-style bracketing)
//!
//! Capture pattern along any of the 8 rays from the placed stone:
//! X-O-O-X where X is the mover and O the opponent. Exactly two stones
//! are taken per bracket.

use crate::board::{Bitboard, Board, Pos, Stone, RAY_DIRECTIONS};

/// Pair bracketed by `stone` at `pos` along one ray, if any.
#[inline]
fn bracketed_pair(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> Option<[Pos; 2]> {
    let opponent = stone.opponent();
    let first = pos.offset(dr, dc, 1)?;
    let second = pos.offset(dr, dc, 2)?;
    let anchor = pos.offset(dr, dc, 3)?;

    (board.get(first) == opponent && board.get(second) == opponent && board.get(anchor) == stone)
        .then_some([first, second])
}

/// Find stones captured by `stone` played at `pos`.
///
/// All 8 rays are read against the same (pre-removal) board and the result
/// is a set, so overlapping detections collapse.
pub fn find_captures(board: &Board, pos: Pos, stone: Stone) -> Bitboard {
    let mut captured = Bitboard::new();
    for &(dr, dc) in &RAY_DIRECTIONS {
        if let Some(pair) = bracketed_pair(board, pos, stone, dr, dc) {
            captured.insert(pair[0]);
            captured.insert(pair[1]);
        }
    }
    captured
}

/// Remove every pair captured by the stone just played at `pos`.
///
/// Returns the removed positions in row-major order; their count is always
/// even. Removal happens only after all rays have been examined.
pub fn execute_captures(board: &mut Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    let captured: Vec<Pos> = find_captures(board, pos, stone).iter_ones().collect();
    for &cap in &captured {
        board.clear(cap);
    }
    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(r, c, s) in stones {
            board.set(Pos::new(r, c), s);
        }
        board
    }

    #[test]
    fn test_capture_horizontal() {
        // B _ W W B, Black plays the gap
        let mut board = board_with(&[
            (9, 5, Stone::Black),
            (9, 7, Stone::White),
            (9, 8, Stone::White),
            (9, 9, Stone::Black),
        ]);
        board.set(Pos::new(9, 6), Stone::Black);
        let captured = execute_captures(&mut board, Pos::new(9, 6), Stone::Black);

        assert_eq!(captured, vec![Pos::new(9, 7), Pos::new(9, 8)]);
        assert!(board.is_empty(Pos::new(9, 7)));
        assert!(board.is_empty(Pos::new(9, 8)));
    }

    #[test]
    fn test_capture_toward_negative_direction() {
        // B W W _ with the mover on the right end
        let board = board_with(&[
            (4, 1, Stone::White),
            (4, 2, Stone::Black),
            (4, 3, Stone::Black),
        ]);
        let captured = find_captures(&board, Pos::new(4, 4), Stone::White);
        assert_eq!(captured.count(), 2);
        assert!(captured.contains(Pos::new(4, 2)));
        assert!(captured.contains(Pos::new(4, 3)));
    }

    #[test]
    fn test_capture_diagonal_sw() {
        let board = board_with(&[
            (7, 7, Stone::White),
            (8, 6, Stone::White),
            (9, 5, Stone::Black),
        ]);
        let captured = find_captures(&board, Pos::new(6, 8), Stone::Black);
        assert!(captured.contains(Pos::new(7, 7)));
        assert!(captured.contains(Pos::new(8, 6)));
    }

    #[test]
    fn test_no_capture_single_stone() {
        let board = board_with(&[(9, 7, Stone::White), (9, 8, Stone::Black)]);
        assert!(find_captures(&board, Pos::new(9, 6), Stone::Black).is_empty());
    }

    #[test]
    fn test_no_capture_three_stones() {
        let board = board_with(&[
            (9, 7, Stone::White),
            (9, 8, Stone::White),
            (9, 9, Stone::White),
            (9, 10, Stone::Black),
        ]);
        assert!(find_captures(&board, Pos::new(9, 6), Stone::Black).is_empty());
    }

    #[test]
    fn test_no_capture_with_open_far_end() {
        // X O O _ : the bracket must be closed by the mover's own stone
        let board = board_with(&[(9, 7, Stone::White), (9, 8, Stone::White)]);
        assert!(find_captures(&board, Pos::new(9, 6), Stone::Black).is_empty());
    }

    #[test]
    fn test_no_capture_out_of_bounds() {
        let board = board_with(&[(0, 1, Stone::White), (0, 2, Stone::White)]);
        assert!(find_captures(&board, Pos::new(0, 0), Stone::Black).is_empty());
        assert!(find_captures(&board, Pos::new(0, 3), Stone::Black).is_empty());
    }

    #[test]
    fn test_cross_capture_is_atomic() {
        //     B
        //     W
        //     W
        // B W W _ W W B
        //     W
        //     W
        //     B
        let mut board = board_with(&[
            (9, 6, Stone::Black),
            (9, 7, Stone::White),
            (9, 8, Stone::White),
            (9, 10, Stone::White),
            (9, 11, Stone::White),
            (9, 12, Stone::Black),
            (6, 9, Stone::Black),
            (7, 9, Stone::White),
            (8, 9, Stone::White),
            (10, 9, Stone::White),
            (11, 9, Stone::White),
            (12, 9, Stone::Black),
        ]);
        let center = Pos::center();
        board.set(center, Stone::Black);
        let captured = execute_captures(&mut board, center, Stone::Black);

        assert_eq!(captured.len(), 8);
        assert_eq!(board.stone_count(), 5);
    }
}
