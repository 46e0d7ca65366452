//! Sliding piece move shapes
//!
//! Common functionality for bishops, rooks and queens. These pieces move any distance
//! along a line until blocked:
//! 1. The displacement must be diagonal (bishop), straight (rook) or either (queen)
//! 2. Every intervening square must be empty ("path clear")
//! 3. The destination may hold an enemy piece (capture)

use crate::board::Board;
use crate::types::*;

pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn is_valid_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && is_path_clear(board, from, to)
}

pub fn is_valid_rook_move(board: &Board, from: Square, to: Square) -> bool {
    is_straight(from, to) && is_path_clear(board, from, to)
}

pub fn is_valid_queen_move(board: &Board, from: Square, to: Square) -> bool {
    (is_straight(from, to) || is_diagonal(from, to)) && is_path_clear(board, from, to)
}

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let d_row = (to.row as i8 - from.row as i8).abs();
    let d_col = (to.col as i8 - from.col as i8).abs();
    d_row == d_col && d_row != 0
}

#[inline]
pub fn is_straight(from: Square, to: Square) -> bool {
    from != to && (from.row == to.row || from.col == to.col)
}

/// Every square strictly between `from` and `to` is empty
///
/// Only meaningful when the two squares share a line; callers check that first.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.row as i8 - from.row as i8).signum();
    let d_col = (to.col as i8 - from.col as i8).signum();

    let mut current = from.offset(d_row, d_col);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(d_row, d_col);
    }
    false
}

/// Walk each direction until the edge, including the first blocker
pub fn ray_targets(board: &Board, from: Square, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in dirs {
        let mut current = from.offset(d_row, d_col);
        while let Some(sq) = current {
            out.push(sq);
            if !board.is_empty(sq) {
                break;
            }
            current = sq.offset(d_row, d_col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_path_blocked() {
        let board = Board::standard();
        assert!(!is_valid_rook_move(&board, sq("a1"), sq("a3")));
        assert!(!is_valid_bishop_move(&board, sq("c1"), sq("e3")));
        assert!(!is_valid_queen_move(&board, sq("d1"), sq("d3")));
    }

    #[test]
    fn test_open_lines() {
        let board = Board::empty();
        assert!(is_valid_rook_move(&board, sq("a1"), sq("a8")));
        assert!(is_valid_bishop_move(&board, sq("a1"), sq("h8")));
        assert!(is_valid_queen_move(&board, sq("d1"), sq("h5")));
        assert!(!is_valid_bishop_move(&board, sq("a1"), sq("a8")));
        assert!(!is_valid_rook_move(&board, sq("a1"), sq("b3")));
        assert!(!is_valid_queen_move(&board, sq("a1"), sq("b3")));
    }

    #[test]
    fn test_ray_targets_stop_at_blocker() {
        let mut board = Board::empty();
        board.set(sq("a4"), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        let mut out = Vec::new();
        ray_targets(&board, sq("a1"), &[(-1, 0)], &mut out);
        assert_eq!(out, vec![sq("a2"), sq("a3"), sq("a4")]);
    }
}
