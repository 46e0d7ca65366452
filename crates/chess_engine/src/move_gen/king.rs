//! King move shapes
//!
//! One step in any direction, or castling:
//! - King and the chosen rook are both unmoved and on their home squares
//! - Every square between them is empty
//! - The king is not in check, and neither the square it crosses nor the square it lands
//!   on is attacked by the opponent

use super::attack::is_square_attacked;
use crate::board::Board;
use crate::types::*;

const KING_HOME_COL: u8 = 4;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn is_valid_king_move(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let d_row = (to.row as i8 - from.row as i8).abs();
    let d_col = to.col as i8 - from.col as i8;

    if d_row <= 1 && d_col.abs() <= 1 {
        return true;
    }

    d_row == 0 && d_col.abs() == 2 && can_castle(board, piece, from, d_col > 0)
}

fn can_castle(board: &Board, king: Piece, from: Square, kingside: bool) -> bool {
    let color = king.color;
    if king.has_moved || from.row != color.home_row() || from.col != KING_HOME_COL {
        return false;
    }

    let rook_col = if kingside { 7 } else { 0 };
    let Some(rook_sq) = Square::new(from.row, rook_col) else {
        return false;
    };
    match board.get(rook_sq) {
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved => {}
        _ => return false,
    }

    let (lo, hi) = if kingside {
        (from.col + 1, rook_col)
    } else {
        (rook_col + 1, from.col)
    };
    let path_clear = (lo..hi)
        .filter_map(|col| Square::new(from.row, col))
        .all(|sq| board.is_empty(sq));
    if !path_clear {
        return false;
    }

    let step: i8 = if kingside { 1 } else { -1 };
    let enemy = color.opposite();
    [0, step, 2 * step]
        .iter()
        .filter_map(|&dc| from.offset(0, dc))
        .all(|sq| !is_square_attacked(board, sq, enemy))
}

/// Adjacent squares plus the two castling destinations
pub fn king_targets(from: Square, out: &mut Vec<Square>) {
    out.extend(
        KING_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc)),
    );
    out.extend([-2, 2].iter().filter_map(|&dc| from.offset(0, dc)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.set(sq("e1"), Some(Piece::new(PieceKind::King, Color::White)));
        board.set(sq("h1"), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(sq("a1"), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set(sq("e8"), Some(Piece::new(PieceKind::King, Color::Black)));
        board
    }

    #[test]
    fn test_castling_both_sides() {
        let board = castling_board();
        let king = board.get(sq("e1")).unwrap();
        assert!(is_valid_king_move(&board, king, sq("e1"), sq("g1")));
        assert!(is_valid_king_move(&board, king, sq("e1"), sq("c1")));
    }

    #[test]
    fn test_castling_requires_unmoved_rook() {
        let mut board = castling_board();
        let rook = board.get(sq("h1")).unwrap().moved();
        board.set(sq("h1"), Some(rook));
        let king = board.get(sq("e1")).unwrap();
        assert!(!is_valid_king_move(&board, king, sq("e1"), sq("g1")));
        assert!(is_valid_king_move(&board, king, sq("e1"), sq("c1")));
    }

    #[test]
    fn test_queenside_needs_b_file_empty() {
        let mut board = castling_board();
        board.set(sq("b1"), Some(Piece::new(PieceKind::Knight, Color::White)));
        let king = board.get(sq("e1")).unwrap();
        assert!(!is_valid_king_move(&board, king, sq("e1"), sq("c1")));
    }

    #[test]
    fn test_castling_through_attacked_square() {
        let mut board = castling_board();
        board.set(sq("f8"), Some(Piece::new(PieceKind::Rook, Color::Black)));
        let king = board.get(sq("e1")).unwrap();
        assert!(!is_valid_king_move(&board, king, sq("e1"), sq("g1")));
        assert!(is_valid_king_move(&board, king, sq("e1"), sq("c1")));
    }

    #[test]
    fn test_king_cannot_jump_three_files() {
        let board = castling_board();
        let king = board.get(sq("e1")).unwrap();
        assert!(!is_valid_king_move(&board, king, sq("e1"), sq("b1")));
        assert!(!is_valid_king_move(&board, king, sq("e1"), sq("e3")));
    }
}
