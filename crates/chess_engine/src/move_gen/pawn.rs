//! Pawn move shapes
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent onto an empty square
//! - **Double push**: two squares from the pawn's starting row, both squares empty
//! - **Captures**: one square diagonally forward onto an enemy piece
//! - **En passant**: diagonally forward onto an empty square, only on the ply right after an
//!   enemy pawn advanced two squares to land beside this pawn
//! - **Promotion**: reaching the far row is detected by the rules engine after the move

use crate::board::Board;
use crate::types::*;

pub fn is_valid_pawn_move(
    board: &Board,
    last_move: Option<Move>,
    color: Color,
    from: Square,
    to: Square,
) -> bool {
    let dir = color.forward();
    let d_row = to.row as i8 - from.row as i8;
    let d_col = to.col as i8 - from.col as i8;

    if d_col == 0 {
        if !board.is_empty(to) {
            return false;
        }
        if d_row == dir {
            return true;
        }
        if d_row == 2 * dir && from.row == color.pawn_row() {
            return from
                .offset(dir, 0)
                .map(|between| board.is_empty(between))
                .unwrap_or(false);
        }
        return false;
    }

    if d_col.abs() == 1 && d_row == dir {
        return match board.get(to) {
            Some(target) => target.color != color,
            None => is_en_passant(board, last_move, color, from, to),
        };
    }

    false
}

/// Whether a diagonal step onto an empty square captures en passant
///
/// The last move must be an enemy pawn's two-square advance that landed on the mover's row,
/// on the destination file.
pub fn is_en_passant(
    board: &Board,
    last_move: Option<Move>,
    color: Color,
    from: Square,
    to: Square,
) -> bool {
    let Some(last) = last_move else {
        return false;
    };
    let Some(moved) = board.get(last.to) else {
        return false;
    };
    moved.kind == PieceKind::Pawn
        && moved.color != color
        && (last.from.row as i8 - last.to.row as i8).abs() == 2
        && last.from.col == last.to.col
        && last.to.row == from.row
        && last.to.col == to.col
}

/// Forward, double-step and both diagonal squares
pub fn pawn_targets(color: Color, from: Square, out: &mut Vec<Square>) {
    let dir = color.forward();
    out.extend(
        [(dir, 0), (2 * dir, 0), (dir, -1), (dir, 1)]
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_double_push_only_from_start_row() {
        let mut board = Board::empty();
        board.set(sq("e3"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(!is_valid_pawn_move(&board, None, Color::White, sq("e3"), sq("e5")));
        assert!(is_valid_pawn_move(&board, None, Color::White, sq("e3"), sq("e4")));
    }

    #[test]
    fn test_double_push_blocked_by_intermediate() {
        let mut board = Board::standard();
        board.set(sq("e6"), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert!(!is_valid_pawn_move(&board, None, Color::Black, sq("e7"), sq("e5")));
        assert!(is_valid_pawn_move(&board, None, Color::Black, sq("d7"), sq("d5")));
    }

    #[test]
    fn test_diagonal_needs_enemy_or_en_passant() {
        let mut board = Board::empty();
        board.set(sq("d4"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(!is_valid_pawn_move(&board, None, Color::White, sq("d4"), sq("e5")));

        board.set(sq("e5"), Some(Piece::new(PieceKind::Bishop, Color::Black)));
        assert!(is_valid_pawn_move(&board, None, Color::White, sq("d4"), sq("e5")));
    }

    #[test]
    fn test_no_backward_moves() {
        let board = Board::standard();
        assert!(!is_valid_pawn_move(&board, None, Color::White, sq("e2"), sq("e1")));
        assert!(!is_valid_pawn_move(&board, None, Color::Black, sq("e7"), sq("e8")));
    }
}
