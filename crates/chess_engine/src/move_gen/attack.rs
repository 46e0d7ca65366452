//! Square attack detection
//!
//! Answers "could a piece of `by` capture on this square right now", ignoring whether
//! that capture would expose the attacker's own king. The check test, the castling
//! transit test and the evaluator's king-safety term all go through here, so this
//! never recurses into legality.

use super::king::KING_OFFSETS;
use super::knight::KNIGHT_OFFSETS;
use super::sliding::{BISHOP_DIRS, ROOK_DIRS};
use crate::board::Board;
use crate::types::*;

pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    attacked_by_pawn(board, sq, by)
        || attacked_by_jump(board, sq, by, &KNIGHT_OFFSETS, PieceKind::Knight)
        || attacked_by_jump(board, sq, by, &KING_OFFSETS, PieceKind::King)
        || attacked_along(board, sq, by, &ROOK_DIRS, PieceKind::Rook)
        || attacked_along(board, sq, by, &BISHOP_DIRS, PieceKind::Bishop)
}

fn is_piece(piece: Option<Piece>, kind: PieceKind, color: Color) -> bool {
    matches!(piece, Some(p) if p.kind == kind && p.color == color)
}

/// An attacking pawn sits one row behind the target from its own point of view
fn attacked_by_pawn(board: &Board, sq: Square, by: Color) -> bool {
    let back = -by.forward();
    [-1, 1]
        .iter()
        .filter_map(|&dc| sq.offset(back, dc))
        .any(|from| is_piece(board.get(from), PieceKind::Pawn, by))
}

fn attacked_by_jump(
    board: &Board,
    sq: Square,
    by: Color,
    offsets: &[(i8, i8)],
    kind: PieceKind,
) -> bool {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| sq.offset(dr, dc))
        .any(|from| is_piece(board.get(from), kind, by))
}

/// First occupant along each ray must be a `line_kind` or a queen of `by`
fn attacked_along(
    board: &Board,
    sq: Square,
    by: Color,
    dirs: &[(i8, i8)],
    line_kind: PieceKind,
) -> bool {
    for &(dr, dc) in dirs {
        let mut current = sq.offset(dr, dc);
        while let Some(next) = current {
            if let Some(piece) = board.get(next) {
                if piece.color == by
                    && (piece.kind == line_kind || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = next.offset(dr, dc);
        }
    }
    false
}
