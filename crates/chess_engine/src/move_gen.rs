//! Pseudo-legal move shapes
//!
//! Phase one of legality: does the move fit the piece's movement pattern and the
//! occupancy of the squares it crosses? Whether the mover's king survives the move is
//! checked afterwards by [`crate::rules`].
//!
//! ## Rules shared by every piece
//!
//! - A piece cannot stay on its own square
//! - A piece cannot land on a square held by its own side
//! - Nothing may land on the enemy king: checkmate, not capture, ends the game
//!
//! ## Module Organization
//!
//! - `pawn` - Pushes, double step, diagonal captures, en passant
//! - `knight` - L-shaped jumps
//! - `sliding` - Bishop, rook and queen lines plus the path-clear test
//! - `king` - Single steps and castling
//! - `attack` - Square-attack detection used for check and castling transit

pub mod attack;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;

use crate::board::Board;
use crate::types::*;

pub use attack::is_square_attacked;

/// Check the movement pattern of `piece` from `from` to `to`
///
/// `last_move` is the most recently committed move; pawns need it to decide en passant
/// eligibility. The moving side's king safety is not considered.
pub fn is_pseudo_legal(
    board: &Board,
    last_move: Option<Move>,
    piece: Piece,
    from: Square,
    to: Square,
) -> bool {
    if from == to {
        return false;
    }

    if let Some(target) = board.get(to) {
        if target.color == piece.color || target.kind == PieceKind::King {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => pawn::is_valid_pawn_move(board, last_move, piece.color, from, to),
        PieceKind::Knight => knight::is_valid_knight_move(from, to),
        PieceKind::Bishop => sliding::is_valid_bishop_move(board, from, to),
        PieceKind::Rook => sliding::is_valid_rook_move(board, from, to),
        PieceKind::Queen => sliding::is_valid_queen_move(board, from, to),
        PieceKind::King => king::is_valid_king_move(board, piece, from, to),
    }
}

/// Squares a piece could conceivably reach from `from`
///
/// A superset of its pseudo-legal destinations, generated from the movement pattern so
/// callers do not have to test all 64 squares. Every candidate still has to pass
/// [`is_pseudo_legal`] (and the self-check filter) before it counts as a move.
pub fn candidate_targets(board: &Board, piece: Piece, from: Square, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => pawn::pawn_targets(piece.color, from, out),
        PieceKind::Knight => knight::knight_targets(from, out),
        PieceKind::Bishop => sliding::ray_targets(board, from, &sliding::BISHOP_DIRS, out),
        PieceKind::Rook => sliding::ray_targets(board, from, &sliding::ROOK_DIRS, out),
        PieceKind::Queen => {
            sliding::ray_targets(board, from, &sliding::BISHOP_DIRS, out);
            sliding::ray_targets(board, from, &sliding::ROOK_DIRS, out);
        }
        PieceKind::King => king::king_targets(from, out),
    }
}

/// Square of the pawn removed by an en-passant capture, if `from → to` is one
///
/// A pawn stepping diagonally onto an empty square can only be capturing en passant;
/// the victim sits beside the mover, on the mover's starting row and the destination file.
pub fn en_passant_victim(board: &Board, piece: Piece, from: Square, to: Square) -> Option<Square> {
    if piece.kind != PieceKind::Pawn || from.col == to.col || !board.is_empty(to) {
        return None;
    }
    Square::new(from.row, to.col)
}

/// Rook relocation `(rook_from, rook_to)` for a castling king move, if `from → to` is one
pub fn castling_rook_move(piece: Piece, from: Square, to: Square) -> Option<(Square, Square)> {
    if piece.kind != PieceKind::King || from.row != to.row {
        return None;
    }
    let d_col = to.col as i8 - from.col as i8;
    if d_col.abs() != 2 {
        return None;
    }
    let (rook_col, rook_to_col) = if d_col > 0 {
        (7, from.col + 1)
    } else {
        (0, from.col - 1)
    };
    Some((Square::new(from.row, rook_col)?, Square::new(from.row, rook_to_col)?))
}
