//! Piece-square tables
//!
//! Tables are written from White's side (row 0 is the far rank). White pieces read
//! `TABLE[row][col]`; Black pieces read the mirrored `TABLE[7 - row][col]`, so the same
//! square relative to each side's home rank earns the same bonus.

use super::phase::GamePhase;
use crate::board::{Board, BOARD_SIZE};
use crate::constants::*;
use crate::types::*;

fn table_for(kind: PieceKind, phase: GamePhase) -> &'static PieceSquareTable {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King if phase == GamePhase::Endgame => &KING_ACTIVITY_TABLE,
        PieceKind::King => &KING_SAFETY_TABLE,
    }
}

/// Square bonus for a piece, from its owner's point of view
pub fn pst_value(piece: Piece, sq: Square, phase: GamePhase) -> i32 {
    let row = match piece.color {
        Color::White => sq.row as usize,
        Color::Black => BOARD_SIZE - 1 - sq.row as usize,
    };
    table_for(piece.kind, phase)[row][sq.col as usize]
}

/// White square bonuses minus Black square bonuses
pub fn positional_balance(board: &Board, phase: GamePhase) -> i32 {
    board
        .pieces()
        .map(|(sq, piece)| {
            let value = pst_value(piece, sq, phase);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_mirrored_squares_score_equally() {
        let white = Piece::new(PieceKind::Knight, Color::White);
        let black = Piece::new(PieceKind::Knight, Color::Black);
        assert_eq!(
            pst_value(white, sq("f3"), GamePhase::Middlegame),
            pst_value(black, sq("f6"), GamePhase::Middlegame)
        );
    }

    #[test]
    fn test_advanced_pawn_scores_higher() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert!(
            pst_value(pawn, sq("e2"), GamePhase::Middlegame)
                > pst_value(pawn, sq("e6"), GamePhase::Middlegame)
        );
    }

    #[test]
    fn test_king_table_switches_in_endgame() {
        let king = Piece::new(PieceKind::King, Color::White);
        assert!(
            pst_value(king, sq("g1"), GamePhase::Opening)
                > pst_value(king, sq("e4"), GamePhase::Opening)
        );
        assert!(
            pst_value(king, sq("e4"), GamePhase::Endgame)
                > pst_value(king, sq("g1"), GamePhase::Endgame)
        );
    }

    #[test]
    fn test_symmetric_position_is_level() {
        assert_eq!(positional_balance(&Board::standard(), GamePhase::Opening), 0);
    }
}
