//! Pawn structure
//!
//! - Doubled pawns: every pawn beyond the first on a file costs a penalty
//! - Passed pawns: a pawn with no enemy pawn ahead of it on its own or an adjacent
//!   file earns a bonus

use crate::board::{Board, BOARD_SIZE};
use crate::constants::{DOUBLED_PAWN_PENALTY, PASSED_PAWN_BONUS};
use crate::types::*;

fn pawns_of(board: &Board, color: Color) -> impl Iterator<Item = Square> + '_ {
    board
        .pieces_of(color)
        .filter(|(_, p)| p.kind == PieceKind::Pawn)
        .map(|(sq, _)| sq)
}

/// Extra pawns stacked on a file, summed over all files
pub fn doubled_pawns(board: &Board, color: Color) -> i32 {
    let mut per_file = [0i32; BOARD_SIZE];
    for sq in pawns_of(board, color) {
        per_file[sq.col as usize] += 1;
    }
    per_file.iter().map(|&n| (n - 1).max(0)).sum()
}

pub fn is_passed_pawn(board: &Board, color: Color, sq: Square) -> bool {
    let enemy = color.opposite();
    !pawns_of(board, enemy).any(|other| {
        let ahead = match color {
            Color::White => other.row < sq.row,
            Color::Black => other.row > sq.row,
        };
        ahead && (other.col as i8 - sq.col as i8).abs() <= 1
    })
}

pub fn passed_pawns(board: &Board, color: Color) -> i32 {
    pawns_of(board, color)
        .filter(|&sq| is_passed_pawn(board, color, sq))
        .count() as i32
}

/// Structure score for one side
pub fn pawn_structure(board: &Board, color: Color) -> i32 {
    passed_pawns(board, color) * PASSED_PAWN_BONUS
        - doubled_pawns(board, color) * DOUBLED_PAWN_PENALTY
}

pub fn pawn_structure_balance(board: &Board) -> i32 {
    pawn_structure(board, Color::White) - pawn_structure(board, Color::Black)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings() -> Vec<(PieceKind, Color, (u8, u8))> {
        vec![
            (PieceKind::King, Color::White, (7, 4)),
            (PieceKind::King, Color::Black, (0, 4)),
        ]
    }

    #[test]
    fn test_starting_structure_is_level() {
        let board = Board::standard();
        assert_eq!(doubled_pawns(&board, Color::White), 0);
        assert_eq!(passed_pawns(&board, Color::White), 0);
        assert_eq!(pawn_structure_balance(&board), 0);
    }

    #[test]
    fn test_doubled_pawns() {
        let mut pieces = kings();
        pieces.extend([
            (PieceKind::Pawn, Color::White, (6, 2)),
            (PieceKind::Pawn, Color::White, (5, 2)),
            (PieceKind::Pawn, Color::White, (4, 2)),
        ]);
        let board = Board::from_pieces(&pieces);
        assert_eq!(doubled_pawns(&board, Color::White), 2);
    }

    #[test]
    fn test_passed_pawn_detection() {
        let mut pieces = kings();
        pieces.extend([
            (PieceKind::Pawn, Color::White, (3, 0)),
            (PieceKind::Pawn, Color::White, (4, 4)),
            (PieceKind::Pawn, Color::Black, (2, 5)),
        ]);
        let board = Board::from_pieces(&pieces);
        let sq = |s: &str| s.parse::<Square>().unwrap();

        assert!(is_passed_pawn(&board, Color::White, sq("a5")));
        assert!(!is_passed_pawn(&board, Color::White, sq("e4")), "f6 pawn guards the e-file path");
        assert!(!is_passed_pawn(&board, Color::Black, sq("f6")), "e4 is ahead of f6");
        assert_eq!(pawn_structure_balance(&board), PASSED_PAWN_BONUS);
    }
}
