//! Move ordering for alpha-beta pruning
//!
//! Orders moves so the likely best ones are searched first: captures by victim value
//! (an en-passant capture counts as a pawn), plus a bonus for moves that give check.
//! The sort is stable, so equally scored moves keep board order.

use std::cmp::Reverse;

use crate::constants::{piece_value, CHECK_ORDER_BONUS, PAWN_VALUE};
use crate::move_gen::en_passant_victim;
use crate::rules::Game;
use crate::types::*;

/// Heuristic score of a single move
pub(crate) fn move_order_score(game: &Game, mv: Move) -> i32 {
    let board = game.board();
    let Some(piece) = board.get(mv.from) else {
        return 0;
    };

    let mut score = match board.get(mv.to) {
        Some(victim) => piece_value(victim.kind),
        None if en_passant_victim(board, piece, mv.from, mv.to).is_some() => PAWN_VALUE,
        None => 0,
    };
    if game.gives_check(mv) {
        score += CHECK_ORDER_BONUS;
    }
    score
}

/// Order moves for better alpha-beta pruning, best first
pub(crate) fn order_moves(game: &Game, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| Reverse(move_order_score(game, mv)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_order_moves_prioritizes_captures() {
        let board = Board::from_pieces(&[
            (PieceKind::King, Color::White, (7, 7)),
            (PieceKind::Pawn, Color::White, (4, 4)),
            (PieceKind::Queen, Color::Black, (3, 3)),
            (PieceKind::King, Color::Black, (0, 0)),
        ]);
        let game = Game::from_board(board, Color::White);
        let mut moves = vec![
            Move::new(sq("e4"), sq("e5")),
            Move::new(sq("e4"), sq("d5")),
        ];
        order_moves(&game, &mut moves);
        assert_eq!(moves[0].to, sq("d5"), "Capture should be ordered first");
    }

    #[test]
    fn test_most_valuable_victim_first() {
        let board = Board::from_pieces(&[
            (PieceKind::King, Color::White, (7, 7)),
            (PieceKind::Knight, Color::White, (4, 4)),
            (PieceKind::Rook, Color::Black, (2, 3)),
            (PieceKind::Pawn, Color::Black, (2, 5)),
            (PieceKind::King, Color::Black, (0, 0)),
        ]);
        let game = Game::from_board(board, Color::White);
        let mut moves = vec![
            Move::new(sq("e4"), sq("f6")),
            Move::new(sq("e4"), sq("d6")),
        ];
        order_moves(&game, &mut moves);
        assert_eq!(moves[0].to, sq("d6"));
    }

    #[test]
    fn test_checking_move_gets_bonus() {
        let board = Board::from_pieces(&[
            (PieceKind::King, Color::White, (7, 7)),
            (PieceKind::Rook, Color::White, (7, 0)),
            (PieceKind::King, Color::Black, (0, 4)),
        ]);
        let game = Game::from_board(board, Color::White);
        assert_eq!(move_order_score(&game, Move::new(sq("a1"), sq("e1"))), CHECK_ORDER_BONUS);
        assert_eq!(move_order_score(&game, Move::new(sq("a1"), sq("b1"))), 0);
    }

    #[test]
    fn test_quiet_moves_keep_board_order() {
        let game = Game::new();
        let mut moves = game.legal_moves(Color::White);
        let original = moves.clone();
        order_moves(&game, &mut moves);
        assert_eq!(moves, original);
    }
}
