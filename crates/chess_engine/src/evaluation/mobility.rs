//! Mobility evaluation
//!
//! Counts legal destinations for both sides, so pinned pieces and a king boxed in by
//! attacked squares count as immobile.

use crate::constants::MOBILITY_WEIGHT;
use crate::rules::Game;
use crate::types::Color;

/// (White legal moves - Black legal moves) * weight
pub fn mobility_balance(game: &Game) -> i32 {
    let white = game.legal_moves(Color::White).len() as i32;
    let black = game.legal_moves(Color::Black).len() as i32;
    (white - black) * MOBILITY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::*;

    #[test]
    fn test_starting_mobility_is_level() {
        assert_eq!(mobility_balance(&Game::new()), 0);
    }

    #[test]
    fn test_open_queen_adds_mobility() {
        let board = Board::from_pieces(&[
            (PieceKind::King, Color::White, (7, 7)),
            (PieceKind::Queen, Color::White, (4, 3)),
            (PieceKind::King, Color::Black, (0, 0)),
        ]);
        let game = Game::from_board(board, Color::White);
        assert!(mobility_balance(&game) > 0);
    }
}
