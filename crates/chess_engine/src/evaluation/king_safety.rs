//! King safety
//!
//! Each king is penalised for every empty square and every enemy piece in its 3×3
//! neighbourhood. The balance is Black's penalty minus White's, so an exposed Black
//! king is good for White.

use crate::board::Board;
use crate::constants::{KING_ENEMY_ADJACENT_PENALTY, KING_OPEN_SQUARE_PENALTY};
use crate::move_gen::king::KING_OFFSETS;
use crate::types::*;

/// Exposure penalty for the king of `color`, 0 when it is missing
pub fn king_exposure(board: &Board, color: Color) -> i32 {
    let Some(king) = board.find_king(color) else {
        return 0;
    };
    KING_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| king.offset(dr, dc))
        .map(|sq| match board.get(sq) {
            None => KING_OPEN_SQUARE_PENALTY,
            Some(p) if p.color != color => KING_ENEMY_ADJACENT_PENALTY,
            Some(_) => 0,
        })
        .sum()
}

pub fn king_safety_balance(board: &Board) -> i32 {
    king_exposure(board, Color::Black) - king_exposure(board, Color::White)
}
