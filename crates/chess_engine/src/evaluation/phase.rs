//! Game phase classification from remaining non-king material

use crate::board::Board;
use crate::constants::{pawn_units, MIDDLEGAME_MATERIAL_THRESHOLD, OPENING_MATERIAL_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl GamePhase {
    /// Sum of pawn units over both sides, kings excluded
    pub fn of(board: &Board) -> Self {
        let material: i32 = board.pieces().map(|(_, p)| pawn_units(p.kind)).sum();
        if material > OPENING_MATERIAL_THRESHOLD {
            GamePhase::Opening
        } else if material > MIDDLEGAME_MATERIAL_THRESHOLD {
            GamePhase::Middlegame
        } else {
            GamePhase::Endgame
        }
    }

    /// Index into the per-phase weight tables
    pub fn index(self) -> usize {
        match self {
            GamePhase::Opening => 0,
            GamePhase::Middlegame => 1,
            GamePhase::Endgame => 2,
        }
    }
}
