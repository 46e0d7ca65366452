//! Static position evaluation
//!
//! Scores a position in centipawns by blending five terms:
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables, king table chosen by phase)
//! - Mobility (legal destinations)
//! - King safety (open and enemy-held squares around each king)
//! - Pawn structure (doubled and passed pawns)
//!
//! Each term is computed as White minus Black and weighted by a per-phase percentage.
//! [`evaluate`] then flips the sign for Black so the result always favours `perspective`.
//!
//! ## Module Organization
//!
//! - `material` - Material balance
//! - `pst` - Piece-square table lookups
//! - `mobility` - Legal destination counts
//! - `king_safety` - King neighbourhood penalties
//! - `pawns` - Doubled and passed pawns
//! - `phase` - Opening / middlegame / endgame classification

mod king_safety;
mod material;
mod mobility;
mod pawns;
mod phase;
mod pst;

pub use king_safety::king_safety_balance;
pub use material::material_balance;
pub use mobility::mobility_balance;
pub use pawns::pawn_structure_balance;
pub use phase::GamePhase;
pub use pst::{positional_balance, pst_value};

use crate::constants::*;
use crate::rules::Game;
use crate::types::Color;

/// Raw evaluation terms, White minus Black, before phase weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub material: i32,
    pub positional: i32,
    pub mobility: i32,
    pub king_safety: i32,
    pub pawn_structure: i32,
    pub phase: GamePhase,
}

impl EvalBreakdown {
    pub fn of(game: &Game) -> Self {
        let board = game.board();
        let phase = GamePhase::of(board);
        EvalBreakdown {
            material: material_balance(board),
            positional: positional_balance(board, phase),
            mobility: mobility_balance(game),
            king_safety: king_safety_balance(board),
            pawn_structure: pawn_structure_balance(board),
            phase,
        }
    }

    /// Phase-weighted sum from White's point of view
    pub fn weighted_total(&self) -> i32 {
        let p = self.phase.index();
        (self.material * MATERIAL_WEIGHTS[p]
            + self.positional * POSITIONAL_WEIGHTS[p]
            + self.mobility * MOBILITY_WEIGHTS[p]
            + self.king_safety * KING_SAFETY_WEIGHTS[p]
            + self.pawn_structure * PAWN_STRUCTURE_WEIGHTS[p])
            / 100
    }
}

/// Evaluate the position; positive favours `perspective`
pub fn evaluate(game: &Game, perspective: Color) -> i32 {
    let total = EvalBreakdown::of(game).weighted_total();
    match perspective {
        Color::White => total,
        Color::Black => -total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::*;

    #[test]
    fn test_starting_position_is_balanced() {
        let game = Game::new();
        let breakdown = EvalBreakdown::of(&game);
        assert_eq!(breakdown.material, 0);
        assert_eq!(breakdown.positional, 0);
        assert_eq!(breakdown.mobility, 0);
        assert_eq!(breakdown.king_safety, 0);
        assert_eq!(breakdown.pawn_structure, 0);
        assert_eq!(breakdown.phase, GamePhase::Opening);
        assert_eq!(evaluate(&game, Color::White), 0);
    }

    #[test]
    fn test_perspective_flips_sign() {
        let mut board = Board::standard();
        board.set("d8".parse().unwrap(), None);
        let game = Game::from_board(board, Color::White);

        let white = evaluate(&game, Color::White);
        assert!(white > 0, "White is a queen up");
        assert_eq!(evaluate(&game, Color::Black), -white);
    }

    #[test]
    fn test_weighting_uses_phase() {
        let breakdown = EvalBreakdown {
            material: 100,
            positional: 0,
            mobility: 0,
            king_safety: 0,
            pawn_structure: 100,
            phase: GamePhase::Endgame,
        };
        assert_eq!(breakdown.weighted_total(), 80 + 120);
    }
}
