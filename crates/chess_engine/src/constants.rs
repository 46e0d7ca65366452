//! # Chess Engine Constants - Evaluation Values & Search Parameters
//!
//! ## Overview
//!
//! This module centralizes the constant values used by the evaluator and the search: piece
//! valuations (in centipawns), piece-square tables, phase-dependent term weights, and the
//! time/depth presets behind each time control.
//!
//! ## Centipawn Valuation System
//!
//! Scores are measured in **centipawns** (1/100th of a pawn) so the whole evaluation stays in
//! integer arithmetic:
//!
//! - **Pawn**: 100 centipawns (reference unit)
//! - **Knight**: 300 centipawns
//! - **Bishop**: 300 centipawns
//! - **Rook**: 500 centipawns
//! - **Queen**: 900 centipawns
//! - **King**: excluded from material (it can never be captured under the rules)
//!
//! The greedy opponent uses the coarse pawn-unit scale (1/3/3/5/9) instead, and the game-phase
//! classifier sums the same pawn units over all non-king material.
//!
//! ## Piece-Square Tables
//!
//! Each table is written from White's point of view with row 0 being the far rank (rank 8), so a
//! White piece on `(row, col)` reads `TABLE[row][col]` directly and a Black piece reads the
//! vertically mirrored entry `TABLE[7 - row][col]`.
//!
//! ## Phase Weights
//!
//! The evaluator blends five terms (material, position, mobility, king safety, pawn structure).
//! Every weight is a percentage keyed by game phase:
//!
//! | Term            | Opening | Middlegame | Endgame |
//! |-----------------|---------|------------|---------|
//! | Material        | 100     | 100        | 80      |
//! | Position        | 80      | 100        | 100     |
//! | Mobility        | 80      | 100        | 80      |
//! | King safety     | 100     | 100        | 50      |
//! | Pawn structure  | 100     | 100        | 120     |

use crate::types::PieceKind;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;

/// Material value in centipawns, king excluded
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => 0,
    }
}

/// Material value in whole pawns, used by the greedy strategy and the phase classifier
#[inline]
pub fn pawn_units(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

// ============================================================================
// Evaluation term constants
// ============================================================================

/// Centipawns per reachable square
pub const MOBILITY_WEIGHT: i32 = 5;

/// Penalty per empty square next to a king
pub const KING_OPEN_SQUARE_PENALTY: i32 = 5;

/// Penalty per enemy piece next to a king
pub const KING_ENEMY_ADJACENT_PENALTY: i32 = 10;

/// Penalty per extra pawn on a file
pub const DOUBLED_PAWN_PENALTY: i32 = 20;

pub const PASSED_PAWN_BONUS: i32 = 50;

/// Non-king material (pawn units) above which the game is still in the opening
pub const OPENING_MATERIAL_THRESHOLD: i32 = 40;

/// Non-king material (pawn units) above which the game is in the middlegame
pub const MIDDLEGAME_MATERIAL_THRESHOLD: i32 = 20;

/// Percentage weights per phase, indexed `[opening, middlegame, endgame]`
pub const MATERIAL_WEIGHTS: [i32; 3] = [100, 100, 80];
pub const POSITIONAL_WEIGHTS: [i32; 3] = [80, 100, 100];
pub const MOBILITY_WEIGHTS: [i32; 3] = [80, 100, 80];
pub const KING_SAFETY_WEIGHTS: [i32; 3] = [100, 100, 50];
pub const PAWN_STRUCTURE_WEIGHTS: [i32; 3] = [100, 100, 120];

// ============================================================================
// Search constants
// ============================================================================

/// Bound larger than any reachable evaluation
pub const SCORE_INFINITY: i32 = 1_000_000;

/// Move-ordering bonus for a move that gives check
pub const CHECK_ORDER_BONUS: i32 = 50;

/// Hard cap on iterative deepening regardless of configuration
pub const MAX_DEPTH: u8 = 16;

pub const STANDARD_MAX_DEPTH: u8 = 4;
pub const BLITZ_MAX_DEPTH: u8 = 3;
pub const STANDARD_TIME_BUDGET_MS: u64 = 2000;
pub const BLITZ_TIME_BUDGET_MS: u64 = 1000;

/// Depth used by the "medium" difficulty preset
pub const MEDIUM_FIXED_DEPTH: u8 = 2;

// ============================================================================
// Piece-square tables
// ============================================================================

pub type PieceSquareTable = [[i32; 8]; 8];

#[rustfmt::skip]
pub const PAWN_TABLE: PieceSquareTable = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [ 5,  5, 10, 25, 25, 10,  5,  5],
    [ 0,  0,  0, 20, 20,  0,  0,  0],
    [ 5, -5,-10,  0,  0,-10, -5,  5],
    [ 5, 10, 10,-20,-20, 10, 10,  5],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
pub const KNIGHT_TABLE: PieceSquareTable = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
pub const BISHOP_TABLE: PieceSquareTable = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10,  5,  5, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
pub const ROOK_TABLE: PieceSquareTable = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
pub const QUEEN_TABLE: PieceSquareTable = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

/// King table while there is enough material for an attack: stay home, stay castled
#[rustfmt::skip]
pub const KING_SAFETY_TABLE: PieceSquareTable = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

/// King table for the endgame: centralize
#[rustfmt::skip]
pub const KING_ACTIVITY_TABLE: PieceSquareTable = [
    [-50,-40,-30,-20,-20,-30,-40,-50],
    [-30,-20,-10,  0,  0,-10,-20,-30],
    [-30,-10, 20, 30, 30, 20,-10,-30],
    [-30,-10, 30, 40, 40, 30,-10,-30],
    [-30,-10, 30, 40, 40, 30,-10,-30],
    [-30,-10, 20, 30, 30, 20,-10,-30],
    [-30,-30,  0,  0,  0,  0,-30,-30],
    [-50,-30,-30,-30,-30,-30,-30,-50],
];
