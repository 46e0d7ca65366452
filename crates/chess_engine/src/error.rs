//! Error types for chess engine
//!
//! The rules themselves never fail: legality is a yes/no answer and a broken position is
//! reported as check or as "no legal moves". These errors cover the checked entry points
//! instead: parsing notation, validated move commits, and promotion choices.

use thiserror::Error;

use crate::types::{Color, GameStatus, PieceKind};

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Text that is not a square name like `e4`
    #[error("Cannot parse square from '{input}'")]
    ParseSquare { input: String },

    /// Text that is not a coordinate move like `e2e4` or `e7e8q`
    #[error("Cannot parse move from '{input}'")]
    ParseMove { input: String },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: String },

    /// Piece does not belong to the side to move
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: String, color: Color },

    /// Move rejected by the rules
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: String, to: String },

    /// Move attempted after the game ended
    #[error("Game is already over: {status}")]
    GameOver { status: GameStatus },

    /// Promotion to a pawn or a king
    #[error("Cannot promote to {kind}")]
    InvalidPromotion { kind: PieceKind },

    /// Promotion requested for anything but a pawn on its last rank
    #[error("No pawn to promote on {square}")]
    NotPromotable { square: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
