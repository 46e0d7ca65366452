//! Error types for game module
//!
//! Session-level failures: moves refused by the rules, moves played out of turn, and
//! moves requested after the game has ended.

use chess_engine::{ChessEngineError, Color, GameStatus};

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Move rejected by the rules engine
    #[error(transparent)]
    Engine(#[from] ChessEngineError),

    /// A side tried to move while the other side is to move
    #[error("{requested} cannot move: it is {to_move}'s turn")]
    OutOfTurn { requested: Color, to_move: Color },

    /// The game has already ended
    #[error("Game is already over: {status}")]
    GameOver { status: GameStatus },

    /// The AI found no legal move to play
    #[error("{color} has no legal move")]
    NoMove { color: Color },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
