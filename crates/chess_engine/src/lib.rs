//! # chess_engine
//!
//! Chess rules and an alpha-beta opponent on a plain 8×8 board.
//!
//! ## Overview
//!
//! - [`rules::Game`] owns the board and the committed-move record and answers every rules
//!   question: legality, check, checkmate, stalemate and the draw rules
//! - [`search::SearchEngine`] picks a move for one side at a chosen [`search::Difficulty`]
//! - [`evaluation`] scores positions for the search
//!
//! ## Example
//!
//! ```rust,ignore
//! use chess_engine::{Color, Difficulty, Game, SearchEngine};
//!
//! let mut game = Game::new();
//! let e2 = "e2".parse()?;
//! let e4 = "e4".parse()?;
//! game.try_commit_move(e2, e4, None)?;
//!
//! let mut ai = SearchEngine::new(Color::Black, Difficulty::FixedDepth(2));
//! if let Some(reply) = ai.best_move(&mut game) {
//!     game.commit_move(reply.from, reply.to, None)?;
//! }
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod notation;
pub mod rules;
pub mod search;
pub mod types;

pub use board::{Board, BOARD_SIZE};
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::{evaluate, EvalBreakdown, GamePhase};
pub use notation::{move_notation, parse_coordinate_move};
pub use rules::{Game, GameRecord, PositionKey};
pub use search::{Difficulty, SearchEngine, SearchStats, TimeControl};
pub use types::*;
