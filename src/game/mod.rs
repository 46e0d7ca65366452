//! Game module - a human playing the AI
//!
//! - `session` - [`GameSession`] coordinates turns, the move log and the outcome
//! - `error` - [`GameError`] for moves refused at the session level

pub mod error;
pub mod session;

pub use error::{GameError, GameResult};
pub use session::{format_move_log, GameSession, PlayedMove};
