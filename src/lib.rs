//! duelchess - play against an alpha-beta chess engine in the terminal
//!
//! The rules and the AI live in [`chess_engine`]; this crate adds the pieces a program
//! around them needs: persisted settings ([`core`]) and a human-vs-AI session ([`game`]).

pub mod core;
pub mod game;

pub use crate::core::{Settings, SearchOverrides};
pub use crate::game::{GameError, GameSession, PlayedMove};
