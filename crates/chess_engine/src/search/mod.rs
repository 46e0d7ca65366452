//! Move search
//!
//! This module implements the AI opponent using:
//! - Minimax with alpha-beta pruning (recursive, scoped undo per ply)
//! - Iterative deepening for time management
//! - Capture-first move ordering for better pruning
//! - Random and greedy strategies for the easier levels
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core minimax search with pruning
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Move making/unmaking and the scoped `MoveGuard`
//! - `iterative` - Iterative deepening wrapper
//! - `strategy` - `Difficulty`, `TimeControl` and the `SearchEngine` front end

mod alphabeta;
mod iterative;
mod make_unmake;
mod ordering;
mod strategy;

#[cfg(test)]
mod tests;

pub use strategy::{Difficulty, SearchEngine, SearchStats, TimeControl};
