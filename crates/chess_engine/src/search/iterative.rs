//! Iterative deepening search
//!
//! Runs the root search at depth 1, 2, 3, … up to a maximum, keeping the best move of the
//! deepest depth that finished before the wall-clock budget ran out. The budget is
//! advisory: it is checked between sibling moves, never inside a single evaluation.
//!
//! Fallback order when no depth completes: the partial depth-1 result, then the first
//! ordered legal move.

use instant::Instant;
use std::time::Duration;
use tracing::debug;

use super::alphabeta::{search_root, SearchContext};
use super::ordering::order_moves;
use crate::constants::MAX_DEPTH;
use crate::rules::Game;
use crate::types::*;

/// Outcome of an iterative deepening run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeepeningResult {
    pub best_move: Option<Move>,
    pub depth_completed: u8,
}

/// Iterative deepening search
pub(crate) fn iterative_deepening(
    game: &mut Game,
    ctx: &mut SearchContext,
    max_depth: u8,
    time_budget: Duration,
) -> DeepeningResult {
    let start_time = Instant::now();
    ctx.deadline = Some(start_time + time_budget);

    let mut best_move = None;
    let mut depth_completed = 0;

    for depth in 1..=max_depth.clamp(1, MAX_DEPTH) {
        ctx.timed_out = false;
        let result = search_root(game, ctx, depth);

        if ctx.timed_out {
            if best_move.is_none() {
                best_move = result.map(|r| r.best_move);
            }
            debug!("[AI] Depth {depth} abandoned after {:?}", start_time.elapsed());
            break;
        }

        let Some(result) = result else {
            break;
        };
        best_move = Some(result.best_move);
        depth_completed = depth;
        debug!(
            depth,
            score = result.score,
            nodes = ctx.nodes,
            "[AI] Completed depth {depth}: {}",
            result.best_move
        );

        if start_time.elapsed() >= time_budget {
            break;
        }
    }

    // If no move found, take the first ordered legal move
    if best_move.is_none() {
        let mut moves = game.legal_moves(game.side_to_move());
        order_moves(game, &mut moves);
        best_move = moves.first().copied();
    }

    DeepeningResult {
        best_move,
        depth_completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_legal_move_from_start() {
        let mut game = Game::new();
        let mut ctx = SearchContext::new(Color::White, None);
        let result = iterative_deepening(&mut game, &mut ctx, 2, Duration::from_secs(30));

        let mv = result.best_move.unwrap();
        assert!(game.legal_moves(Color::White).contains(&mv));
        assert_eq!(result.depth_completed, 2);
        assert!(ctx.nodes > 0);
    }

    #[test]
    fn test_zero_budget_still_returns_a_move() {
        let mut game = Game::new();
        let mut ctx = SearchContext::new(Color::White, None);
        let result = iterative_deepening(&mut game, &mut ctx, 4, Duration::ZERO);

        let mv = result.best_move.unwrap();
        assert!(game.legal_moves(Color::White).contains(&mv));
        assert!(result.depth_completed <= 1);
    }
}
