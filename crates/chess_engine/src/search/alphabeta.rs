//! Minimax with alpha-beta pruning
//!
//! Plain recursive minimax with an explicit maximizing flag: the AI's plies maximize,
//! the opponent's minimize, and every leaf is scored by [`evaluate`] from the AI's
//! point of view. Each child is searched under a [`MoveGuard`], so the board is
//! restored however the loop exits.
//!
//! A wall-clock deadline, when set, is checked between sibling moves. Once it passes
//! the search unwinds with `timed_out` set and the partial result must not be trusted.

use instant::Instant;
use tracing::trace;

use super::make_unmake::MoveGuard;
use super::ordering::order_moves;
use crate::constants::SCORE_INFINITY;
use crate::evaluation::evaluate;
use crate::rules::Game;
use crate::types::*;

/// Per-search state threaded through the recursion
pub(crate) struct SearchContext {
    pub ai_color: Color,
    pub deadline: Option<Instant>,
    /// Disabled only to compare pruned and unpruned results
    pub prune: bool,
    pub timed_out: bool,
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchContext {
    pub(crate) fn new(ai_color: Color, deadline: Option<Instant>) -> Self {
        SearchContext {
            ai_color,
            deadline,
            prune: true,
            timed_out: false,
            nodes: 0,
            cutoffs: 0,
        }
    }

    fn out_of_time(&mut self) -> bool {
        if !self.timed_out && self.deadline.is_some_and(|d| Instant::now() >= d) {
            self.timed_out = true;
        }
        self.timed_out
    }
}

/// Best move found at the root and its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RootResult {
    pub best_move: Move,
    pub score: i32,
}

/// Ordered legal moves for the side to move, empty when the position is terminal
fn expand(game: &Game) -> Vec<Move> {
    if game.draw_by_rule().is_some() {
        return Vec::new();
    }
    let mut moves = game.legal_moves(game.side_to_move());
    order_moves(game, &mut moves);
    moves
}

/// Minimax score of the current position searched `depth` plies deep
pub(crate) fn minimax(
    game: &mut Game,
    ctx: &mut SearchContext,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    ctx.nodes += 1;
    if depth == 0 {
        return evaluate(game, ctx.ai_color);
    }
    let moves = expand(game);
    if moves.is_empty() {
        return evaluate(game, ctx.ai_color);
    }

    let mut best = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };

    for (i, mv) in moves.into_iter().enumerate() {
        if i > 0 && ctx.out_of_time() {
            break;
        }
        let Some(mut child) = MoveGuard::apply(game, mv) else {
            continue;
        };
        let score = minimax(&mut child, ctx, depth - 1, !maximizing, alpha, beta);
        drop(child);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if ctx.prune && beta <= alpha {
            ctx.cutoffs += 1;
            trace!("[AI] Cutoff at depth {depth} after {mv}");
            break;
        }
    }
    best
}

/// Search every root move of the AI and return the best one
///
/// `None` when the AI has no legal move. The AI is always the maximizing side here.
pub(crate) fn search_root(game: &mut Game, ctx: &mut SearchContext, depth: u8) -> Option<RootResult> {
    let moves = expand(game);
    let mut best: Option<RootResult> = None;
    let mut alpha = -SCORE_INFINITY;
    let beta = SCORE_INFINITY;

    for (i, mv) in moves.into_iter().enumerate() {
        if i > 0 && ctx.out_of_time() {
            break;
        }
        let Some(mut child) = MoveGuard::apply(game, mv) else {
            continue;
        };
        let score = minimax(&mut child, ctx, depth.saturating_sub(1), false, alpha, beta);
        drop(child);

        if best.map_or(true, |b| score > b.score) {
            best = Some(RootResult {
                best_move: mv,
                score,
            });
        }
        if ctx.prune {
            alpha = alpha.max(score);
        }
    }
    best
}
