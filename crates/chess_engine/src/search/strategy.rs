//! Difficulty levels and the search engine that plays them
//!
//! A [`Difficulty`] is resolved once when a [`SearchEngine`] is built; every call to
//! [`SearchEngine::best_move`] then dispatches on that enum:
//!
//! - `Random` - uniform choice among legal moves
//! - `Greedy` - biggest immediate capture (1/3/3/5/9), first found on ties
//! - `FixedDepth(n)` - alpha-beta minimax to depth `n`
//! - `IterativeDeepening` - deepening under a wall-clock budget

use instant::Instant;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::alphabeta::{search_root, SearchContext};
use super::iterative::iterative_deepening;
use super::ordering::order_moves;
use crate::constants::*;
use crate::move_gen::en_passant_victim;
use crate::rules::Game;
use crate::types::*;

/// How the AI picks its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Random,
    Greedy,
    FixedDepth(u8),
    IterativeDeepening { max_depth: u8, time_budget_ms: u64 },
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::from_time_control(TimeControl::Standard)
    }
}

impl Difficulty {
    /// Iterative deepening with the preset of a time control
    pub fn from_time_control(time_control: TimeControl) -> Self {
        Difficulty::IterativeDeepening {
            max_depth: time_control.max_depth(),
            time_budget_ms: time_control.time_budget_ms(),
        }
    }

    /// Named levels: `easy` plays randomly, `medium` searches two plies, `hard` deepens
    pub fn from_level(level: &str, time_control: TimeControl) -> Option<Self> {
        match level.trim().to_ascii_lowercase().as_str() {
            "easy" | "random" => Some(Difficulty::Random),
            "greedy" => Some(Difficulty::Greedy),
            "medium" => Some(Difficulty::FixedDepth(MEDIUM_FIXED_DEPTH)),
            "hard" => Some(Difficulty::from_time_control(time_control)),
            _ => None,
        }
    }
}

/// Time presets for the iterative deepening level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeControl {
    #[default]
    Standard,
    Blitz,
}

impl TimeControl {
    pub fn max_depth(self) -> u8 {
        match self {
            TimeControl::Standard => STANDARD_MAX_DEPTH,
            TimeControl::Blitz => BLITZ_MAX_DEPTH,
        }
    }

    pub fn time_budget_ms(self) -> u64 {
        match self {
            TimeControl::Standard => STANDARD_TIME_BUDGET_MS,
            TimeControl::Blitz => BLITZ_TIME_BUDGET_MS,
        }
    }
}

/// Counters from the most recent search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
    pub depth_completed: u8,
    pub elapsed_ms: u64,
}

/// The AI player for one color
pub struct SearchEngine {
    color: Color,
    difficulty: Difficulty,
    rng: StdRng,
    last_move: Option<Move>,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new(color: Color, difficulty: Difficulty) -> Self {
        Self::with_rng(color, difficulty, StdRng::from_os_rng())
    }

    /// Deterministic engine for reproducible games and tests
    pub fn with_seed(color: Color, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(color, difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(color: Color, difficulty: Difficulty, rng: StdRng) -> Self {
        SearchEngine {
            color,
            difficulty,
            rng,
            last_move: None,
            stats: SearchStats::default(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The move returned by the last successful [`SearchEngine::best_move`]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Choose a move for this engine's color
    ///
    /// `None` only when the color has no legal move. The board is used as scratch space
    /// and left exactly as it was.
    pub fn best_move(&mut self, game: &mut Game) -> Option<Move> {
        let start = Instant::now();
        self.stats = SearchStats::default();

        // The root search always plays for the side to move
        let prior_side = game.side_to_move;
        if prior_side != self.color {
            warn!("[AI] Asked to move for {} while {prior_side} is to move", self.color);
            game.side_to_move = self.color;
        }

        let chosen = match self.difficulty {
            Difficulty::Random => self.random_move(game),
            Difficulty::Greedy => self.greedy_move(game),
            Difficulty::FixedDepth(depth) => self.fixed_depth_move(game, depth),
            Difficulty::IterativeDeepening {
                max_depth,
                time_budget_ms,
            } => self.deepening_move(game, max_depth, time_budget_ms),
        };

        game.side_to_move = prior_side;
        self.stats.elapsed_ms = start.elapsed().as_millis() as u64;
        match chosen {
            Some(mv) => {
                info!(
                    nodes = self.stats.nodes,
                    depth = self.stats.depth_completed,
                    elapsed_ms = self.stats.elapsed_ms,
                    "[AI] {} plays {mv}",
                    self.color
                );
                self.last_move = Some(mv);
            }
            None => debug!("[AI] {} has no legal move", self.color),
        }
        chosen
    }

    fn random_move(&mut self, game: &Game) -> Option<Move> {
        game.legal_moves(self.color).choose(&mut self.rng).copied()
    }

    /// Highest immediate capture value, falling back to a random move
    fn greedy_move(&mut self, game: &Game) -> Option<Move> {
        let mut best: Option<(Move, i32)> = None;
        for mv in game.legal_moves(self.color) {
            let value = capture_value(game, mv);
            if best.map_or(true, |(_, b)| value > b) {
                best = Some((mv, value));
            }
        }
        match best {
            Some((mv, _)) => Some(mv),
            None => self.random_move(game),
        }
    }

    fn fixed_depth_move(&mut self, game: &mut Game, depth: u8) -> Option<Move> {
        let depth = depth.clamp(1, MAX_DEPTH);
        let mut ctx = SearchContext::new(self.color, None);
        let result = search_root(game, &mut ctx, depth);
        self.stats.nodes = ctx.nodes;
        self.stats.cutoffs = ctx.cutoffs;
        self.stats.depth_completed = if result.is_some() { depth } else { 0 };
        match result {
            Some(r) => Some(r.best_move),
            // The root is cut off when a draw rule already applies
            None => {
                let mut moves = game.legal_moves(game.side_to_move());
                order_moves(game, &mut moves);
                moves.first().copied()
            }
        }
    }

    fn deepening_move(&mut self, game: &mut Game, max_depth: u8, time_budget_ms: u64) -> Option<Move> {
        let mut ctx = SearchContext::new(self.color, None);
        let result = iterative_deepening(
            game,
            &mut ctx,
            max_depth,
            Duration::from_millis(time_budget_ms),
        );
        self.stats.nodes = ctx.nodes;
        self.stats.cutoffs = ctx.cutoffs;
        self.stats.depth_completed = result.depth_completed;
        result.best_move
    }
}

/// Value of the piece a move captures in pawn units, 0 for quiet moves
fn capture_value(game: &Game, mv: Move) -> i32 {
    let board = game.board();
    match board.get(mv.to) {
        Some(victim) => pawn_units(victim.kind),
        None => match board.get(mv.from) {
            Some(piece) if en_passant_victim(board, piece, mv.from, mv.to).is_some() => {
                pawn_units(PieceKind::Pawn)
            }
            _ => 0,
        },
    }
}
