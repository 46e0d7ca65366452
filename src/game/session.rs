//! A game between a human and the AI
//!
//! [`GameSession`] owns the [`Game`], the AI's [`SearchEngine`] and the move log. Human
//! moves go through the validated commit; AI moves come from the search and always
//! promote to a queen. The outcome is captured the moment a move ends the game.

use chess_engine::{
    move_notation, Color, Game, GameStatus, Move, PieceKind, SearchEngine, Square,
};
use tracing::info;

use super::error::{GameError, GameResult};
use crate::core::Settings;

/// A move that was committed to the session's game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: Move,
    pub color: Color,
    /// Destination-square notation (`Nf3`, `O-O`, `e8=Q`)
    pub notation: String,
}

pub struct GameSession {
    game: Game,
    ai: SearchEngine,
    log: Vec<String>,
    outcome: Option<GameStatus>,
}

impl GameSession {
    /// New game from the starting position with the AI configured by `settings`
    pub fn new(settings: &Settings) -> Self {
        let ai = match settings.rng_seed {
            Some(seed) => SearchEngine::with_seed(settings.ai_color, settings.difficulty, seed),
            None => SearchEngine::new(settings.ai_color, settings.difficulty),
        };
        Self::with_engine(Game::new(), ai)
    }

    /// Session over an existing game
    pub fn with_engine(game: Game, ai: SearchEngine) -> Self {
        let status = game.game_status(game.side_to_move());
        GameSession {
            game,
            ai,
            log: Vec::new(),
            outcome: status.is_over().then_some(status),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn ai_color(&self) -> Color {
        self.ai.color()
    }

    pub fn human_color(&self) -> Color {
        self.ai.color().opposite()
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.ai
    }

    pub fn is_ai_turn(&self) -> bool {
        self.game.side_to_move() == self.ai.color()
    }

    /// Status for the side to move
    pub fn status(&self) -> GameStatus {
        self.outcome
            .unwrap_or_else(|| self.game.game_status(self.game.side_to_move()))
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Notation of every committed move, in order
    pub fn move_log(&self) -> &[String] {
        &self.log
    }

    /// Move log numbered by full move: `1. e4 e5 2. Nf3`
    pub fn formatted_log(&self) -> String {
        format_move_log(&self.log)
    }

    /// Back to the starting position
    pub fn reset(&mut self) {
        self.game.reset();
        self.log.clear();
        self.outcome = None;
        info!("[GAME] New game, AI plays {}", self.ai.color());
    }

    /// Validate and play the human's move
    pub fn play_human(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> GameResult<PlayedMove> {
        self.ensure_ongoing()?;
        let color = self.human_color();
        self.ensure_turn(color)?;

        let notation = self.notation_for(Move::new(from, to), promotion);
        let mv = self.game.try_commit_move(from, to, promotion)?;
        Ok(self.finish_move(mv, color, notation))
    }

    /// Let the session's AI choose and play a move
    pub fn play_ai(&mut self) -> GameResult<PlayedMove> {
        self.ensure_ongoing()?;
        let color = self.ai.color();
        self.ensure_turn(color)?;

        let mv = self
            .ai
            .best_move(&mut self.game)
            .ok_or(GameError::NoMove { color })?;
        self.commit_engine_move(mv, color)
    }

    /// Let any engine play for its color, e.g. the second side of a self-play game
    pub fn play_engine(&mut self, engine: &mut SearchEngine) -> GameResult<PlayedMove> {
        self.ensure_ongoing()?;
        let color = engine.color();
        self.ensure_turn(color)?;

        let mv = engine
            .best_move(&mut self.game)
            .ok_or(GameError::NoMove { color })?;
        self.commit_engine_move(mv, color)
    }

    fn commit_engine_move(&mut self, mv: Move, color: Color) -> GameResult<PlayedMove> {
        let notation = self.notation_for(mv, None);
        self.game.commit_move(mv.from, mv.to, None)?;
        Ok(self.finish_move(mv, color, notation))
    }

    fn ensure_ongoing(&self) -> GameResult<()> {
        let status = self.status();
        if status.is_over() {
            return Err(GameError::GameOver { status });
        }
        Ok(())
    }

    fn ensure_turn(&self, requested: Color) -> GameResult<()> {
        let to_move = self.game.side_to_move();
        if requested != to_move {
            return Err(GameError::OutOfTurn { requested, to_move });
        }
        Ok(())
    }

    /// Notation of a move about to be played, queen promotion when `promotion` is `None`
    fn notation_for(&self, mv: Move, promotion: Option<PieceKind>) -> String {
        let Some(piece) = self.game.board().get(mv.from) else {
            return mv.to_string();
        };
        let promotion = self
            .game
            .is_pawn_promotion(piece, mv.to.row)
            .then(|| promotion.unwrap_or(PieceKind::Queen));
        move_notation(piece.kind, mv, promotion)
    }

    fn finish_move(&mut self, mv: Move, color: Color, notation: String) -> PlayedMove {
        info!("[GAME] {color} played {notation}");
        self.log.push(notation.clone());

        let status = self.game.game_status(self.game.side_to_move());
        if status.is_over() {
            info!("[GAME] {status}");
            self.outcome = Some(status);
        }
        PlayedMove {
            mv,
            color,
            notation,
        }
    }
}

/// Number a flat list of moves by full move, White first
pub fn format_move_log(moves: &[String]) -> String {
    moves
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
}
