//! Rules engine
//!
//! [`Game`] couples a [`Board`] with its [`GameRecord`] and answers every rules question
//! the host and the search ask:
//!
//! - Legality: pseudo-legal shape check followed by the self-check filter
//! - Check and square attacks
//! - Termination: checkmate, stalemate, threefold repetition, the 50-move rule and bare kings
//! - Committing moves: castling rook relocation, en-passant removal, promotion, bookkeeping
//!
//! Legality is a plain `bool`. Degenerate boards (a missing king) are reported as check
//! with no legal moves rather than as errors. Only [`Game::try_commit_move`] and
//! [`Game::promote`] return `Result`, because the host passes them untrusted input.

mod record;


pub use record::{GameRecord, PositionKey};

use tracing::{debug, warn};

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::{self, castling_rook_move, en_passant_victim};
use crate::types::*;

/// Plies without a pawn move or capture that draw the game
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Occurrences of one position that draw the game
pub const REPETITION_LIMIT: u32 = 3;

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) record: GameRecord,
    pub(crate) side_to_move: Color,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        Game::from_board(Board::standard(), Color::White)
    }

    /// Start from an arbitrary position, counted once for repetition
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let record = GameRecord::starting_at(&board, side_to_move);
        Game {
            board,
            record,
            side_to_move,
        }
    }

    pub fn reset(&mut self) {
        *self = Game::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Most recently committed move
    pub fn last_move(&self) -> Option<Move> {
        self.record.last_move
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.record.halfmove_clock
    }

    // ------------------------------------------------------------------
    // Legality
    // ------------------------------------------------------------------

    /// Movement pattern only; the mover's king may be left in check
    pub fn is_pseudo_legal(&self, piece: Piece, from: Square, to: Square) -> bool {
        move_gen::is_pseudo_legal(&self.board, self.record.last_move, piece, from, to)
    }

    /// Full legality of moving `piece` (standing on `from`) to `to`
    ///
    /// Only the kind and color of `piece` are trusted; the move is judged with the
    /// board's own piece, so a stale `has_moved` cannot unlock castling.
    pub fn is_legal_move(&self, piece: Piece, from: Square, to: Square) -> bool {
        let piece = match self.board.get(from) {
            Some(p) if p.kind == piece.kind && p.color == piece.color => p,
            _ => return false,
        };
        self.is_pseudo_legal(piece, from, to) && !self.leaves_king_in_check(piece, from, to)
    }

    /// Play the move on a scratch copy and test the mover's king
    fn leaves_king_in_check(&self, piece: Piece, from: Square, to: Square) -> bool {
        king_in_check(&self.scratch_after(piece, from, to), piece.color)
    }

    /// Whether playing `mv` would put the opponent's king in check
    pub fn gives_check(&self, mv: Move) -> bool {
        let Some(piece) = self.board.get(mv.from) else {
            return false;
        };
        let mut after = self.scratch_after(piece, mv.from, mv.to);
        // Search always promotes to a queen
        if self.is_pawn_promotion(piece, mv.to.row) {
            after.set(mv.to, Some(Piece::new(PieceKind::Queen, piece.color).moved()));
        }
        after
            .find_king(piece.color.opposite())
            .is_some_and(|king| move_gen::is_square_attacked(&after, king, piece.color))
    }

    /// Copy of the board with the move's piece relocation and side effects applied
    fn scratch_after(&self, piece: Piece, from: Square, to: Square) -> Board {
        let mut scratch = self.board.clone();
        if let Some(victim) = en_passant_victim(&scratch, piece, from, to) {
            scratch.set(victim, None);
        }
        if let Some((rook_from, rook_to)) = castling_rook_move(piece, from, to) {
            let rook = scratch.take(rook_from);
            scratch.set(rook_to, rook);
        }
        scratch.set(from, None);
        scratch.set(to, Some(piece));
        scratch
    }

    /// Every legal move for `color`, in board order
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut targets = Vec::with_capacity(28);
        for (from, piece) in self.board.pieces_of(color) {
            targets.clear();
            move_gen::candidate_targets(&self.board, piece, from, &mut targets);
            moves.extend(
                targets
                    .iter()
                    .filter(|&&to| self.is_legal_move(piece, from, to))
                    .map(|&to| Move::new(from, to)),
            );
        }
        moves
    }

    /// Legal destinations of the piece on `from` (empty when the square is empty)
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.board.get(from) else {
            return Vec::new();
        };
        let mut targets = Vec::with_capacity(28);
        move_gen::candidate_targets(&self.board, piece, from, &mut targets);
        targets.retain(|&to| self.is_legal_move(piece, from, to));
        targets
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        let mut targets = Vec::with_capacity(28);
        for (from, piece) in self.board.pieces_of(color) {
            targets.clear();
            move_gen::candidate_targets(&self.board, piece, from, &mut targets);
            if targets.iter().any(|&to| self.is_legal_move(piece, from, to)) {
                return true;
            }
        }
        false
    }

    // ------------------------------------------------------------------
    // Check and termination
    // ------------------------------------------------------------------

    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        move_gen::is_square_attacked(&self.board, sq, by)
    }

    /// A missing king counts as check
    pub fn is_king_in_check(&self, color: Color) -> bool {
        king_in_check(&self.board, color)
    }

    /// Status for `color`, the side about to move
    ///
    /// Draw rules are tested before move enumeration: repetition, the 50-move rule,
    /// then bare kings.
    pub fn game_status(&self, color: Color) -> GameStatus {
        if let Some(reason) = self.draw_by_rule() {
            return GameStatus::Draw(reason);
        }
        if self.has_legal_move(color) {
            return GameStatus::Ongoing;
        }
        if self.is_king_in_check(color) {
            GameStatus::Checkmate {
                winner: color.opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Draw rules that apply regardless of the moves available
    pub fn draw_by_rule(&self) -> Option<DrawReason> {
        if self.position_count() >= REPETITION_LIMIT {
            Some(DrawReason::ThreefoldRepetition)
        } else if self.record.halfmove_clock >= FIFTY_MOVE_PLIES {
            Some(DrawReason::FiftyMoveRule)
        } else if self.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else {
            None
        }
    }

    pub fn is_game_over(&self, color: Color) -> bool {
        self.game_status(color).is_over()
    }

    /// Only the two kings remain
    pub fn is_insufficient_material(&self) -> bool {
        let mut pieces = self.board.pieces();
        match (pieces.next(), pieces.next(), pieces.next()) {
            (Some((_, a)), Some((_, b)), None) => {
                a.kind == PieceKind::King && b.kind == PieceKind::King
            }
            _ => false,
        }
    }

    pub fn is_pawn_promotion(&self, piece: Piece, to_row: u8) -> bool {
        piece.kind == PieceKind::Pawn && to_row == piece.color.promotion_row()
    }

    // ------------------------------------------------------------------
    // Committing moves
    // ------------------------------------------------------------------

    /// Relocate the piece on `from` to `to` with every board side effect
    ///
    /// Moves the castling rook, removes a pawn captured en passant and marks the moved
    /// pieces. Returns the captured piece. Legality is not checked.
    pub fn apply_commit_effects(&mut self, from: Square, to: Square) -> Option<Piece> {
        let Some(piece) = self.board.get(from) else {
            warn!("[RULES] No piece on {from} to move to {to}");
            return None;
        };

        let captured = match en_passant_victim(&self.board, piece, from, to) {
            Some(victim) => self.board.take(victim),
            None => self.board.get(to),
        };

        if let Some((rook_from, rook_to)) = castling_rook_move(piece, from, to) {
            let rook = self.board.take(rook_from).map(Piece::moved);
            self.board.set(rook_to, rook);
        }

        self.board.set(from, None);
        self.board.set(to, Some(piece.moved()));
        captured
    }

    /// Replace the pawn on `at` with a `kind` of the same color
    ///
    /// The pawn must already stand on its promotion rank.
    pub fn promote(&mut self, at: Square, kind: PieceKind) -> ChessEngineResult<()> {
        if !PieceKind::PROMOTIONS.contains(&kind) {
            return Err(ChessEngineError::InvalidPromotion { kind });
        }
        let piece = self
            .board
            .get(at)
            .ok_or_else(|| ChessEngineError::NoPieceAtSquare {
                square: at.to_string(),
            })?;
        if !self.is_pawn_promotion(piece, at.row) {
            return Err(ChessEngineError::NotPromotable {
                square: at.to_string(),
            });
        }
        self.board.set(at, Some(Piece::new(kind, piece.color).moved()));
        Ok(())
    }

    /// Commit a move without validating it
    ///
    /// Applies the board side effects, promotes a pawn reaching the far row (to a queen
    /// when `promotion` is `None`) and records the move. Returns the captured piece.
    pub fn commit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessEngineResult<Option<Piece>> {
        if let Some(kind) = promotion {
            if !PieceKind::PROMOTIONS.contains(&kind) {
                return Err(ChessEngineError::InvalidPromotion { kind });
            }
        }
        let piece = self
            .board
            .get(from)
            .ok_or_else(|| ChessEngineError::NoPieceAtSquare {
                square: from.to_string(),
            })?;

        let captured = self.apply_commit_effects(from, to);
        if self.is_pawn_promotion(piece, to.row) {
            self.promote(to, promotion.unwrap_or(PieceKind::Queen))?;
        }
        self.record_move(from, to);
        Ok(captured)
    }

    /// Validate and commit a move for the side to move
    pub fn try_commit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessEngineResult<Move> {
        let status = self.game_status(self.side_to_move);
        if status.is_over() {
            return Err(ChessEngineError::GameOver { status });
        }
        let piece = self
            .board
            .get(from)
            .ok_or_else(|| ChessEngineError::NoPieceAtSquare {
                square: from.to_string(),
            })?;
        if piece.color != self.side_to_move {
            return Err(ChessEngineError::WrongPieceColor {
                square: from.to_string(),
                color: piece.color,
            });
        }
        if !self.is_legal_move(piece, from, to) {
            return Err(ChessEngineError::IllegalMove {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.commit_move(from, to, promotion)?;
        Ok(Move::new(from, to))
    }

    /// Bookkeeping for a move already applied to the board
    ///
    /// A pawn on `to`, or fewer pawns than before (promotion), marks a pawn move; fewer
    /// pieces than before marks a capture. Either resets the halfmove clock.
    pub fn record_move(&mut self, from: Square, to: Square) {
        let pieces = self.board.piece_count();
        let pawns = self.board.pawn_count();
        let mover = self.board.get(to);

        let pawn_move =
            mover.is_some_and(|p| p.kind == PieceKind::Pawn) || pawns < self.record.pawn_count;
        let capture = pieces < self.record.piece_count;

        if pawn_move || capture {
            self.record.halfmove_clock = 0;
        } else {
            self.record.halfmove_clock += 1;
        }
        self.record.piece_count = pieces;
        self.record.pawn_count = pawns;
        self.record.last_move = Some(Move::new(from, to));
        self.side_to_move = match mover {
            Some(p) => p.color.opposite(),
            None => self.side_to_move.opposite(),
        };

        let occurrences = self.record.count_position(self.position_key());
        debug!(
            "[RULES] Recorded {from}{to}: halfmove_clock={}, occurrences={occurrences}",
            self.record.halfmove_clock
        );
    }

    /// Signature of the current position
    pub fn position_key(&self) -> PositionKey {
        PositionKey::new(&self.board, self.side_to_move, self.record.last_move)
    }

    /// Committed occurrences of the current position
    pub fn position_count(&self) -> u32 {
        self.record.occurrences(&self.position_key())
    }
}

fn king_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => move_gen::is_square_attacked(board, king, color.opposite()),
        None => {
            warn!("[RULES] No {color} king on the board");
            true
        }
    }
}
