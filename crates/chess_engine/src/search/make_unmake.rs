//! Move making and unmaking for search
//!
//! The search mutates the one [`Game`] it is given. [`make_move`] applies a move with
//! all of its side effects and returns an [`UndoToken`]; [`unmake_move`] consumes the
//! token and restores the exact prior state. [`MoveGuard`] pairs the two so the undo
//! runs on `Drop`, including when a pruning cutoff leaves a loop early.
//!
//! The game record's repetition counts and halfmove clock are never touched here.

use std::ops::{Deref, DerefMut};

use crate::move_gen::{castling_rook_move, en_passant_victim};
use crate::rules::Game;
use crate::types::*;

/// Information needed to undo a move
#[derive(Debug, Clone, Copy)]
pub(crate) struct UndoToken {
    mv: Move,
    /// Mover as it stood on `from`, with its prior `has_moved`
    moved: Piece,
    /// Captured piece and the square it stood on (not `to` for en passant)
    captured: Option<(Square, Piece)>,
    /// Castling rook: origin, destination and prior state
    rook: Option<(Square, Square, Piece)>,
    prior_last_move: Option<Move>,
    prior_side_to_move: Color,
}

/// Make a move on the board (returns undo information)
///
/// A pawn reaching the far row becomes a queen. Returns `None` when `from` is empty.
pub(crate) fn make_move(game: &mut Game, mv: Move) -> Option<UndoToken> {
    let board = &mut game.board;
    let moved = board.get(mv.from)?;

    let captured = match en_passant_victim(board, moved, mv.from, mv.to) {
        Some(victim) => board.take(victim).map(|p| (victim, p)),
        None => board.get(mv.to).map(|p| (mv.to, p)),
    };

    let rook = castling_rook_move(moved, mv.from, mv.to).and_then(|(rook_from, rook_to)| {
        let rook = board.take(rook_from)?;
        board.set(rook_to, Some(rook.moved()));
        Some((rook_from, rook_to, rook))
    });

    let placed = if moved.kind == PieceKind::Pawn && mv.to.row == moved.color.promotion_row() {
        Piece::new(PieceKind::Queen, moved.color).moved()
    } else {
        moved.moved()
    };
    board.set(mv.from, None);
    board.set(mv.to, Some(placed));

    let undo = UndoToken {
        mv,
        moved,
        captured,
        rook,
        prior_last_move: game.record.last_move,
        prior_side_to_move: game.side_to_move,
    };
    game.record.last_move = Some(mv);
    game.side_to_move = moved.color.opposite();
    Some(undo)
}

/// Unmake a move on the board
pub(crate) fn unmake_move(game: &mut Game, undo: UndoToken) {
    let board = &mut game.board;
    board.set(undo.mv.to, None);
    if let Some((sq, piece)) = undo.captured {
        board.set(sq, Some(piece));
    }
    board.set(undo.mv.from, Some(undo.moved));
    if let Some((rook_from, rook_to, rook)) = undo.rook {
        board.set(rook_to, None);
        board.set(rook_from, Some(rook));
    }
    game.record.last_move = undo.prior_last_move;
    game.side_to_move = undo.prior_side_to_move;
}

/// A move applied to a game, undone when the guard is dropped
pub(crate) struct MoveGuard<'a> {
    game: &'a mut Game,
    undo: Option<UndoToken>,
}

impl<'a> MoveGuard<'a> {
    pub(crate) fn apply(game: &'a mut Game, mv: Move) -> Option<Self> {
        let undo = make_move(game, mv)?;
        Some(MoveGuard {
            game,
            undo: Some(undo),
        })
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            unmake_move(self.game, undo);
        }
    }
}
