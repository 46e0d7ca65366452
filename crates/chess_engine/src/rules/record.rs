//! Committed-move bookkeeping
//!
//! [`GameRecord`] holds what the board alone cannot tell the rules: the last committed
//! move (for en passant), how often each position has occurred (for threefold repetition)
//! and the plies since the last pawn move or capture (for the 50-move rule).
//!
//! Only committed moves touch the record. The search applies and undoes moves on the
//! board without ever recording them, so repetition counts always reflect the real game.

use std::collections::HashMap;

use crate::board::{Board, BOARD_SIZE};
use crate::types::*;

/// Canonical signature of a position for repetition detection
///
/// Two positions are the same iff every occupant, the side to move, every castling right
/// and the en-passant target file all match. `has_moved` flags only matter through the
/// castling rights they imply.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionKey {
    occupants: [Option<(PieceKind, Color)>; BOARD_SIZE * BOARD_SIZE],
    side_to_move: Color,
    /// White kingside, White queenside, Black kingside, Black queenside
    castling: [bool; 4],
    en_passant_file: Option<u8>,
}

impl PositionKey {
    pub fn new(board: &Board, side_to_move: Color, last_move: Option<Move>) -> Self {
        let mut occupants = [None; BOARD_SIZE * BOARD_SIZE];
        for (sq, piece) in board.pieces() {
            occupants[sq.index()] = Some((piece.kind, piece.color));
        }

        PositionKey {
            occupants,
            side_to_move,
            castling: [
                castling_right(board, Color::White, 7),
                castling_right(board, Color::White, 0),
                castling_right(board, Color::Black, 7),
                castling_right(board, Color::Black, 0),
            ],
            en_passant_file: en_passant_file(board, last_move),
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> [bool; 4] {
        self.castling
    }

    pub fn en_passant_file(&self) -> Option<u8> {
        self.en_passant_file
    }
}

/// King and the rook on `rook_col` both sit unmoved on their home squares
fn castling_right(board: &Board, color: Color, rook_col: u8) -> bool {
    let row = color.home_row();
    let unmoved = |col: u8, kind: PieceKind| {
        Square::new(row, col)
            .and_then(|sq| board.get(sq))
            .map(|p| p.kind == kind && p.color == color && !p.has_moved)
            .unwrap_or(false)
    };
    unmoved(4, PieceKind::King) && unmoved(rook_col, PieceKind::Rook)
}

/// File of the pawn that just double-stepped, when an enemy pawn stands beside it
fn en_passant_file(board: &Board, last_move: Option<Move>) -> Option<u8> {
    let last = last_move?;
    let pawn = board.get(last.to)?;
    if pawn.kind != PieceKind::Pawn
        || last.from.col != last.to.col
        || (last.from.row as i8 - last.to.row as i8).abs() != 2
    {
        return None;
    }
    let capturable = [-1, 1]
        .iter()
        .filter_map(|&dc| last.to.offset(0, dc))
        .filter_map(|sq| board.get(sq))
        .any(|p| p.kind == PieceKind::Pawn && p.color != pawn.color);
    capturable.then_some(last.to.col)
}

/// Bookkeeping for committed moves
#[derive(Debug, Clone, Default)]
pub struct GameRecord {
    pub(crate) last_move: Option<Move>,
    pub(crate) position_counts: HashMap<PositionKey, u32>,
    pub(crate) halfmove_clock: u32,
    /// Board counts after the last committed move, used to spot captures and promotions
    pub(crate) piece_count: usize,
    pub(crate) pawn_count: usize,
}

impl GameRecord {
    /// Fresh record with `board` counted as the first occurrence of its position
    pub fn starting_at(board: &Board, side_to_move: Color) -> Self {
        let mut record = GameRecord {
            piece_count: board.piece_count(),
            pawn_count: board.pawn_count(),
            ..GameRecord::default()
        };
        record.count_position(PositionKey::new(board, side_to_move, None));
        record
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Occurrences of `key` in the committed game so far
    pub fn occurrences(&self, key: &PositionKey) -> u32 {
        self.position_counts.get(key).copied().unwrap_or(0)
    }

    pub(crate) fn count_position(&mut self, key: PositionKey) -> u32 {
        let count = self.position_counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }
}
