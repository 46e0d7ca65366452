//! Square names and destination-square move notation
//!
//! Only the simple notation the host displays is supported:
//! - Squares as file letter + rank number (`e4`)
//! - Moves as piece letter + destination (`Nf3`, `e4`), castling as `O-O` / `O-O-O`,
//!   promotion suffixed with `=Q`
//! - Coordinate input for typed moves (`e2e4`, `e7e8q`)
//!
//! Full SAN (disambiguation, capture marks, check suffixes) is not implemented.

use std::fmt;
use std::str::FromStr;

use crate::board::BOARD_SIZE;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

impl Square {
    /// File letter, `a`..=`h`
    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank number, 1..=8 (row 7 is rank 1)
    pub fn rank_number(self) -> u8 {
        BOARD_SIZE as u8 - self.row
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ChessEngineError::ParseSquare {
            input: s.to_string(),
        };
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };
        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(err());
        }
        let col = file as u8 - b'a';
        let row = BOARD_SIZE as u8 - (rank as u8 - b'0');
        Square::new(row, col).ok_or_else(err)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parse a coordinate move such as `e2e4` or `e7e8q`
pub fn parse_coordinate_move(input: &str) -> ChessEngineResult<(Move, Option<PieceKind>)> {
    let text = input.trim();
    let err = || ChessEngineError::ParseMove {
        input: input.to_string(),
    };
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(err());
    }
    let from: Square = text[0..2].parse().map_err(|_| err())?;
    let to: Square = text[2..4].parse().map_err(|_| err())?;
    let promotion = match text[4..].chars().next() {
        Some(c) => Some(PieceKind::from_promotion_char(c).ok_or_else(err)?),
        None => None,
    };
    Ok((Move::new(from, to), promotion))
}

/// Destination-square notation for a move about to be (or just) played by `kind`
pub fn move_notation(kind: PieceKind, mv: Move, promotion: Option<PieceKind>) -> String {
    if kind == PieceKind::King && (mv.to.col as i8 - mv.from.col as i8).abs() == 2 {
        return if mv.to.col > mv.from.col {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }
    let mut text = format!("{}{}", kind.letter(), mv.to);
    if let Some(promoted) = promotion {
        text.push('=');
        text.push_str(promoted.letter());
    }
    text
}
