//! Board representation
//!
//! An 8×8 grid of optional pieces. The board knows nothing about the rules; it offers
//! get/set by coordinate plus a few queries the rules and evaluator use everywhere:
//! - Standard starting setup
//! - Iteration over occupied squares
//! - King lookup and piece counting

use std::fmt;

use crate::types::*;

/// Width and height of the board
pub const BOARD_SIZE: usize = 8;

/// Back-rank order from file `a` to file `h`
const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting position
    pub fn standard() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Board holding exactly the listed pieces, all unmoved
    ///
    /// Squares are `(row, col)`; out-of-range entries are skipped.
    pub fn from_pieces(pieces: &[(PieceKind, Color, (u8, u8))]) -> Self {
        let mut board = Board::empty();
        for &(kind, color, (row, col)) in pieces {
            if let Some(sq) = Square::new(row, col) {
                board.set(sq, Some(Piece::new(kind, color)));
            }
        }
        board
    }

    /// Put every piece back on its starting square
    pub fn reset(&mut self) {
        self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for color in [Color::White, Color::Black] {
            let home = color.home_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                self.cells[home][col] = Some(Piece::new(*kind, color));
                self.cells[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
    }

    #[inline]
    pub fn board_size() -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row as usize][sq.col as usize]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row as usize][sq.col as usize] = piece;
    }

    /// Remove and return the occupant of a square
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row as usize][sq.col as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// All occupied squares, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Occupied squares of one color, row-major
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Square of the king of `color`, if it is on the board
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn pawn_count(&self) -> usize {
        self.pieces()
            .filter(|(_, p)| p.kind == PieceKind::Pawn)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let c = self.cells[row][col].map(|p| p.symbol()).unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "{self}")?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_standard_setup() {
        let board = Board::standard();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.pawn_count(), 16);
        assert_eq!(board.find_king(Color::White), Some(sq(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(sq(0, 4)));
        assert_eq!(
            board.get(sq(7, 3)).map(|p| p.kind),
            Some(PieceKind::Queen),
            "White queen starts on d1"
        );
        assert!(board.pieces().all(|(_, p)| !p.has_moved));
    }

    #[test]
    fn test_set_and_take() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::Black);
        board.set(sq(4, 4), Some(knight));
        assert_eq!(board.get(sq(4, 4)), Some(knight));
        assert_eq!(board.take(sq(4, 4)), Some(knight));
        assert!(board.is_empty(sq(4, 4)));
    }

    #[test]
    fn test_display_top_rank_is_black() {
        let text = Board::standard().to_string();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("8  r n b q k b n r"));
    }
}
