//! # Chess Engine Core Types
//!
//! ## Overview
//!
//! The value types shared by the rules engine and the search. Everything here is small and `Copy`
//! so the search can clone moves and pieces freely while it mutates the board in place.
//!
//! ## Coordinates
//!
//! Squares are addressed as `(row, col)` on an abstract 8×8 grid:
//! - Row 0 is the top rank (rank 8, Black's home rank), row 7 is the bottom rank (rank 1)
//! - Column 0 is file `a`, column 7 is file `h`
//! - White pawns advance toward row 0, Black pawns toward row 7
//!
//! ## Pieces
//!
//! A [`Piece`] is its identity (kind, color) plus one mutable flag, `has_moved`, which castling and
//! the pawn double-step consult. Piece kinds are a closed enum so every rule is an exhaustive match.
//!
//! ## Game Status
//!
//! [`GameStatus`] distinguishes the ways a game can end so the host can display the reason:
//!
//! ```rust,ignore
//! match game.game_status(Color::Black) {
//!     GameStatus::Ongoing => {}
//!     GameStatus::Checkmate { winner } => println!("{winner} wins"),
//!     GameStatus::Stalemate => println!("Stalemate"),
//!     GameStatus::Draw(reason) => println!("Draw: {reason}"),
//! }
//! ```

use std::fmt;

use crate::board::BOARD_SIZE;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn advance for this color
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this color's king and rooks at the start
    #[inline]
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row holding this color's pawns at the start
    #[inline]
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row from this color's start, where its pawns promote
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// The six piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Upper-case letter used in move notation (empty for pawns)
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    /// Parse a promotion letter (`q`, `r`, `b`, `n`, either case)
    pub fn from_promotion_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A piece on the board
///
/// Owned by value by exactly one board cell. `has_moved` flips to `true` the first
/// time the piece is relocated and never flips back outside of a search undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Same piece flagged as already moved
    pub fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Unicode-free single character (upper case for White)
    pub fn symbol(&self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// A board coordinate, always in bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Build a square, `None` when outside the 8×8 grid
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Offset by a signed delta, `None` when it leaves the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Linear index 0..64, row-major from the top-left corner
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Every square, row-major
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

/// A move from one square to another
///
/// Castling is encoded as the king's two-file move; en passant as the pawn's diagonal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

/// Why a game was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    ThreefoldRepetition,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
            DrawReason::FiftyMoveRule => write!(f, "50-move rule"),
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
        }
    }
}

/// State of the game for the side about to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move has at least one legal move and no draw rule applies
    Ongoing,
    /// The side to move is in check with no legal moves
    Checkmate { winner: Color },
    /// The side to move is not in check but has no legal moves
    Stalemate,
    /// Drawn by rule
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Winning side, `None` for draws and ongoing games
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Display message for the host
    pub fn describe(&self) -> String {
        match self {
            GameStatus::Ongoing => "Game in progress".to_string(),
            GameStatus::Checkmate { winner } => format!("Checkmate, {winner} wins"),
            GameStatus::Stalemate => "Draw by stalemate".to_string(),
            GameStatus::Draw(reason) => format!("Draw by {reason}"),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn test_square_offset_leaves_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Square::new(1, 1));
    }

    #[test]
    fn test_color_directions() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.promotion_row(), 7);
        assert_eq!(Color::White.opposite(), Color::Black);
    }

    #[test]
    fn test_status_describe() {
        let mate = GameStatus::Checkmate {
            winner: Color::White,
        };
        assert!(mate.is_over());
        assert_eq!(mate.winner(), Some(Color::White));
        assert_eq!(
            GameStatus::Draw(DrawReason::FiftyMoveRule).describe(),
            "Draw by 50-move rule"
        );
        assert!(!GameStatus::Ongoing.is_over());
    }
}
