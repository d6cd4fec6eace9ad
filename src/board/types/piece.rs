//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in value order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from its notation letter.
    ///
    /// Accepts `p n b r q k` in either case; `h` (horse) is accepted as a
    /// knight alias.
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' | 'h' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase notation letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Material value used by the greedy selector.
    ///
    /// Pawn=1, Knight=2, Bishop=3, Rook=4, Queen=5, King=6.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors (White first)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Parse an owner digit (`1` = White, `2` = Black)
    #[must_use]
    pub fn from_digit(c: char) -> Option<Color> {
        match c {
            '1' => Some(Color::White),
            '2' => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_digit(self) -> char {
        match self {
            Color::White => '1',
            Color::Black => '2',
        }
    }

    /// Row delta of a pawn step. White starts at the bottom and moves
    /// toward row 0.
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row from which a pawn may take its double first step.
    ///
    /// `rows` is at least 2 for any valid board.
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self, rows: usize) -> usize {
        match self {
            Color::White => rows - 2,
            Color::Black => 1,
        }
    }

    /// Farthest row from this color's side, where pawns promote.
    #[inline]
    #[must_use]
    pub const fn promotion_row(self, rows: usize) -> usize {
        match self {
            Color::White => 0,
            Color::Black => rows - 1,
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

/// A piece on the board: its kind and the player who owns it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Color,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, owner: Color) -> Self {
        Piece { kind, owner }
    }

    #[inline]
    #[must_use]
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    /// Parse a two-character notation token such as `q1` or `H2`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Piece> {
        let mut chars = token.chars();
        let kind = PieceKind::from_char(chars.next()?)?;
        let owner = Color::from_digit(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Piece::new(kind, owner))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.to_char(), self.owner.to_digit())
    }
}
