//! Board layouts in short notation, plus the bundled presets.
//!
//! A layout lists rows from the top of the board (row 0, Black's side) down,
//! separated by `/` or newlines. Each row is a whitespace-separated list of
//! cells: a piece letter followed by an owner digit (`r2`, `q1`, `h2`) or
//! `.` / `--` for an empty cell.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::LayoutError;
use super::{Board, Piece, Square};

const STANDARD: &str = "r2 n2 b2 q2 k2 b2 n2 r2 / p2 p2 p2 p2 p2 p2 p2 p2 \
    / . . . . . . . . / . . . . . . . . / . . . . . . . . / . . . . . . . . \
    / p1 p1 p1 p1 p1 p1 p1 p1 / r1 n1 b1 q1 k1 b1 n1 r1";

const LOS_ALAMOS: &str = "r2 n2 q2 k2 n2 r2 / p2 p2 p2 p2 p2 p2 / . . . . . . \
    / . . . . . . / p1 p1 p1 p1 p1 p1 / r1 n1 q1 k1 n1 r1";

const GARDNER: &str = "r2 n2 b2 q2 k2 / p2 p2 p2 p2 p2 / . . . . . \
    / p1 p1 p1 p1 p1 / r1 n1 b1 q1 k1";

const SILVERMAN: &str = "r2 q2 k2 r2 / p2 p2 p2 p2 / . . . . / p1 p1 p1 p1 / r1 q1 k1 r1";

/// Bundled starting layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Preset {
    /// 8x8 orthodox start
    Standard,
    /// 6x6, no bishops
    LosAlamos,
    /// 5x5 minichess
    Gardner,
    /// 5 rows by 4 columns, rooks queen and king only
    Silverman,
}

static PRESETS_BY_NAME: Lazy<HashMap<&'static str, Preset>> = Lazy::new(|| {
    Preset::ALL
        .iter()
        .flat_map(|&p| p.aliases().iter().map(move |&name| (name, p)))
        .collect()
});

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Standard,
        Preset::LosAlamos,
        Preset::Gardner,
        Preset::Silverman,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Standard => "standard",
            Preset::LosAlamos => "los-alamos",
            Preset::Gardner => "gardner",
            Preset::Silverman => "silverman",
        }
    }

    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Preset::Standard => &["standard", "8x8"],
            Preset::LosAlamos => &["los-alamos", "losalamos", "6x6"],
            Preset::Gardner => &["gardner", "5x5"],
            Preset::Silverman => &["silverman", "5x4", "4x5"],
        }
    }

    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Preset::Standard => STANDARD,
            Preset::LosAlamos => LOS_ALAMOS,
            Preset::Gardner => GARDNER,
            Preset::Silverman => SILVERMAN,
        }
    }

    /// Build the starting board for this preset.
    #[must_use]
    pub fn board(self) -> Board {
        Board::from_notation(self.notation())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        PRESETS_BY_NAME
            .get(key.as_str())
            .copied()
            .ok_or(LayoutError::UnknownPreset {
                name: s.to_string(),
            })
    }
}

/// Where a game's starting position comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    Preset(Preset),
    Custom(Board),
}

impl Layout {
    /// Parse a caller-supplied grid in short notation.
    pub fn custom(notation: &str) -> Result<Self, LayoutError> {
        Board::try_from_notation(notation).map(Layout::Custom)
    }

    #[must_use]
    pub fn board(&self) -> Board {
        match self {
            Layout::Preset(preset) => preset.board(),
            Layout::Custom(board) => board.clone(),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Preset(Preset::Standard)
    }
}

impl From<Preset> for Layout {
    fn from(preset: Preset) -> Self {
        Layout::Preset(preset)
    }
}

impl From<Board> for Layout {
    fn from(board: Board) -> Self {
        Layout::Custom(board)
    }
}

fn parse_cell(token: &str, row: usize, col: usize) -> Result<Option<Piece>, LayoutError> {
    match token {
        "." | "--" => Ok(None),
        _ => Piece::from_token(token)
            .map(Some)
            .ok_or_else(|| LayoutError::InvalidToken {
                row,
                col,
                token: token.to_string(),
            }),
    }
}

impl Board {
    /// Parse a board from short notation.
    ///
    /// Returns an error if a token is invalid, rows differ in length, or the
    /// grid is smaller than 2x2.
    pub fn try_from_notation(notation: &str) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<&str>> = notation
            .split(['/', '\n'])
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|tokens| !tokens.is_empty())
            .collect();

        let cols = rows.first().map_or(0, Vec::len);
        let mut board = Board::empty(rows.len(), cols)?;

        for (r, tokens) in rows.iter().enumerate() {
            if tokens.len() != cols {
                return Err(LayoutError::RaggedRow {
                    row: r,
                    expected: cols,
                    found: tokens.len(),
                });
            }
            for (c, token) in tokens.iter().enumerate() {
                let contents = parse_cell(token, r, c)?;
                board.set_cell(Square(r, c), contents);
            }
        }

        Ok(board)
    }

    /// Parse a board from short notation.
    ///
    /// # Panics
    ///
    /// Panics if the notation is invalid. Use [`Board::try_from_notation`]
    /// for input that is not known to be well formed.
    #[must_use]
    pub fn from_notation(notation: &str) -> Self {
        Self::try_from_notation(notation).expect("Invalid layout notation")
    }

    /// Render the board in the same notation `try_from_notation` accepts.
    #[must_use]
    pub fn to_notation(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(self.rows);
        for r in 0..self.rows {
            let row: Vec<String> = (0..self.cols)
                .map(|c| match self.cell(Square(r, c)) {
                    Some(piece) => piece.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            rows.push(row.join(" "));
        }
        rows.join(" / ")
    }
}
