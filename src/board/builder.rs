//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than writing layout
//! notation.
//!
//! # Example
//! ```
//! use mini_chess::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .dimensions(5, 4)
//!     .piece(Square(4, 2), Color::White, PieceKind::King)
//!     .piece(Square(0, 2), Color::Black, PieceKind::King)
//!     .piece(Square(3, 0), Color::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::error::LayoutError;
use super::layout::Preset;
use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    rows: usize,
    cols: usize,
    pieces: Vec<(Square, Piece)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty 8x8 board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            rows: 8,
            cols: 8,
            pieces: Vec::new(),
        }
    }

    /// Create a builder starting from a bundled preset.
    #[must_use]
    pub fn from_preset(preset: Preset) -> Self {
        let board = preset.board();
        BoardBuilder {
            rows: board.rows(),
            cols: board.cols(),
            pieces: board
                .squares()
                .filter_map(|sq| board.cell(sq).map(|p| (sq, p)))
                .collect(),
        }
    }

    /// Set the number of rows and columns.
    #[must_use]
    pub const fn dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(kind, color)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    ///
    /// Fails if the dimensions are below 2x2. Pieces placed outside the
    /// dimensions are dropped.
    pub fn build(self) -> Result<Board, LayoutError> {
        let mut board = Board::empty(self.rows, self.cols)?;

        for (square, piece) in self.pieces {
            if board.contains(square) {
                board.set_cell(square, Some(piece));
            }
        }

        Ok(board)
    }
}
