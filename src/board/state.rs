use super::error::{BoardError, LayoutError};
use super::layout::Preset;
use super::{Color, Piece, PieceKind, Square};

/// A rectangular grid of cells, each empty or holding exactly one piece.
///
/// Row 0 is the top of the board. White's pieces start at the bottom and its
/// pawns advance toward row 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<Option<Piece>>,
}

impl Board {
    /// Smallest playable number of rows or columns.
    pub const MIN_DIMENSION: usize = 2;

    /// The standard 8x8 starting position.
    pub fn new() -> Self {
        Preset::Standard.board()
    }

    /// An empty board of the given size.
    pub fn empty(rows: usize, cols: usize) -> Result<Self, LayoutError> {
        if rows < Self::MIN_DIMENSION || cols < Self::MIN_DIMENSION {
            return Err(LayoutError::TooSmall { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<Option<Piece>>())
            .ok_or(LayoutError::TooLarge { rows, cols })?;
        Ok(Board {
            rows,
            cols,
            cells: vec![None; len],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.0 < self.rows && sq.1 < self.cols
    }

    pub(crate) fn check_bounds(&self, sq: Square) -> Result<(), BoardError> {
        if self.contains(sq) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                square: sq,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    #[inline]
    fn index(&self, sq: Square) -> usize {
        sq.0 * self.cols + sq.1
    }

    /// The occupant of a square, or `OutOfBounds` if the square is not on
    /// this board.
    pub fn piece_at(&self, sq: Square) -> Result<Option<Piece>, BoardError> {
        self.check_bounds(sq)?;
        Ok(self.cells[self.index(sq)])
    }

    /// Occupant lookup for squares the caller already knows are in bounds.
    /// Off-board squares read as empty.
    #[inline]
    pub(crate) fn cell(&self, sq: Square) -> Option<Piece> {
        if self.contains(sq) {
            self.cells[self.index(sq)]
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, sq: Square, contents: Option<Piece>) {
        let idx = self.index(sq);
        self.cells[idx] = contents;
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cell(sq).is_none()
    }

    /// Place a piece, replacing whatever was there. Returns the old occupant.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) -> Result<Option<Piece>, BoardError> {
        self.check_bounds(sq)?;
        let old = self.cell(sq);
        self.set_cell(sq, Some(piece));
        Ok(old)
    }

    /// Empty a square. Returns the old occupant.
    pub fn clear(&mut self, sq: Square) -> Result<Option<Piece>, BoardError> {
        self.check_bounds(sq)?;
        let old = self.cell(sq);
        self.set_cell(sq, None);
        Ok(old)
    }

    /// Shift `sq` by a delta, returning the result only if it is on the board.
    #[inline]
    pub fn offset(&self, sq: Square, d_row: isize, d_col: isize) -> Option<Square> {
        sq.offset(d_row, d_col).filter(|&to| self.contains(to))
    }

    /// All squares, row by row.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Square(r, c)))
    }

    /// Every piece owned by `color` with its square.
    pub fn pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        self.squares()
            .filter_map(|sq| self.cell(sq).map(|p| (sq, p)))
            .filter(|(_, p)| p.owner == color)
            .collect()
    }

    /// Squares holding a king of `color`. Custom layouts may have none or
    /// several.
    pub fn king_squares(&self, color: Color) -> Vec<Square> {
        self.squares()
            .filter(|&sq| self.cell(sq) == Some(Piece::new(PieceKind::King, color)))
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
