use std::ops::{Deref, DerefMut};

use super::error::BoardError;
use super::{Board, Piece, PieceKind, Square};

/// A move applied to a board that is undone when the guard drops.
///
/// Restores the original contents of both squares, including a captured
/// piece on the destination, on every exit path (early return, `?`, panic).
struct TemporaryMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    from_contents: Option<Piece>,
    to_contents: Option<Piece>,
}

impl<'a> TemporaryMove<'a> {
    fn apply(board: &'a mut Board, from: Square, to: Square) -> Self {
        let from_contents = board.cell(from);
        let to_contents = board.cell(to);
        board.set_cell(to, from_contents);
        board.set_cell(from, None);
        TemporaryMove {
            board,
            from,
            to,
            from_contents,
            to_contents,
        }
    }
}

impl Drop for TemporaryMove<'_> {
    fn drop(&mut self) {
        self.board.set_cell(self.to, self.to_contents);
        self.board.set_cell(self.from, self.from_contents);
    }
}

impl Deref for TemporaryMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TemporaryMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Board {
    /// Relocate whatever occupies `from` to `to`, discarding any piece on
    /// `to`, and clear `from`. Returns the discarded piece.
    ///
    /// No legality check is made.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, BoardError> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        if from == to {
            return Ok(None);
        }
        let moving = self.cell(from);
        let captured = self.cell(to);
        self.set_cell(to, moving);
        self.set_cell(from, None);
        Ok(captured)
    }

    /// Apply `from -> to`, run `body` against the resulting position, then
    /// put both squares back exactly as they were.
    ///
    /// `body` may nest further temporary moves. Only `from` and `to` are
    /// restored, so `body` must leave every other square as it found it.
    pub fn with_temporary_move<R>(
        &mut self,
        from: Square,
        to: Square,
        body: impl FnOnce(&mut Board) -> R,
    ) -> Result<R, BoardError> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;
        if from == to {
            return Ok(body(self));
        }
        let mut guard = TemporaryMove::apply(self, from, to);
        Ok(body(&mut *guard))
    }

    /// Turn a pawn standing on its owner's far row into a queen.
    ///
    /// Returns true if a promotion happened.
    pub(crate) fn promote_if_needed(&mut self, sq: Square) -> bool {
        match self.cell(sq) {
            Some(piece)
                if piece.kind == PieceKind::Pawn
                    && sq.row() == piece.owner.promotion_row(self.rows) =>
            {
                self.set_cell(sq, Some(Piece::new(PieceKind::Queen, piece.owner)));
                true
            }
            _ => false,
        }
    }
}
