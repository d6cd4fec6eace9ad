//! Raw move generation, one file per piece family.
//!
//! Candidates produced here ignore king safety; see `legality.rs` for the
//! filter that tags self-check moves.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use sliders::SliderType;

use super::error::BoardError;
use super::{Board, Color, MoveCandidate, Piece, PieceKind, Square};

impl Board {
    /// Raw candidates for the piece on `from`, without legality filtering.
    ///
    /// Fails with `OutOfBounds` for an off-board square and `EmptySelection`
    /// for an empty one. Candidate order is unspecified.
    pub fn pseudo_moves(&self, from: Square) -> Result<Vec<MoveCandidate>, BoardError> {
        let piece = self
            .piece_at(from)?
            .ok_or(BoardError::EmptySelection { square: from })?;
        Ok(self.generate_piece_moves(from, piece))
    }

    pub(crate) fn generate_piece_moves(&self, from: Square, piece: Piece) -> Vec<MoveCandidate> {
        let mut moves = Vec::new();
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.owner, &mut moves),
            PieceKind::Knight => self.generate_knight_moves(from, piece.owner, &mut moves),
            PieceKind::Bishop => {
                self.generate_slider_moves(from, piece.owner, SliderType::Bishop, &mut moves)
            }
            PieceKind::Rook => {
                self.generate_slider_moves(from, piece.owner, SliderType::Rook, &mut moves)
            }
            PieceKind::Queen => {
                self.generate_slider_moves(from, piece.owner, SliderType::Queen, &mut moves)
            }
            PieceKind::King => self.generate_king_moves(from, piece.owner, &mut moves),
        }
        moves
    }

    /// Push `to` if it is empty or holds an enemy piece.
    ///
    /// Returns true if `to` was empty, i.e. a slider may keep going.
    #[inline]
    pub(crate) fn push_if_reachable(
        &self,
        to: Square,
        owner: Color,
        moves: &mut Vec<MoveCandidate>,
    ) -> bool {
        match self.cell(to) {
            None => {
                moves.push(MoveCandidate::new(to, false));
                true
            }
            Some(occupant) => {
                if occupant.owner != owner {
                    moves.push(MoveCandidate::new(to, true));
                }
                false
            }
        }
    }

    /// Push every in-bounds `from + offset` that is empty or enemy-occupied.
    pub(crate) fn push_offsets(
        &self,
        from: Square,
        owner: Color,
        offsets: &[(isize, isize)],
        moves: &mut Vec<MoveCandidate>,
    ) {
        for &(d_row, d_col) in offsets {
            if let Some(to) = self.offset(from, d_row, d_col) {
                self.push_if_reachable(to, owner, moves);
            }
        }
    }
}
