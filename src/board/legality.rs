//! King-safety filter over raw candidates.

use super::error::BoardError;
use super::{Board, MoveCandidate, Square};

impl Board {
    /// Candidates for the piece on `from`.
    ///
    /// With `check_legal` set, every candidate is tried on the board and
    /// tagged `is_legal = false` if it leaves the mover's own king in check.
    /// Without it the raw candidates are returned untouched, which is what
    /// attack detection needs.
    pub fn generate_moves(
        &mut self,
        from: Square,
        check_legal: bool,
    ) -> Result<Vec<MoveCandidate>, BoardError> {
        let mut moves = self.pseudo_moves(from)?;
        if check_legal {
            self.tag_illegal_moves(from, &mut moves)?;
        }
        Ok(moves)
    }

    /// Only the legal candidates for the piece on `from`.
    pub fn legal_moves(&mut self, from: Square) -> Result<Vec<MoveCandidate>, BoardError> {
        let mut moves = self.generate_moves(from, true)?;
        moves.retain(|m| m.is_legal);
        Ok(moves)
    }

    fn tag_illegal_moves(
        &mut self,
        from: Square,
        moves: &mut [MoveCandidate],
    ) -> Result<(), BoardError> {
        let Some(mover) = self.piece_at(from)? else {
            return Err(BoardError::EmptySelection { square: from });
        };
        for m in moves.iter_mut() {
            let exposes_king =
                self.with_temporary_move(from, m.destination, |b| b.is_in_check(mover.owner))?;
            if exposes_king {
                m.is_legal = false;
            }
        }
        Ok(())
    }
}
