use super::super::{Board, Color, MoveCandidate, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        owner: Color,
        moves: &mut Vec<MoveCandidate>,
    ) {
        let dir = owner.pawn_direction();

        for d_col in [-1, 1] {
            if let Some(target) = self.offset(from, dir, d_col) {
                if let Some(occupant) = self.cell(target) {
                    if occupant.owner != owner {
                        moves.push(MoveCandidate::new(target, true));
                    }
                }
            }
        }

        let Some(forward) = self.offset(from, dir, 0) else {
            return;
        };
        if !self.is_empty(forward) {
            return;
        }
        moves.push(MoveCandidate::new(forward, false));

        if from.row() == owner.pawn_start_row(self.rows) {
            if let Some(double) = self.offset(from, 2 * dir, 0) {
                if self.is_empty(double) {
                    moves.push(MoveCandidate::new(double, false));
                }
            }
        }
    }
}
