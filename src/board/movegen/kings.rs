use super::super::{Board, Color, MoveCandidate, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        owner: Color,
        moves: &mut Vec<MoveCandidate>,
    ) {
        self.push_offsets(from, owner, &KING_OFFSETS, moves);
    }
}
