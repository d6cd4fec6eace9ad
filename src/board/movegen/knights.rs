use super::super::{Board, Color, MoveCandidate, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

impl Board {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        owner: Color,
        moves: &mut Vec<MoveCandidate>,
    ) {
        self.push_offsets(from, owner, &KNIGHT_OFFSETS, moves);
    }
}
