use super::super::{Board, Color, MoveCandidate, Square};

const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(isize, isize)] {
        const QUEEN: [(isize, isize); 8] = [
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (-1, -1),
            (-1, 1),
            (1, -1),
            (1, 1),
        ];
        match self {
            SliderType::Bishop => &DIAGONALS,
            SliderType::Rook => &ORTHOGONALS,
            SliderType::Queen => &QUEEN,
        }
    }
}

impl Board {
    /// Walk each direction until the edge or the first occupied square,
    /// which is included only if it holds an enemy piece.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        owner: Color,
        slider: SliderType,
        moves: &mut Vec<MoveCandidate>,
    ) {
        for &(d_row, d_col) in slider.directions() {
            let mut current = from;
            while let Some(to) = self.offset(current, d_row, d_col) {
                if !self.push_if_reachable(to, owner, moves) {
                    break;
                }
                current = to;
            }
        }
    }
}
