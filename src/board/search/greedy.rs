use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Color, Piece, Square};

/// The move picked by [`choose_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredChoice {
    pub from: Square,
    pub to: Square,
    pub score: i32,
    /// How many candidates shared `score`.
    pub tied: usize,
}

impl Board {
    /// True iff some legal move of `attacker` lands on `square`.
    pub(crate) fn is_capturable_by(&mut self, square: Square, attacker: Color) -> bool {
        self.pieces_of(attacker).into_iter().any(|(from, _)| {
            self.legal_moves(from)
                .map(|moves| moves.iter().any(|m| m.destination == square))
                .unwrap_or(false)
        })
    }
}

/// Score moving `mover` from `from` to `to`.
///
/// The base score is the value of the piece on `to` (0 if empty). Unless
/// that piece is a king, the mover's own value is subtracted when the
/// opponent could capture it on `to` after the move.
pub fn score_move(board: &mut Board, from: Square, to: Square, mover: Piece) -> i32 {
    let target = board.cell(to);
    let mut score = target.map_or(0, |p| p.kind.value());

    if !target.is_some_and(Piece::is_king) {
        let exposed = board
            .with_temporary_move(from, to, |b| b.is_capturable_by(to, mover.owner.opponent()))
            .unwrap_or(false);
        if exposed {
            score -= mover.kind.value();
        }
    }

    score
}

/// Pick the best-scoring legal move for `player`, breaking ties uniformly
/// at random with `rng`. Returns `None` if `player` has no legal move.
pub fn choose_move<R: Rng + ?Sized>(
    board: &mut Board,
    player: Color,
    rng: &mut R,
) -> Option<ScoredChoice> {
    let mut best_score = i32::MIN;
    let mut best_moves: Vec<(Square, Square)> = Vec::new();

    for (from, piece) in board.pieces_of(player) {
        let Ok(moves) = board.legal_moves(from) else {
            continue;
        };
        for m in moves {
            let score = score_move(board, from, m.destination, piece);
            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push((from, m.destination));
            } else if score == best_score {
                best_moves.push((from, m.destination));
            }
        }
    }

    let &(from, to) = best_moves.choose(rng)?;

    #[cfg(feature = "logging")]
    log::debug!(
        "{player} chooses {from}->{to} score {best_score} among {} tied",
        best_moves.len()
    );

    Some(ScoredChoice {
        from,
        to,
        score: best_score,
        tied: best_moves.len(),
    })
}
