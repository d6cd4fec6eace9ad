//! Check, checkmate and stalemate detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Square};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOverReason {
    Checkmate { winner: Color },
    Stalemate,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::Checkmate { winner } => write!(f, "Checkmate, {winner} wins"),
            GameOverReason::Stalemate => write!(f, "Stalemate"),
        }
    }
}

/// Classification of the position for the player about to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnEnd {
    /// The game goes on; `in_check` is for display only.
    Continue { in_check: bool },
    GameOver(GameOverReason),
}

impl Board {
    /// True iff some raw move of `player`'s opponent lands on one of
    /// `player`'s kings. A side without a king is never in check.
    pub fn is_in_check(&self, player: Color) -> bool {
        let kings = self.king_squares(player);
        if kings.is_empty() {
            return false;
        }
        self.attacks_any(player.opponent(), &kings)
    }

    /// True iff some raw move of `attacker` lands on one of `targets`.
    pub(crate) fn attacks_any(&self, attacker: Color, targets: &[Square]) -> bool {
        self.pieces_of(attacker).into_iter().any(|(from, piece)| {
            self.generate_piece_moves(from, piece)
                .iter()
                .any(|m| targets.contains(&m.destination))
        })
    }

    /// True iff at least one of `player`'s pieces has a legal move.
    ///
    /// Kings are tried first since they are the pieces most often left
    /// without moves; the answer does not depend on the order.
    pub fn has_any_legal_move(&mut self, player: Color) -> bool {
        let mut pieces = self.pieces_of(player);
        pieces.sort_by_key(|(_, piece)| !piece.is_king());
        pieces.into_iter().any(|(from, _)| {
            self.generate_moves(from, true)
                .map(|moves| moves.iter().any(|m| m.is_legal))
                .unwrap_or(false)
        })
    }

    pub fn is_checkmate(&mut self, player: Color) -> bool {
        self.is_in_check(player) && !self.has_any_legal_move(player)
    }

    pub fn is_stalemate(&mut self, player: Color) -> bool {
        !self.is_in_check(player) && !self.has_any_legal_move(player)
    }

    /// Classify the position for `next`, the player about to move.
    pub fn end_of_turn(&mut self, next: Color) -> TurnEnd {
        let in_check = self.is_in_check(next);
        if self.has_any_legal_move(next) {
            TurnEnd::Continue { in_check }
        } else if in_check {
            TurnEnd::GameOver(GameOverReason::Checkmate {
                winner: next.opponent(),
            })
        } else {
            TurnEnd::GameOver(GameOverReason::Stalemate)
        }
    }
}
