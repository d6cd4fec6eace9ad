//! Board representation and chess rules.
//!
//! A size-parametric grid of optional pieces with per-piece move generation,
//! a king-safety legality filter, and check / checkmate / stalemate detection.
//! Castling and en passant are not part of the rules.
//!
//! # Example
//! ```
//! use mini_chess::board::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Square(6, 4)).unwrap();
//! assert_eq!(moves.len(), 2);
//! assert!(!board.is_in_check(Color::White));
//! ```

mod builder;
mod check;
mod error;
mod layout;
mod legality;
mod make_unmake;
mod movegen;
pub mod prelude;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use check::{GameOverReason, TurnEnd};
pub use error::{BoardError, LayoutError, SquareError};
pub use layout::{Layout, Preset};
pub use state::Board;
pub use types::{Color, MoveCandidate, Piece, PieceKind, PlayedMove, Square};
