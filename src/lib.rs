pub mod board;
pub mod engine;

pub use board::{Board, Color, Piece, PieceKind, Square};
pub use engine::{start_game, Game, GameConfig};
