//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `PieceKind`, `Color` and `Piece` - what occupies a cell
//! - `Square` - a (row, col) coordinate
//! - `MoveCandidate` and `PlayedMove` - generated and applied moves

mod moves;
mod piece;
mod square;

pub use moves::{MoveCandidate, PlayedMove};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
