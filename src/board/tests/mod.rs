//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move geometry
//! - `make_unmake.rs` - Moving pieces and restoring temporary moves
//! - `edge_cases.rs` - Check, checkmate and stalemate positions
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod proptest;

use super::{Board, MoveCandidate, Square};

/// Destinations of `moves`, sorted for stable comparison.
pub(super) fn destinations(moves: &[MoveCandidate]) -> Vec<Square> {
    let mut squares: Vec<Square> = moves.iter().map(|m| m.destination).collect();
    squares.sort();
    squares
}

pub(super) fn legal_destinations(board: &mut Board, from: Square) -> Vec<Square> {
    destinations(&board.legal_moves(from).unwrap())
}
