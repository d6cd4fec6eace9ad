//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use mini_chess::board::prelude::*;
//!
//! let game = Game::start(GameConfig::default());
//! assert_eq!(game.active_player(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, Color, GameOverReason, Layout, LayoutError, MoveCandidate,
    Piece, PieceKind, PlayedMove, Preset, Square, TurnEnd,
};
pub use crate::engine::{Game, GameConfig, GamePhase, SelectOutcome};
