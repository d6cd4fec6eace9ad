//! Game controller.
//!
//! Wraps a [`Board`](crate::board::Board) in a selection-driven turn engine:
//! the caller feeds squares into [`Game::select`], the engine answers with
//! highlights, applied moves and end-of-game notifications, and plays the
//! automated side with the greedy selector when one is configured.

mod config;
mod controller;

pub use config::GameConfig;
pub use controller::{start_game, AutomatedReply, Game, GamePhase, SelectOutcome, TurnState};
