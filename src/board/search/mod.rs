//! Move selection for the automated player.
//!
//! Features:
//! - One-ply greedy scoring by captured material
//! - Penalty for leaving the moved piece capturable
//! - Seedable random tie-break among equal scores

mod greedy;

pub use greedy::{choose_move, score_move, ScoredChoice};
