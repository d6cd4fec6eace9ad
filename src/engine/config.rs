//! Game setup options.

use crate::board::{Color, Layout};

/// Options fixed at game start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Starting position
    pub layout: Layout,
    /// Side played by the greedy selector, if any
    pub automated: Option<Color>,
    /// Seed for the selector's tie-break; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::new(Layout::default())
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(layout: impl Into<Layout>) -> Self {
        GameConfig {
            layout: layout.into(),
            automated: None,
            seed: None,
        }
    }

    /// Set the starting position.
    #[must_use]
    pub fn layout(mut self, layout: impl Into<Layout>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Let the greedy selector play `color`.
    #[must_use]
    pub const fn automated(mut self, color: Color) -> Self {
        self.automated = Some(color);
        self
    }

    /// Both sides are driven through `select`.
    #[must_use]
    pub const fn human_only(mut self) -> Self {
        self.automated = None;
        self
    }

    /// Fix the tie-break seed so automated play is reproducible.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
