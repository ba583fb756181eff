//! Game configuration.
//!
//! The rules themselves are fixed; configuration only covers how a session
//! is seeded and presented.

use serde::{Deserialize, Serialize};

use super::GameRng;
use crate::strategy::OpponentStrategy;

/// Points needed to win a match.
pub const WINNING_SCORE: u32 = 3;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score that ends a match (default: 3).
    pub winning_score: u32,

    /// Seed for the computer's random source.
    /// `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Pin the computer to one strategy instead of drawing one per match.
    pub opponent: Option<OpponentStrategy>,

    /// Colored banners on the terminal.
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_score: WINNING_SCORE,
            seed: None,
            opponent: None,
            color: true,
        }
    }
}

impl GameConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with the opponent strategy pinned.
    #[must_use]
    pub fn with_opponent(mut self, opponent: Option<OpponentStrategy>) -> Self {
        self.opponent = opponent;
        self
    }

    /// Create a new config with colored output on or off.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Build the random source this config describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
