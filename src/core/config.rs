//! Game configuration.
//!
//! Deck size is the only rule knob: the target (`2N - 1`) and the erase
//! allowance (`N / 5`) are derived from it. The seed only fixes the shuffle.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Cards dealt to each side before the first turn.
pub const OPENING_HAND: usize = 2;

/// Default deck size.
pub const DEFAULT_DECK_COUNT: u32 = 21;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cards in the deck (values `1..=deck_count`).
    pub deck_count: u32,

    /// Shuffle seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deck_count: DEFAULT_DECK_COUNT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config for the given deck size.
    pub fn new(deck_count: u32) -> Self {
        Self {
            deck_count,
            ..Self::default()
        }
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations that cannot produce a game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.deck_count == 0 {
            return Err(GameError::InvalidDeckCount(self.deck_count));
        }
        Ok(())
    }

    /// Sum both sides aim for.
    #[must_use]
    pub fn target(&self) -> i64 {
        2 * i64::from(self.deck_count) - 1
    }

    /// Erase tokens each side starts with.
    #[must_use]
    pub fn erase_tokens(&self) -> u32 {
        self.deck_count / 5
    }
}
