//! Engine configuration.
//!
//! Hosts configure the engine at construction:
//! - `seed`: fixed seed for reproducible games, or `None` for entropy
//! - `initial_deal`: cards dealt by `deal_initial` (12 in the standard game)
//! - `deal_size`: cards dealt by `deal_batch` (3 in the standard game)
//! - `resolution`: what happens to in-play slots after a valid Set
//!
//! `SetConfig` deserializes with defaults for missing fields, so a host can
//! load a partial JSON/TOML table.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::CARD_COUNT;

/// What a resolved valid Set does to the in-play layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionPolicy {
    /// Matched cards leave in-play; later cards shift down. Refilling is
    /// left to explicit `deal` calls.
    #[default]
    Remove,
    /// Each matched slot is refilled from the front of the deck, keeping
    /// the layout stable. Slots with no card left to fill them are removed.
    ReplaceInPlace,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetConfig {
    /// RNG seed. `None` draws one from the thread-local generator.
    pub seed: Option<u64>,

    /// Cards dealt at the start of a game.
    pub initial_deal: usize,

    /// Cards dealt per batch.
    pub deal_size: usize,

    /// Post-match layout policy.
    pub resolution: ResolutionPolicy,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_deal: 12,
            deal_size: 3,
            resolution: ResolutionPolicy::Remove,
        }
    }
}

impl SetConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the opening deal size.
    #[must_use]
    pub fn with_initial_deal(mut self, count: usize) -> Self {
        self.initial_deal = count;
        self
    }

    /// Set the batch deal size.
    #[must_use]
    pub fn with_deal_size(mut self, count: usize) -> Self {
        self.deal_size = count;
        self
    }

    /// Set the resolution policy.
    #[must_use]
    pub fn with_resolution(mut self, policy: ResolutionPolicy) -> Self {
        self.resolution = policy;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deal_size == 0 {
            return Err(ConfigError::ZeroDealSize);
        }
        if self.initial_deal > CARD_COUNT {
            return Err(ConfigError::InitialDealTooLarge {
                requested: self.initial_deal,
                available: CARD_COUNT,
            });
        }
        Ok(())
    }
}
