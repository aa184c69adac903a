//! Card locations.
//!
//! A Set game has three fixed zones: the deck, the cards in play, and the
//! matched pile. Every card is in exactly one of them at all times. The
//! selection is not a zone; it is a marking on cards that are in play.
//!
//! ## Key Types
//!
//! - `Zone`: Which collection a card is in
//! - `SelectionTracker`: Chosen in-play cards, by identity

pub mod selection;

use serde::{Deserialize, Serialize};

pub use selection::{SelectionTracker, Toggle, SELECTION_CAPACITY};

/// The collections a card can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down, not yet dealt.
    Deck,
    /// Dealt and visible, available for selection.
    InPlay,
    /// Part of a resolved Set.
    Matched,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "deck",
            Zone::InPlay => "in play",
            Zone::Matched => "matched",
        };
        f.write_str(name)
    }
}
