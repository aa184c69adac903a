//! # set-engine
//!
//! Rule engine for the card game Set.
//!
//! ## Design Principles
//!
//! 1. **Value Cards**: A card is its four attributes. Identity, equality and
//!    hashing are structural; there are no allocated ids.
//!
//! 2. **Single Owner**: `SetGame` owns the deck, the cards in play, the
//!    selection and the matched pile, and is the only thing that mutates
//!    them. Hosts read views or snapshots and issue commands.
//!
//! 3. **Total Commands**: No command can fail or leave the game in an
//!    unrepresentable state. Stale ids and short decks degrade to no-ops.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) snapshots via `im-rs`.
//!
//! - **Deterministic RNG**: A seed plus the command history reproduces a
//!   game exactly.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, commands, errors
//! - `cards`: Attributes, card values and instances, deck generation
//! - `rules`: The Set predicate and Set search
//! - `zones`: Card locations and the selection tracker
//! - `game`: The state machine

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandRecord,
    ConfigError, ParseCardIdError,
    GameRng,
    ResolutionPolicy, SetConfig,
};

pub use crate::cards::{
    Attribute, Card, CardId, CardInstance, CardState, SessionCardId, Triad, CARD_COUNT,
};

pub use crate::rules::{find_set, find_sets, is_set, is_set_slice, third_card, Verdict};

pub use crate::zones::{SelectionTracker, Toggle, Zone, SELECTION_CAPACITY};

pub use crate::game::{GameSnapshot, Resolution, SelectOutcome, SelectionPhase, SetGame};
