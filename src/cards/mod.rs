//! Card system: attributes, definitions, instances, and deck generation.
//!
//! ## Key Types
//!
//! - `Triad`: The three-valued domain shared by every attribute
//! - `Attribute`: The four dimensions (symbol, color, fill, number)
//! - `Card`: Immutable card value, identity derived from attributes
//! - `CardId`: Dense identity (0..81), displayed as four digits
//! - `CardInstance`: A card plus engine-owned presentation state
//!
//! ## Deck
//!
//! `deck::generate` builds all 81 cards and shuffles them.

pub mod attributes;
pub mod deck;
pub mod definition;
pub mod instance;

pub use attributes::{Attribute, Triad};
pub use deck::{all_cards, generate};
pub use definition::{Card, CardId, SessionCardId, CARD_COUNT};
pub use instance::{CardInstance, CardState};
