//! Card instances - runtime card state.
//!
//! `CardInstance` is a `Card` as it sits in one of the game's collections.
//! It adds the presentation state the engine owns: whether the card is
//! face-up and where it is in the selection cycle.
//!
//! Presentation state is not part of identity. Comparing instances for
//! "same card" goes through `id()`.

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId};

/// Where a card is in the selection cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Not chosen.
    #[default]
    Unselected,
    /// Chosen, not yet evaluated.
    Selected,
    /// Evaluated as part of a valid Set.
    Matched,
    /// Evaluated as part of an invalid triple.
    Mismatched,
}

/// A card instance in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// The card itself.
    pub card: Card,

    /// Is this card face-up? Cards in the deck are face-down.
    pub face_up: bool,

    /// Selection-cycle state.
    pub state: CardState,
}

impl CardInstance {
    /// Create a face-down, unselected instance.
    #[must_use]
    pub const fn new(card: Card) -> Self {
        Self {
            card,
            face_up: false,
            state: CardState::Unselected,
        }
    }

    /// Identity of the underlying card.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.card.id()
    }

    /// Check if this card is currently selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.state == CardState::Selected
    }
}

impl From<Card> for CardInstance {
    fn from(card: Card) -> Self {
        Self::new(card)
    }
}
