//! Owned, read-only views of a game.
//!
//! Collections are `im::Vector`s, so taking a snapshot is O(1) and later
//! commands on the game never show through.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::phase::SelectionPhase;
use crate::cards::{CardId, CardInstance};
use crate::zones::SELECTION_CAPACITY;

/// Everything a presentation layer needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Game number this snapshot was taken in.
    pub game_number: u64,

    /// Undealt cards, front first.
    pub deck: Vector<CardInstance>,

    /// Cards in play, in layout order.
    pub in_play: Vector<CardInstance>,

    /// Matched cards, in the order they were matched.
    pub matched: Vector<CardInstance>,

    /// Selected card ids, in selection order.
    pub selected: SmallVec<[CardId; SELECTION_CAPACITY]>,

    /// Selection-cycle phase.
    pub phase: SelectionPhase,
}

impl GameSnapshot {
    /// Total cards across all three zones. Always 81.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.in_play.len() + self.matched.len()
    }
}
