//! Selection-cycle phases and resolution outcomes.
//!
//! The cycle is derived from the selection size and whether the full
//! selection has been evaluated:
//!
//! ```text
//! Empty -> Choosing(1|2) -> Pending -> Resolved(verdict) -> Empty
//! ```
//!
//! `Pending` and `Resolved` both hold three cards. Either is cleared by the
//! next `select_card` or `deal`, which moves a valid Set to the matched pile
//! and returns an invalid one to `Unselected`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::rules::Verdict;
use crate::zones::{Toggle, SELECTION_CAPACITY};

/// Where the game is in the selection cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// Nothing selected.
    Empty,
    /// One or two cards selected.
    Choosing(u8),
    /// Three cards selected, not yet evaluated.
    Pending,
    /// Three cards selected and evaluated; awaiting resolution.
    Resolved(Verdict),
}

impl SelectionPhase {
    /// Number of selected cards this phase implies.
    #[must_use]
    pub fn selected_count(self) -> usize {
        match self {
            SelectionPhase::Empty => 0,
            SelectionPhase::Choosing(n) => n as usize,
            SelectionPhase::Pending | SelectionPhase::Resolved(_) => SELECTION_CAPACITY,
        }
    }

    /// Check if the next selection or deal will resolve three cards first.
    #[must_use]
    pub fn is_full(self) -> bool {
        matches!(self, SelectionPhase::Pending | SelectionPhase::Resolved(_))
    }
}

/// What happened to a full selection when it was cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Whether the three cards were a Set.
    pub verdict: Verdict,
    /// The three cards, in selection order.
    pub cards: SmallVec<[CardId; SELECTION_CAPACITY]>,
}

/// Result of `SetGame::select_card`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOutcome {
    /// The full selection that was resolved before the toggle, if any.
    pub resolution: Option<Resolution>,
    /// What the toggle itself did.
    pub toggle: Toggle,
}
