//! Selection tracking for cards in play.
//!
//! The tracker records which in-play cards the player has chosen, by
//! identity rather than position, so shuffling or removing other cards never
//! disturbs it. Every change to the selection is mirrored onto the
//! `CardState` of the affected in-play card.
//!
//! The tracker never resolves a full selection on its own. Deciding what
//! happens to three chosen cards is the state machine's job.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, CardInstance, CardState};

/// Maximum number of cards in a selection.
pub const SELECTION_CAPACITY: usize = 3;

/// Result of a toggle request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Toggle {
    /// Card was added and marked `Selected`.
    Selected,
    /// Card was removed and marked `Unselected`.
    Deselected,
    /// Card is not in play; nothing changed.
    Ignored,
    /// Selection is full; nothing changed. Callers resolve a full selection
    /// before toggling, so reaching this is a caller bug.
    AtCapacity,
}

/// The set of chosen in-play cards.
///
/// ## Usage
///
/// ```
/// use im::Vector;
/// use set_engine::cards::{all_cards, CardInstance, CardState};
/// use set_engine::zones::{SelectionTracker, Toggle};
///
/// let mut in_play: Vector<CardInstance> = all_cards().take(4).map(CardInstance::new).collect();
/// let first = in_play[0].id();
///
/// let mut selection = SelectionTracker::new();
/// assert_eq!(selection.toggle(first, &mut in_play), Toggle::Selected);
/// assert_eq!(in_play[0].state, CardState::Selected);
///
/// assert_eq!(selection.toggle(first, &mut in_play), Toggle::Deselected);
/// assert!(selection.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTracker {
    ids: SmallVec<[CardId; SELECTION_CAPACITY]>,
}

impl SelectionTracker {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected card ids, in selection order.
    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check if the selection holds three cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= SELECTION_CAPACITY
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.ids.contains(&id)
    }

    /// Select or deselect a card in play.
    ///
    /// Ids not found in `in_play` are ignored.
    pub fn toggle(&mut self, id: CardId, in_play: &mut Vector<CardInstance>) -> Toggle {
        let Some(index) = in_play.iter().position(|c| c.id() == id) else {
            log::trace!("toggle ignored: {} not in play", id);
            return Toggle::Ignored;
        };

        if let Some(pos) = self.ids.iter().position(|&s| s == id) {
            self.ids.remove(pos);
            if let Some(card) = in_play.get_mut(index) {
                card.state = CardState::Unselected;
            }
            log::trace!("deselected {}", id);
            return Toggle::Deselected;
        }

        if self.is_full() {
            log::warn!("toggle of {} rejected: selection already full", id);
            return Toggle::AtCapacity;
        }

        self.ids.push(id);
        if let Some(card) = in_play.get_mut(index) {
            card.state = CardState::Selected;
        }
        log::trace!("selected {}", id);
        Toggle::Selected
    }

    /// Set the state of every selected card still in play.
    pub fn mark(&self, state: CardState, in_play: &mut Vector<CardInstance>) {
        for card in in_play.iter_mut() {
            if self.ids.contains(&card.id()) {
                card.state = state;
            }
        }
    }

    /// Drop all ids without touching card states.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Take the selected ids, leaving the selection empty.
    pub fn take(&mut self) -> SmallVec<[CardId; SELECTION_CAPACITY]> {
        std::mem::take(&mut self.ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{all_cards, Card};

    fn table(n: usize) -> Vector<CardInstance> {
        all_cards()
            .take(n)
            .map(|c| CardInstance {
                face_up: true,
                ..CardInstance::new(c)
            })
            .collect()
    }

    fn state_of(in_play: &Vector<CardInstance>, id: CardId) -> CardState {
        in_play.iter().find(|c| c.id() == id).unwrap().state
    }

    #[test]
    fn test_select_and_deselect() {
        let mut in_play = table(5);
        let id = in_play[2].id();
        let mut selection = SelectionTracker::new();

        assert_eq!(selection.toggle(id, &mut in_play), Toggle::Selected);
        assert!(selection.contains(id));
        assert_eq!(state_of(&in_play, id), CardState::Selected);

        assert_eq!(selection.toggle(id, &mut in_play), Toggle::Deselected);
        assert!(!selection.contains(id));
        assert_eq!(state_of(&in_play, id), CardState::Unselected);
    }

    #[test]
    fn test_unknown_card_ignored() {
        let mut in_play = table(3);
        let outside: Card = all_cards().nth(50).unwrap();
        let before = in_play.clone();
        let mut selection = SelectionTracker::new();

        assert_eq!(selection.toggle(outside.id(), &mut in_play), Toggle::Ignored);
        assert!(selection.is_empty());
        assert_eq!(in_play, before);
    }

    #[test]
    fn test_capacity() {
        let mut in_play = table(4);
        let ids: Vec<_> = in_play.iter().map(CardInstance::id).collect();
        let mut selection = SelectionTracker::new();

        for &id in &ids[..3] {
            assert_eq!(selection.toggle(id, &mut in_play), Toggle::Selected);
        }
        assert!(selection.is_full());

        assert_eq!(selection.toggle(ids[3], &mut in_play), Toggle::AtCapacity);
        assert_eq!(state_of(&in_play, ids[3]), CardState::Unselected);
        assert_eq!(selection.len(), 3);

        // Deselecting still works when full
        assert_eq!(selection.toggle(ids[0], &mut in_play), Toggle::Deselected);
        assert_eq!(selection.ids(), &ids[1..3]);
    }

    #[test]
    fn test_identity_survives_reorder() {
        let mut in_play = table(6);
        let id = in_play[1].id();
        let mut selection = SelectionTracker::new();
        selection.toggle(id, &mut in_play);

        in_play = in_play.iter().rev().cloned().collect();

        assert_eq!(selection.toggle(id, &mut in_play), Toggle::Deselected);
        assert_eq!(state_of(&in_play, id), CardState::Unselected);
    }

    #[test]
    fn test_mark_and_take() {
        let mut in_play = table(4);
        let ids: Vec<_> = in_play.iter().map(CardInstance::id).collect();
        let mut selection = SelectionTracker::new();
        selection.toggle(ids[0], &mut in_play);
        selection.toggle(ids[3], &mut in_play);

        selection.mark(CardState::Mismatched, &mut in_play);
        assert_eq!(state_of(&in_play, ids[0]), CardState::Mismatched);
        assert_eq!(state_of(&in_play, ids[1]), CardState::Unselected);
        assert_eq!(state_of(&in_play, ids[3]), CardState::Mismatched);

        let taken = selection.take();
        assert_eq!(taken.as_slice(), &[ids[0], ids[3]]);
        assert!(selection.is_empty());
    }
}
