//! Deck generation.
//!
//! The deck is always the full population: one card for every combination
//! of the four attributes, 81 in total, with no duplicates. Generation is
//! only ever done whole, at game start or reset.

use im::Vector;

use super::attributes::Triad;
use super::definition::{Card, CARD_COUNT};
use super::instance::CardInstance;
use crate::core::rng::GameRng;

/// Every card exactly once, in canonical (`CardId`) order.
pub fn all_cards() -> impl Iterator<Item = Card> {
    Triad::ALL.into_iter().flat_map(|symbol| {
        Triad::ALL.into_iter().flat_map(move |color| {
            Triad::ALL.into_iter().flat_map(move |fill| {
                Triad::ALL
                    .into_iter()
                    .map(move |number| Card::new(symbol, color, fill, number))
            })
        })
    })
}

/// Generate a full deck in uniformly random order.
///
/// Cards come out face-down and unselected. The result is a permutation of
/// `all_cards()` on every call.
#[must_use]
pub fn generate(rng: &mut GameRng) -> Vector<CardInstance> {
    let mut cards: Vec<CardInstance> = Vec::with_capacity(CARD_COUNT);
    cards.extend(all_cards().map(CardInstance::new));
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}
