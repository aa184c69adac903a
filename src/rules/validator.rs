//! The matching rule.
//!
//! Three cards form a Set when, on every attribute independently, their
//! values are either all equal or all distinct. Exactly two equal and one
//! different on any attribute breaks the Set.
//!
//! Everything here is pure. `is_set` is the single source of truth for
//! match correctness; the search helpers are built on `third_card`, which
//! relies on the same rule.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Attribute, Card, CardId};

/// Outcome of evaluating a full selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The three cards form a Set.
    Match,
    /// They do not.
    Mismatch,
}

impl Verdict {
    #[must_use]
    pub fn from_bool(is_set: bool) -> Self {
        if is_set {
            Verdict::Match
        } else {
            Verdict::Mismatch
        }
    }

    #[must_use]
    pub fn is_match(self) -> bool {
        self == Verdict::Match
    }
}

/// Check whether three values on one attribute are all equal or all distinct.
#[inline]
fn attribute_ok(a: &Card, b: &Card, c: &Card, attr: Attribute) -> bool {
    let (x, y, z) = (a.get(attr), b.get(attr), c.get(attr));
    let equal_pairs = usize::from(x == y) + usize::from(y == z) + usize::from(x == z);
    // 3 => all equal, 0 => all distinct, 1 => exactly two equal
    equal_pairs != 1
}

/// Check whether three cards form a Set.
///
/// ```
/// use set_engine::cards::{Card, Triad::*};
/// use set_engine::rules::is_set;
///
/// let a = Card::new(One, One, One, One);
/// let b = Card::new(Two, Two, Two, Two);
/// let c = Card::new(Three, Three, Three, Three);
/// assert!(is_set(&a, &b, &c));
/// ```
#[must_use]
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    Attribute::ALL
        .into_iter()
        .all(|attr| attribute_ok(a, b, c, attr))
}

/// Check whether a slice of cards is a Set.
///
/// Only triples can be Sets; any other length is `false`.
#[must_use]
pub fn is_set_slice(cards: &[Card]) -> bool {
    match cards {
        [a, b, c] => is_set(a, b, c),
        _ => false,
    }
}

/// The unique card that completes a Set with `a` and `b`.
///
/// If `a == b` the result is that same card, which can never be a real
/// Set since the deck holds each card once.
#[must_use]
pub fn third_card(a: &Card, b: &Card) -> Card {
    use crate::cards::Triad;

    Card::new(
        Triad::complete(a.symbol, b.symbol),
        Triad::complete(a.color, b.color),
        Triad::complete(a.fill, b.fill),
        Triad::complete(a.number, b.number),
    )
}

/// All Sets among `cards`, each reported once, in positional order.
///
/// Cards are assumed distinct (as they are in any game collection).
#[must_use]
pub fn find_sets(cards: &[Card]) -> Vec<[CardId; 3]> {
    let positions: FxHashMap<CardId, usize> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id(), i))
        .collect();

    let mut found = Vec::new();
    for (i, a) in cards.iter().enumerate() {
        for (j, b) in cards.iter().enumerate().skip(i + 1) {
            let third = third_card(a, b).id();
            // Only count the triple from its first two positions
            if positions.get(&third).is_some_and(|&k| k > j) {
                found.push([a.id(), b.id(), third]);
            }
        }
    }
    found
}

/// The first Set among `cards`, if any.
#[must_use]
pub fn find_set(cards: &[Card]) -> Option<[CardId; 3]> {
    let positions: FxHashMap<CardId, usize> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id(), i))
        .collect();

    cards.iter().enumerate().find_map(|(i, a)| {
        cards.iter().skip(i + 1).find_map(|b| {
            let third = third_card(a, b).id();
            positions
                .get(&third)
                .filter(|&&k| k > i && third != b.id())
                .map(|_| [a.id(), b.id(), third])
        })
    })
}
