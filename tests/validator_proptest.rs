//! Property-based tests for the matching rule and deck generation.
//!
//! These verify the Set predicate and the deck population across
//! randomly generated cards and seeds.

use proptest::prelude::*;
use rustc_hash::FxHashSet;
use set_engine::cards::{generate, Attribute, Card, CardInstance, Triad, CARD_COUNT};
use set_engine::core::GameRng;
use set_engine::rules::{find_sets, is_set, is_set_slice, third_card};

fn triad_strategy() -> impl Strategy<Value = Triad> {
    prop_oneof![Just(Triad::One), Just(Triad::Two), Just(Triad::Three)]
}

fn card_strategy() -> impl Strategy<Value = Card> {
    (
        triad_strategy(),
        triad_strategy(),
        triad_strategy(),
        triad_strategy(),
    )
        .prop_map(|(symbol, color, fill, number)| Card::new(symbol, color, fill, number))
}

// Reference rule: no attribute has exactly two distinct values
fn reference_is_set(a: &Card, b: &Card, c: &Card) -> bool {
    Attribute::ALL.iter().all(|&attr| {
        let values: FxHashSet<_> = [a.get(attr), b.get(attr), c.get(attr)].into_iter().collect();
        values.len() != 2
    })
}

proptest! {
    #[test]
    fn test_is_set_matches_reference(a in card_strategy(), b in card_strategy(), c in card_strategy()) {
        prop_assert_eq!(is_set(&a, &b, &c), reference_is_set(&a, &b, &c));
    }

    #[test]
    fn test_is_set_symmetric(a in card_strategy(), b in card_strategy(), c in card_strategy()) {
        let expected = is_set(&a, &b, &c);
        prop_assert_eq!(is_set(&a, &c, &b), expected);
        prop_assert_eq!(is_set(&b, &a, &c), expected);
        prop_assert_eq!(is_set(&b, &c, &a), expected);
        prop_assert_eq!(is_set(&c, &a, &b), expected);
        prop_assert_eq!(is_set(&c, &b, &a), expected);
    }

    #[test]
    fn test_slice_agrees_for_triples(a in card_strategy(), b in card_strategy(), c in card_strategy()) {
        prop_assert_eq!(is_set_slice(&[a, b, c]), is_set(&a, &b, &c));
    }

    #[test]
    fn test_slice_rejects_other_lengths(cards in prop::collection::vec(card_strategy(), 0..8)) {
        prop_assume!(cards.len() != 3);
        prop_assert!(!is_set_slice(&cards));
    }

    #[test]
    fn test_third_card_unique(a in card_strategy(), b in card_strategy(), c in card_strategy()) {
        prop_assume!(a != b);
        // c completes the Set exactly when it is the third card
        prop_assert_eq!(is_set(&a, &b, &c), c == third_card(&a, &b));
    }

    #[test]
    fn test_generate_is_permutation(seed in any::<u64>()) {
        let deck = generate(&mut GameRng::new(seed));
        let ids: FxHashSet<_> = deck.iter().map(CardInstance::id).collect();

        prop_assert_eq!(deck.len(), CARD_COUNT);
        prop_assert_eq!(ids.len(), CARD_COUNT);
    }

    #[test]
    fn test_find_sets_only_valid(seed in any::<u64>(), n in 3usize..21) {
        let deck = generate(&mut GameRng::new(seed));
        let cards: Vec<Card> = deck.iter().take(n).map(|c| c.card).collect();

        let sets = find_sets(&cards);
        for [a, b, c] in &sets {
            prop_assert!(is_set(&a.card(), &b.card(), &c.card()));
        }

        // Brute-force count agrees
        let mut count = 0;
        for i in 0..cards.len() {
            for j in i + 1..cards.len() {
                for k in j + 1..cards.len() {
                    if is_set(&cards[i], &cards[j], &cards[k]) {
                        count += 1;
                    }
                }
            }
        }
        prop_assert_eq!(sets.len(), count);
    }
}

#[test]
fn test_fixed_examples() {
    use Triad::*;

    let a = Card::new(One, One, One, One);
    let b = Card::new(Two, Two, Two, Two);
    let c = Card::new(Three, Three, Three, Three);
    assert!(is_set(&a, &b, &c));

    // number is 1, 1, 2
    let a = Card::new(One, One, One, One);
    let b = Card::new(One, Two, One, One);
    let c = Card::new(One, Three, One, Two);
    assert!(!is_set(&a, &b, &c));
}
