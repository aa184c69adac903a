//! Card definitions - immutable card values.
//!
//! A `Card` is nothing but its four attributes. Two cards with the same
//! attributes are the same card: equality, hashing and `CardId` are all
//! derived from the attribute tuple, never from creation order.
//!
//! Mutable per-game data (face-up, selection state) lives separately in
//! `CardInstance`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::attributes::{Attribute, Triad};
use crate::core::error::ParseCardIdError;

/// Number of distinct cards: 3 values on each of 4 attributes.
pub const CARD_COUNT: usize = 81;

/// Identity of a card, derived from its attributes.
///
/// Dense index in `0..81`, so it doubles as an array index. Displays as the
/// four attribute values in identity order (`symbol color fill number`),
/// e.g. `1231`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct CardId(u8);

impl CardId {
    /// Get the raw index (0..81).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Create from a raw index, or `None` if out of range.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if (raw as usize) < CARD_COUNT {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// The card this id names.
    #[must_use]
    pub const fn card(self) -> Card {
        let i = self.0;
        Card::new(
            Triad::from_index(i / 27),
            Triad::from_index(i / 9),
            Triad::from_index(i / 3),
            Triad::from_index(i),
        )
    }
}

impl TryFrom<u8> for CardId {
    type Error = ParseCardIdError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(ParseCardIdError::IndexOutOfRange(raw))
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let card = self.card();
        write!(f, "{}{}{}{}", card.symbol, card.color, card.fill, card.number)
    }
}

impl FromStr for CardId {
    type Err = ParseCardIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(ParseCardIdError::Length(bytes.len()));
        }

        let mut triads = [Triad::One; 4];
        for (slot, &b) in triads.iter_mut().zip(bytes) {
            if !b.is_ascii_digit() {
                return Err(ParseCardIdError::NotADigit(b as char));
            }
            *slot = Triad::try_from(b - b'0')?;
        }

        Ok(Card::new(triads[0], triads[1], triads[2], triads[3]).id())
    }
}

/// Identity of a card within one specific game.
///
/// `CardId` alone repeats across games (every game has the same 81 cards).
/// Hosts that need identities that never collide across successive games,
/// e.g. for view diffing, combine it with the engine's game number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionCardId {
    pub game: u64,
    pub card: CardId,
}

impl std::fmt::Display for SessionCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.card, self.game)
    }
}

/// An immutable Set card.
///
/// Every combination of four `Triad`s is a valid card, so construction
/// cannot fail.
///
/// ## Example
///
/// ```
/// use set_engine::cards::{Card, Triad};
///
/// let card = Card::new(Triad::One, Triad::Two, Triad::Three, Triad::One);
/// assert_eq!(card.id().to_string(), "1231");
/// assert_eq!(card.id().card(), card);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The symbol drawn on the card.
    pub symbol: Triad,
    /// The colour of the symbols.
    pub color: Triad,
    /// The fill of the symbols.
    pub fill: Triad,
    /// How many symbols are drawn.
    pub number: Triad,
}

impl Card {
    /// Create a card from its four attributes.
    #[must_use]
    pub const fn new(symbol: Triad, color: Triad, fill: Triad, number: Triad) -> Self {
        Self {
            symbol,
            color,
            fill,
            number,
        }
    }

    /// Value on one attribute dimension.
    #[must_use]
    pub const fn get(&self, attr: Attribute) -> Triad {
        match attr {
            Attribute::Symbol => self.symbol,
            Attribute::Color => self.color,
            Attribute::Fill => self.fill,
            Attribute::Number => self.number,
        }
    }

    /// Identity derived from the attributes.
    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId(
            self.symbol.index() * 27
                + self.color.index() * 9
                + self.fill.index() * 3
                + self.number.index(),
        )
    }
}

impl From<Card> for CardId {
    fn from(card: Card) -> Self {
        card.id()
    }
}
