//! Card attribute system.
//!
//! Every card has exactly four attributes, and every attribute takes one of
//! exactly three values. The three-valued domain is a single type, `Triad`,
//! reused for all four dimensions so that the matching rule can be written
//! once and applied per `Attribute`.
//!
//! ## Attributes
//!
//! - `Symbol`: which shape is drawn
//! - `Color`: stroke/fill colour
//! - `Fill`: solid, striped, or open
//! - `Number`: how many shapes (1-3)

use serde::{Deserialize, Serialize};

use crate::core::error::ParseCardIdError;

/// One of the three values an attribute can take.
///
/// Values carry no ordering semantics; only equality matters to the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Triad {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Triad {
    /// All three values, in canonical order.
    pub const ALL: [Triad; 3] = [Triad::One, Triad::Two, Triad::Three];

    /// Numeric value (1, 2 or 3).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based index (0, 1 or 2).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8 - 1
    }

    /// Value at a zero-based index, wrapping modulo 3.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index % 3 {
            0 => Triad::One,
            1 => Triad::Two,
            _ => Triad::Three,
        }
    }

    /// The value that makes `a`, `b` and the result valid on one attribute.
    ///
    /// Equal inputs complete to the same value; distinct inputs complete to
    /// the remaining one.
    #[must_use]
    pub const fn complete(a: Triad, b: Triad) -> Triad {
        // Indices sum to 0 mod 3 exactly when all equal or all distinct.
        Triad::from_index((6 - a.index() - b.index()) % 3)
    }
}

impl TryFrom<u8> for Triad {
    type Error = ParseCardIdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Triad::One),
            2 => Ok(Triad::Two),
            3 => Ok(Triad::Three),
            other => Err(ParseCardIdError::TriadOutOfRange(other)),
        }
    }
}

impl std::fmt::Display for Triad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The four attribute dimensions of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Symbol,
    Color,
    Fill,
    Number,
}

impl Attribute {
    /// All dimensions, in identity order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Symbol,
        Attribute::Color,
        Attribute::Fill,
        Attribute::Number,
    ];
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Attribute::Symbol => "symbol",
            Attribute::Color => "color",
            Attribute::Fill => "fill",
            Attribute::Number => "number",
        };
        f.write_str(name)
    }
}
