//! Error types.
//!
//! Gameplay itself never fails: stale ids are ignored and short decks deal
//! what they have. Errors only exist at the edges, when text is parsed into
//! card ids or a configuration is checked.

use thiserror::Error;

/// Failure to parse a `CardId` or `Triad` from external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardIdError {
    #[error("card id must be 4 digits, got {0} characters")]
    Length(usize),

    #[error("card id contains non-digit {0:?}")]
    NotADigit(char),

    #[error("attribute value {0} is out of range (expected 1..=3)")]
    TriadOutOfRange(u8),

    #[error("card index {0} is out of range (expected 0..81)")]
    IndexOutOfRange(u8),
}

/// Invalid `SetConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("deal size must be positive")]
    ZeroDealSize,

    #[error("initial deal of {requested} exceeds the {available}-card deck")]
    InitialDealTooLarge { requested: usize, available: usize },
}
