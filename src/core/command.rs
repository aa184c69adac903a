//! Command representation and history.
//!
//! Every mutation of a game is one of a small set of commands. Hosts can
//! call the matching `SetGame` methods directly, or build a `Command` value
//! (e.g. from a UI event or a replay file) and hand it to `SetGame::apply`.
//!
//! Every executed command is appended to the game's history as a
//! `CommandRecord`, which is enough to replay a seeded game exactly.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A game command.
///
/// ## Example
///
/// ```
/// use set_engine::core::Command;
///
/// let deal = Command::Deal(3);
/// let pick = Command::Select("1231".parse().unwrap());
///
/// assert!(!deal.is_no_arg());
/// assert_eq!(pick.card().map(|id| id.to_string()), Some("1231".to_string()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Start over with a fresh deck.
    NewGame,
    /// Deal up to `n` cards from the deck.
    Deal(usize),
    /// Toggle selection of a card in play.
    Select(CardId),
    /// Annotate a full selection as matched or mismatched.
    Evaluate,
    /// Reorder the cards in play.
    Shuffle,
}

impl Command {
    /// The card this command points at, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            Command::Select(id) => Some(*id),
            _ => None,
        }
    }

    /// Check if this command carries no argument.
    #[must_use]
    pub fn is_no_arg(&self) -> bool {
        matches!(self, Command::NewGame | Command::Evaluate | Command::Shuffle)
    }
}

/// A recorded command with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command executed.
    pub command: Command,

    /// Game number when the command ran.
    pub game: u64,

    /// Sequence number within the game (for ordering).
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(command: Command, game: u64, sequence: u32) -> Self {
        Self {
            command,
            game,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Triad};

    fn card_id() -> CardId {
        Card::new(Triad::One, Triad::Two, Triad::Three, Triad::One).id()
    }

    #[test]
    fn test_command_card() {
        assert_eq!(Command::Select(card_id()).card(), Some(card_id()));
        assert_eq!(Command::Deal(3).card(), None);
        assert_eq!(Command::NewGame.card(), None);
    }

    #[test]
    fn test_command_no_arg() {
        assert!(Command::NewGame.is_no_arg());
        assert!(Command::Evaluate.is_no_arg());
        assert!(Command::Shuffle.is_no_arg());
        assert!(!Command::Deal(1).is_no_arg());
        assert!(!Command::Select(card_id()).is_no_arg());
    }

    #[test]
    fn test_command_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |c: &Command| {
            let mut h = DefaultHasher::new();
            c.hash(&mut h);
            h.finish()
        };

        assert_eq!(hash(&Command::Deal(3)), hash(&Command::Deal(3)));
        assert_ne!(hash(&Command::Deal(3)), hash(&Command::Deal(4)));
    }

    #[test]
    fn test_command_record() {
        let record = CommandRecord::new(Command::Select(card_id()), 2, 5);

        assert_eq!(record.command, Command::Select(card_id()));
        assert_eq!(record.game, 2);
        assert_eq!(record.sequence, 5);
    }

    #[test]
    fn test_command_record_serialization() {
        let record = CommandRecord::new(Command::Deal(12), 1, 0);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: CommandRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
