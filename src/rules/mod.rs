//! Rules: the Set validity predicate and Set search.
//!
//! The state machine calls into these functions but never re-implements
//! the matching rule itself.

pub mod validator;

pub use validator::{find_set, find_sets, is_set, is_set_slice, third_card, Verdict};
