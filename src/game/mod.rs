//! The Set game: selection cycle, dealing and resolution.
//!
//! ## Key Types
//!
//! - `SetGame`: Owner of all game state; the only mutator
//! - `SelectionPhase`: Where the selection cycle is
//! - `Resolution`: What happened to a cleared full selection
//! - `GameSnapshot`: Owned O(1) copy of the visible state

mod phase;
mod snapshot;
mod state;

pub use phase::{Resolution, SelectOutcome, SelectionPhase};
pub use snapshot::GameSnapshot;
pub use state::SetGame;
