//! Core engine types: RNG, configuration, commands, errors.
//!
//! These are the building blocks the game state machine is assembled from.
//! None of them know about the selection cycle.

pub mod command;
pub mod config;
pub mod error;
pub mod rng;

pub use command::{Command, CommandRecord};
pub use config::{ResolutionPolicy, SetConfig};
pub use error::{ConfigError, ParseCardIdError};
pub use rng::GameRng;
