//! Guess - console number guessing game.
//!
//! The library holds the game core (config, engine, result text, session
//! statistics) plus the console plumbing the binary is built from.

pub mod build_info;
pub mod cli;
pub mod error;
pub mod game;
pub mod input;
pub mod random;
pub mod session;
pub mod stats;

pub use error::{CliError, GameError};
pub use game::{Difficulty, GameConfig, GuessEngine, GuessResult};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use stats::{SessionSummary, StatsTracker};
