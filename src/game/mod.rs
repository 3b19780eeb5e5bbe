//! Number guessing game: config, engine and result text.

pub mod engine;
pub mod feedback;
pub mod types;

pub use engine::GuessEngine;
pub use types::{Difficulty, GameConfig, GuessResult};
