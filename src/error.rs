//! Error types for game configuration and command-line parsing.

use thiserror::Error;

/// Errors raised while building game values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The range bounds do not satisfy `min < max`.
    #[error("Invalid config: min ({min}) must be less than max ({max})")]
    InvalidConfig { min: i32, max: i32 },

    /// A difficulty name that is not one of the presets.
    #[error("Unknown difficulty: {0:?} (expected easy, normal or hard)")]
    UnknownDifficulty(String),
}

/// Errors raised while reading command-line options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid value for {flag}: {value:?}")]
    InvalidValue { flag: String, value: String },

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error(transparent)]
    Config(#[from] GameError),
}
