//! Guessing game data structures.
//!
//! Difficulty presets, the validated round configuration and the outcome of a
//! single guess.

use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Normal => "NORMAL",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    /// Accepts preset names in any case, or the menu numbers 1-3.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Self::Easy),
            "2" | "normal" => Ok(Self::Normal),
            "3" | "hard" => Ok(Self::Hard),
            _ => Err(GameError::UnknownDifficulty(s.trim().to_string())),
        }
    }
}

/// Validated configuration for a game session.
///
/// Immutable once built: a new difficulty means a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    min: i32,
    max: i32,
    /// `None` = unlimited attempts
    max_attempts: Option<u32>,
    allow_hints: bool,
}

impl GameConfig {
    /// Build a config, rejecting ranges where `min >= max`.
    pub fn new(
        min: i32,
        max: i32,
        max_attempts: Option<u32>,
        allow_hints: bool,
    ) -> Result<Self, GameError> {
        if min >= max {
            return Err(GameError::InvalidConfig { min, max });
        }
        Ok(Self {
            min,
            max,
            max_attempts,
            allow_hints,
        })
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let (max, max_attempts, allow_hints) = match difficulty {
            Difficulty::Easy => (50, None, true),
            Difficulty::Normal => (100, None, true),
            Difficulty::Hard => (100, Some(7), false),
        };
        Self {
            min: 0,
            max,
            max_attempts,
            allow_hints,
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    pub fn allow_hints(&self) -> bool {
        self.allow_hints
    }

    /// True when `guess` lies in `[min, max]`.
    pub fn contains(&self, guess: i32) -> bool {
        (self.min..=self.max).contains(&guess)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Normal)
    }
}

/// Outcome of evaluating one guess. Exactly one variant per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Secret is greater than the guess; `delta = secret - guess`.
    TooLow { delta: u32 },
    /// Secret is less than the guess; `delta = guess - secret`.
    TooHigh { delta: u32 },
    /// Guess matched; `attempts` counts this guess.
    Correct { attempts: u32 },
    /// Guess outside the configured bounds. Free: no attempt is consumed.
    OutOfRange { min: i32, max: i32 },
}

impl GuessResult {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    pub fn consumes_attempt(&self) -> bool {
        !matches!(self, Self::OutOfRange { .. })
    }
}
