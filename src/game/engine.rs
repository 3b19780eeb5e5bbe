//! Guess evaluation for a single round.
//!
//! The engine holds the secret, the attempt counter and the guess history.
//! It has no phase field: a round is over when the caller sees
//! [`GuessResult::Correct`], and the attempt cap is the caller's to enforce.

use super::{GameConfig, GuessResult};
use crate::random::RandomSource;
use log::{debug, trace};
use std::cmp::Ordering;

pub struct GuessEngine<R: RandomSource> {
    config: GameConfig,
    random: R,
    secret: i32,
    attempts: u32,
    history: Vec<i32>,
}

impl<R: RandomSource> GuessEngine<R> {
    /// Create an engine and draw the first secret.
    pub fn new(config: GameConfig, mut random: R) -> Self {
        let secret = random.next_int(config.min(), config.max());
        Self {
            config,
            random,
            secret,
            attempts: 0,
            history: Vec::new(),
        }
    }

    /// Evaluate a guess against the secret.
    ///
    /// Out-of-range guesses are free: they leave attempts and history alone.
    pub fn evaluate_guess(&mut self, guess: i32) -> GuessResult {
        if !self.config.contains(guess) {
            debug!(
                "guess {} outside {}..{}",
                guess,
                self.config.min(),
                self.config.max()
            );
            return GuessResult::OutOfRange {
                min: self.config.min(),
                max: self.config.max(),
            };
        }

        self.attempts += 1;
        self.history.push(guess);

        let delta = guess.abs_diff(self.secret);
        let result = match guess.cmp(&self.secret) {
            Ordering::Less => GuessResult::TooLow { delta },
            Ordering::Greater => GuessResult::TooHigh { delta },
            Ordering::Equal => GuessResult::Correct {
                attempts: self.attempts,
            },
        };
        debug!("attempt {}: {:?}", self.attempts, result);
        result
    }

    /// `None` without a cap, otherwise `max_attempts - attempts`.
    ///
    /// Not clamped: goes negative if the caller keeps playing past the cap.
    pub fn remaining_attempts(&self) -> Option<i64> {
        self.config
            .max_attempts()
            .map(|max| i64::from(max) - i64::from(self.attempts))
    }

    /// True once a capped round has no attempts left.
    pub fn is_out_of_attempts(&self) -> bool {
        self.remaining_attempts().is_some_and(|left| left <= 0)
    }

    /// Only for after a round ends (or debugging).
    pub fn reveal_secret(&self) -> i32 {
        self.secret
    }

    /// Start a new round with the same config.
    pub fn reset(&mut self) {
        trace!("round reset after {} attempts", self.attempts);
        self.secret = self.random.next_int(self.config.min(), self.config.max());
        self.attempts = 0;
        self.history.clear();
    }

    /// Copy of this round's in-range guesses, oldest first.
    pub fn history_snapshot(&self) -> Vec<i32> {
        self.history.clone()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
