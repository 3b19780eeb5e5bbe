//! Session statistics.
//!
//! Aggregates completed rounds across a session. Nothing is discarded: the
//! per-round list grows for the lifetime of the session.

use crate::game::GuessResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Append-only sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    items: Vec<T>,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> History<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a History<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Serializable snapshot of a session, printed by `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub session_started_at: DateTime<Utc>,
    pub elapsed_seconds: i64,
    pub rounds_played: u32,
    pub rounds_lost: u32,
    pub attempts_per_round: Vec<u32>,
    pub best_attempts: Option<u32>,
    pub average_attempts: Option<f64>,
    pub median_attempts: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct StatsTracker {
    session_start: DateTime<Utc>,
    round_start: DateTime<Utc>,
    rounds_played: u32,
    rounds_lost: u32,
    best_attempts: Option<u32>,
    attempts_per_round: History<u32>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Tracker whose session and first round began at `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            session_start: now,
            round_start: now,
            rounds_played: 0,
            rounds_lost: 0,
            best_attempts: None,
            attempts_per_round: History::new(),
        }
    }

    /// Per-guess hook. Stats only change when a round finishes.
    pub fn on_guess(&mut self, _result: &GuessResult) {}

    pub fn on_round_finished(&mut self, attempts: u32) {
        self.attempts_per_round.push(attempts);
        self.rounds_played += 1;
        self.best_attempts = Some(match self.best_attempts {
            Some(best) => best.min(attempts),
            None => attempts,
        });
    }

    /// A capped round ran out of attempts without a win.
    pub fn on_round_lost(&mut self) {
        self.rounds_lost += 1;
    }

    pub fn start_new_round(&mut self) {
        self.start_new_round_at(Utc::now());
    }

    pub fn start_new_round_at(&mut self, now: DateTime<Utc>) {
        self.round_start = now;
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn rounds_lost(&self) -> u32 {
        self.rounds_lost
    }

    pub fn best_attempts(&self) -> Option<u32> {
        self.best_attempts
    }

    pub fn attempts_per_round(&self) -> Vec<u32> {
        self.attempts_per_round.to_vec()
    }

    pub fn session_started_at(&self) -> DateTime<Utc> {
        self.session_start
    }

    pub fn session_elapsed_at(&self, now: DateTime<Utc>) -> i64 {
        (now - self.session_start).num_seconds().max(0)
    }

    pub fn round_elapsed_at(&self, now: DateTime<Utc>) -> i64 {
        (now - self.round_start).num_seconds().max(0)
    }

    pub fn average_attempts(&self) -> Option<f64> {
        if self.attempts_per_round.is_empty() {
            return None;
        }
        let total: u64 = self.attempts_per_round.iter().map(|&a| u64::from(a)).sum();
        Some(total as f64 / self.attempts_per_round.len() as f64)
    }

    pub fn median_attempts(&self) -> Option<f64> {
        let mut sorted = self.attempts_per_round.to_vec();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Some(f64::from(sorted[mid]))
        } else {
            Some((f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0)
        }
    }

    pub fn format_session(&self) -> String {
        self.format_session_at(Utc::now())
    }

    pub fn format_session_at(&self, now: DateTime<Utc>) -> String {
        let attempts = self
            .attempts_per_round
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let best = self
            .best_attempts
            .map_or_else(|| "-".to_string(), |b| b.to_string());
        format!(
            "Session: {} s\nRounds played: {}\nAttempts per round: {}\nBest result (fewer is better): {}",
            self.session_elapsed_at(now),
            self.rounds_played,
            attempts,
            best
        )
    }

    /// End-of-session text. Currently the same as [`Self::format_session`].
    pub fn finalize_and_format(&self) -> String {
        self.finalize_and_format_at(Utc::now())
    }

    pub fn finalize_and_format_at(&self, now: DateTime<Utc>) -> String {
        self.format_session_at(now)
    }

    pub fn summary_at(&self, now: DateTime<Utc>) -> SessionSummary {
        SessionSummary {
            session_started_at: self.session_start,
            elapsed_seconds: self.session_elapsed_at(now),
            rounds_played: self.rounds_played,
            rounds_lost: self.rounds_lost,
            attempts_per_round: self.attempts_per_round.to_vec(),
            best_attempts: self.best_attempts,
            average_attempts: self.average_attempts(),
            median_attempts: self.median_attempts(),
        }
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
