//! Player-facing text for guess results.
//!
//! Pure functions: no I/O, no state.

use super::{GameConfig, GuessResult};

/// Message for a result, with the attempts-left suffix when a cap applies.
pub fn format(result: &GuessResult, remaining: Option<i64>) -> String {
    format_with_hints(result, remaining, true)
}

/// Like [`format`], but drops the distance hint when `hints` is false.
pub fn format_with_hints(result: &GuessResult, remaining: Option<i64>, hints: bool) -> String {
    match *result {
        GuessResult::TooLow { delta } => {
            directional("My number is higher.", delta, remaining, hints)
        }
        GuessResult::TooHigh { delta } => {
            directional("My number is lower.", delta, remaining, hints)
        }
        GuessResult::Correct { attempts } => format!("Correct! Attempts: {}", attempts),
        GuessResult::OutOfRange { min, max } => format!("Number out of range {}..{}", min, max),
    }
}

fn directional(head: &str, delta: u32, remaining: Option<i64>, hints: bool) -> String {
    let mut text = String::from(head);
    if hints {
        text.push_str(&format!(" (Δ={})", delta));
    }
    if let Some(left) = remaining {
        text.push_str(&format!(" | Attempts left: {}", left));
    }
    text
}

/// Rules shown for the `help` command.
pub fn help_text(config: &GameConfig) -> String {
    let mut lines = vec![
        "Rules:".to_string(),
        format!(
            "- I pick a whole number in the range {}..{}.",
            config.min(),
            config.max()
        ),
        "- Enter a number and I answer: higher, lower or correct.".to_string(),
    ];
    if let Some(max) = config.max_attempts() {
        lines.push(format!("- You have {} attempts per round.", max));
    }
    if !config.allow_hints() {
        lines.push("- No distance hints on this difficulty.".to_string());
    }
    lines.push("- Commands: help, stats, exit.".to_string());
    lines.join("\n")
}
