//! Parsing of console input lines.
//!
//! The engine only ever sees well-formed integers; everything else is sorted
//! out here.

/// Commands accepted at the guess prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Stats,
    Exit,
}

/// What a line at the guess prompt means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptInput {
    Command(Command),
    Guess(i32),
    Blank,
    Invalid,
}

pub fn parse_guess(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

pub fn parse_command(raw: &str) -> Option<Command> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "help" => Some(Command::Help),
        "stats" => Some(Command::Stats),
        "exit" => Some(Command::Exit),
        _ => None,
    }
}

/// Classify one line from the guess prompt. Commands win over numbers.
pub fn parse_prompt(raw: &str) -> PromptInput {
    if raw.trim().is_empty() {
        return PromptInput::Blank;
    }
    if let Some(command) = parse_command(raw) {
        return PromptInput::Command(command);
    }
    match parse_guess(raw) {
        Some(guess) => PromptInput::Guess(guess),
        None => PromptInput::Invalid,
    }
}

pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
