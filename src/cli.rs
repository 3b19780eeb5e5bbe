//! Command-line options.

use crate::error::{CliError, GameError};
use crate::game::{Difficulty, GameConfig};

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Play(CliOptions),
    Help,
    Version,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Preset chosen on the command line (None = ask)
    pub difficulty: Option<Difficulty>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub max_attempts: Option<u32>,
    pub no_hints: bool,
    /// Random seed for reproducible secrets (None = OS entropy)
    pub seed: Option<u64>,
    pub json: bool,
}

impl CliOptions {
    fn is_custom(&self) -> bool {
        self.min.is_some() || self.max.is_some() || self.max_attempts.is_some() || self.no_hints
    }

    /// Config fixed by the flags, or `None` when the player should be asked.
    ///
    /// Custom flags override the chosen preset (NORMAL when none was given).
    pub fn resolve_config(&self) -> Result<Option<GameConfig>, GameError> {
        if !self.is_custom() {
            return Ok(self.difficulty.map(GameConfig::from_difficulty));
        }
        let base = GameConfig::from_difficulty(self.difficulty.unwrap_or(Difficulty::Normal));
        GameConfig::new(
            self.min.unwrap_or(base.min()),
            self.max.unwrap_or(base.max()),
            self.max_attempts.or(base.max_attempts()),
            base.allow_hints() && !self.no_hints,
        )
        .map(Some)
    }
}

fn value_of<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, CliError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingValue(flag.to_string()))
}

fn parse_value<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

/// Parse `std::env::args()`-style arguments (program name first).
pub fn parse_args(args: &[String]) -> Result<CliAction, CliError> {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-d" | "--difficulty" => {
                options.difficulty = Some(value_of(args, i, flag)?.parse()?);
                i += 1;
            }
            "--min" => {
                options.min = Some(parse_value(value_of(args, i, flag)?, flag)?);
                i += 1;
            }
            "--max" => {
                options.max = Some(parse_value(value_of(args, i, flag)?, flag)?);
                i += 1;
            }
            "--max-attempts" => {
                let value = value_of(args, i, flag)?;
                let cap: u32 = parse_value(value, flag)?;
                if cap == 0 {
                    return Err(CliError::InvalidValue {
                        flag: flag.to_string(),
                        value: value.to_string(),
                    });
                }
                options.max_attempts = Some(cap);
                i += 1;
            }
            "-s" | "--seed" => {
                options.seed = Some(parse_value(value_of(args, i, flag)?, flag)?);
                i += 1;
            }
            "--no-hints" => options.no_hints = true,
            "--json" => options.json = true,
            "-h" | "--help" => return Ok(CliAction::Help),
            "-v" | "--version" => return Ok(CliAction::Version),
            other => return Err(CliError::UnknownArgument(other.to_string())),
        }
        i += 1;
    }

    Ok(CliAction::Play(options))
}

pub fn help_message() -> String {
    [
        "guess - guess the secret number",
        "",
        "USAGE:",
        "    guess [OPTIONS]",
        "",
        "OPTIONS:",
        "    -d, --difficulty <D>    easy | normal | hard (or 1-3); asked when omitted",
        "    --min <N>               Lower bound of a custom range",
        "    --max <N>               Upper bound of a custom range",
        "    --max-attempts <N>      Attempts per round for a custom range (at least 1)",
        "    --no-hints              Hide the distance to the secret",
        "    -s, --seed <S>          Random seed for reproducible secrets",
        "    --json                  Print a JSON session summary at the end",
        "    -v, --version           Show version information",
        "    -h, --help              Show this help",
        "",
        "Set RUST_LOG=debug for diagnostic logging on stderr.",
    ]
    .join("\n")
}
