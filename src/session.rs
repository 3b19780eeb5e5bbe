//! Console session loop.
//!
//! Drives one [`GuessEngine`] and one [`StatsTracker`] from line-based input.
//! Generic over the reader and writer so whole sessions can be replayed in
//! tests from a byte buffer.

use crate::game::feedback::{format_with_hints, help_text};
use crate::game::{Difficulty, GameConfig, GuessEngine, GuessResult};
use crate::input::{parse_prompt, parse_yes_no, Command, PromptInput};
use crate::random::RandomSource;
use crate::stats::StatsTracker;
use log::info;
use std::io::{self, BufRead, Write};

/// Read one line, trimmed. `None` at end of input.
fn read_trimmed<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for a difficulty until the answer is valid. End of input picks NORMAL.
pub fn choose_difficulty<I: BufRead, W: Write>(
    input: &mut I,
    output: &mut W,
) -> io::Result<Difficulty> {
    loop {
        writeln!(output, "Choose difficulty: 1) EASY  2) NORMAL  3) HARD")?;
        output.flush()?;
        let Some(line) = read_trimmed(input)? else {
            return Ok(Difficulty::Normal);
        };
        match line.parse() {
            Ok(difficulty) => return Ok(difficulty),
            Err(_) => writeln!(output, "Didn't get that. Enter 1, 2 or 3.")?,
        }
    }
}

pub struct Session<R: RandomSource, I: BufRead, W: Write> {
    engine: GuessEngine<R>,
    stats: StatsTracker,
    input: I,
    output: W,
}

impl<R: RandomSource, I: BufRead, W: Write> Session<R, I, W> {
    pub fn new(config: GameConfig, random: R, input: I, output: W) -> Self {
        Self {
            engine: GuessEngine::new(config, random),
            stats: StatsTracker::new(),
            input,
            output,
        }
    }

    /// Play until `exit`, end of input, or a declined replay.
    ///
    /// Returns the session statistics for the caller to report on.
    pub fn run(mut self) -> io::Result<StatsTracker> {
        let config = *self.engine.config();
        writeln!(self.output, "=== Guess {}..{} ===", config.min(), config.max())?;
        writeln!(self.output, "Commands: help | exit | stats")?;

        loop {
            if self.engine.is_out_of_attempts() {
                writeln!(self.output, "No attempts allowed this round.")?;
                break;
            }
            write!(
                self.output,
                "Enter a number [{}..{}] or a command: ",
                config.min(),
                config.max()
            )?;
            self.output.flush()?;

            let Some(line) = read_trimmed(&mut self.input)? else {
                writeln!(self.output)?;
                writeln!(self.output, "EOF. Exiting.")?;
                break;
            };

            match parse_prompt(&line) {
                PromptInput::Blank => continue,
                PromptInput::Command(Command::Exit) => {
                    writeln!(self.output, "See you!")?;
                    break;
                }
                PromptInput::Command(Command::Help) => {
                    writeln!(self.output, "{}", help_text(&config))?;
                }
                PromptInput::Command(Command::Stats) => {
                    writeln!(self.output, "{}", self.stats.format_session())?;
                }
                PromptInput::Invalid => {
                    writeln!(self.output, "Please enter a whole number.")?;
                }
                PromptInput::Guess(guess) => {
                    if !self.play_guess(guess)? {
                        break;
                    }
                }
            }
        }

        info!(
            "session over: {} won, {} lost",
            self.stats.rounds_played(),
            self.stats.rounds_lost()
        );
        writeln!(self.output)?;
        writeln!(self.output, "=== Summary ===")?;
        writeln!(self.output, "{}", self.stats.finalize_and_format())?;
        self.output.flush()?;
        Ok(self.stats)
    }

    /// Evaluate one guess. Returns false when the session should end.
    fn play_guess(&mut self, guess: i32) -> io::Result<bool> {
        let result = self.engine.evaluate_guess(guess);
        self.stats.on_guess(&result);

        let hints = self.engine.config().allow_hints();
        writeln!(
            self.output,
            "{}",
            format_with_hints(&result, self.engine.remaining_attempts(), hints)
        )?;

        match result {
            GuessResult::Correct { attempts } => {
                writeln!(
                    self.output,
                    "The secret number: {} (guessed in {} attempts)",
                    self.engine.reveal_secret(),
                    attempts
                )?;
                self.stats.on_round_finished(attempts);
                info!("round won in {} attempts", attempts);
            }
            _ if result.consumes_attempt() && self.engine.is_out_of_attempts() => {
                writeln!(
                    self.output,
                    "Out of attempts! The number was {}.",
                    self.engine.reveal_secret()
                )?;
                self.stats.on_round_lost();
                info!("round lost after {} attempts", self.engine.attempts());
            }
            _ => return Ok(true),
        }

        if self.ask_play_again()? {
            self.engine.reset();
            self.stats.start_new_round();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn ask_play_again(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "Play again? (y/n): ")?;
            self.output.flush()?;
            let Some(line) = read_trimmed(&mut self.input)? else {
                return Ok(false);
            };
            match parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.output, "Please answer y/n.")?,
            }
        }
    }
}
