use crate::debug_log;
use crate::engine::{DEFAULT_MAX_ATTEMPTS, GameStatus, GuessOutcome, Snapshot};
use crate::game_state::{GameInterface, UserAction};
use crate::wordbank::DEFAULT_WORDLIST_PATH;
use clap::Parser;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (built-in words are used if missing)
    #[arg(short = 'i', long = "input", default_value = DEFAULT_WORDLIST_PATH)]
    pub wordlist_path: PathBuf,

    /// Number of incorrect guesses allowed per game
    #[arg(
        short = 'a',
        long = "max-attempts",
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    /// Seed for reproducible word selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

enum ReplayInput {
    Yes,
    No,
    Invalid,
    Closed,
}

fn parse_replay(input: &str) -> ReplayInput {
    match input.trim().to_lowercase().as_str() {
        "y" => ReplayInput::Yes,
        "n" => ReplayInput::No,
        _ => ReplayInput::Invalid,
    }
}

/// Read one line, trimmed. `None` on end of input or a read error.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            log::warn!("Failed to read input: {e}");
            None
        }
    }
}

#[must_use]
pub fn outcome_message(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Invalid => "Please enter a single alphabetical character.".to_string(),
        GuessOutcome::Duplicate(c) => {
            format!("You have already guessed the letter '{c}'. Try a different one.")
        }
        GuessOutcome::Correct(c) => format!("Good job! The letter '{c}' is in the word."),
        GuessOutcome::Incorrect(c) => format!("Sorry, the letter '{c}' is not in the word."),
        GuessOutcome::GameOver => "This game is already over.".to_string(),
    }
}

#[must_use]
pub fn game_over_message(snapshot: &Snapshot) -> String {
    let word = snapshot.answer.as_deref().unwrap_or_default();
    match snapshot.status {
        GameStatus::Won => format!("Congratulations! You guessed the word '{word}' correctly!"),
        GameStatus::Lost => format!("Game Over! The word was '{word}'. Better luck next time!"),
        GameStatus::InProgress => "The game is still in progress.".to_string(),
    }
}

pub const WELCOME_MESSAGE: &str = "Welcome to Hangman Challenge!";
pub const GOODBYE_MESSAGE: &str = "Thank you for playing Hangman Challenge! Goodbye!";
const GUESS_PROMPT: &str = "Enter a letter to guess: ";
const REPLAY_PROMPT: &str = "Do you want to play again? (Y/N): ";
const REPLAY_INVALID: &str = "Invalid input. Please enter 'Y' for Yes or 'N' for No.";

/// Line-based implementation of the [`GameInterface`] trait.
///
/// Reads from any `BufRead` and writes to any `Write`, so games can be
/// scripted in tests.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn line(&mut self, text: impl fmt::Display) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            debug_log!("Write error: {}", e);
        }
    }

    fn prompt(&mut self, text: &str) {
        let result = write!(self.writer, "{text}").and_then(|()| self.writer.flush());
        if let Err(e) = result {
            debug_log!("Write error: {}", e);
        }
    }

    fn read_replay(&mut self) -> ReplayInput {
        self.prompt(REPLAY_PROMPT);
        read_trimmed_line(&mut self.reader).map_or(ReplayInput::Closed, |line| parse_replay(&line))
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_welcome(&mut self) {
        self.line(WELCOME_MESSAGE);
    }

    fn display_state(&mut self, snapshot: &Snapshot) {
        self.line(format_args!("\nCurrent Word: {}", snapshot.pattern_display()));
        self.line(format_args!(
            "Remaining Attempts: {}",
            snapshot.remaining_attempts
        ));
        self.line(format_args!(
            "Guessed Letters: {}",
            snapshot.guessed_display()
        ));
        if !snapshot.incorrect.is_empty() {
            self.line(format_args!(
                "Incorrect Letters: {}",
                snapshot.incorrect_display()
            ));
        }
    }

    fn read_guess(&mut self) -> UserAction {
        self.prompt(GUESS_PROMPT);
        read_trimmed_line(&mut self.reader).map_or(UserAction::Exit, UserAction::Guess)
    }

    fn display_outcome(&mut self, outcome: &GuessOutcome) {
        self.line(outcome_message(outcome));
    }

    fn display_game_over(&mut self, snapshot: &Snapshot) {
        self.line(game_over_message(snapshot));
    }

    fn ask_replay(&mut self) -> bool {
        loop {
            match self.read_replay() {
                ReplayInput::Yes => return true,
                ReplayInput::No => return false,
                ReplayInput::Closed => {
                    // Print a newline so the shell prompt starts cleanly.
                    self.line("");
                    return false;
                }
                ReplayInput::Invalid => self.line(REPLAY_INVALID),
            }
        }
    }

    fn display_goodbye(&mut self) {
        self.line(GOODBYE_MESSAGE);
    }

    fn display_exit_message(&mut self) {
        self.line("\nExiting.");
    }
}
