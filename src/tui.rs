//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides a full-screen terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringGuess` while a round is in progress
//! - `AskingReplay` after a win or loss
//! - `Finished` once the player quits

use crate::cli::{GOODBYE_MESSAGE, WELCOME_MESSAGE, game_over_message, outcome_message};
use crate::engine::{GameStatus, GuessOutcome, Snapshot};
use crate::game_state::{GameInterface, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const GALLOWS_WIDTH: u16 = 16;
const LAST_STAGE: u32 = 6;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const PATTERN_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

const GALLOWS: [[&str; 7]; 7] = [
    [
        "  +---+", "  |   |", "      |", "      |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "=========",
    ],
];

/// Drawing stage for the gallows, scaled so the last attempt always completes
/// the figure regardless of the attempt budget.
fn gallows_stage(snapshot: &Snapshot) -> usize {
    let max = snapshot.max_attempts.max(1);
    let stage = (snapshot.incorrect_count() * LAST_STAGE)
        .div_ceil(max)
        .min(LAST_STAGE);
    stage as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    AskingReplay,
    Finished,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    snapshot: Option<&'a Snapshot>,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    snapshot: Option<Snapshot>,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            snapshot: None,
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
            status: "Ready".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            snapshot: self.snapshot.as_ref(),
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(11),    // Gallows + word
                Constraint::Length(4),  // Messages
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);

        Self::render_title(f, chunks[0]);
        Self::render_gallows(f, body[0], ctx.snapshot);
        Self::render_word(f, body[1], ctx.snapshot);
        Self::render_messages(f, chunks[2], ctx.message, ctx.error_message);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
        let stage = snapshot.map_or(0, gallows_stage);
        let style = match snapshot.map(|s| s.status) {
            Some(GameStatus::Lost) => ERROR_STYLE,
            Some(GameStatus::Won) => SUCCESS_STYLE,
            _ => Style::default(),
        };
        let lines: Vec<Line> = GALLOWS[stage]
            .iter()
            .map(|row| Line::from(Span::styled(*row, style)))
            .collect();
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_word(f: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
        let mut lines = Vec::new();

        if let Some(snap) = snapshot {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", snap.pattern_display()),
                PATTERN_STYLE,
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Remaining attempts: ", INFO_STYLE),
                Span::raw(format!(
                    "{} / {}",
                    snap.remaining_attempts, snap.max_attempts
                )),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Guessed letters: ", INFO_STYLE),
                Span::raw(snap.guessed_display()),
            ]));
            if !snap.incorrect.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Incorrect letters: ", INFO_STYLE),
                    Span::styled(snap.incorrect_display(), ERROR_STYLE),
                ]));
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Word").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_messages(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();
        if !message.is_empty() {
            lines.push(Line::from(Span::styled(message, MESSAGE_STYLE)));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(Span::styled(error_message, ERROR_STYLE)));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type a letter to guess | ESC: Quit",
            TuiState::AskingReplay => "Y: Play again | N / ESC: Quit",
            TuiState::Finished => "Goodbye!",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Wait briefly for a key press. `Ok(None)` means nothing usable arrived.
    fn next_key() -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    /// Plain character typed without Ctrl or Alt. Chorded keys are shortcuts,
    /// not guesses.
    fn typed_char(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }

    fn is_quit(key: &KeyEvent) -> bool {
        key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self) {
        self.state = TuiState::EnteringGuess;
        self.message = WELCOME_MESSAGE.to_string();
        self.error_message.clear();
        self.status = "New game - type your first letter".to_string();
        self.draw_or_log();
    }

    fn display_state(&mut self, snapshot: &Snapshot) {
        self.snapshot = Some(snapshot.clone());
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> UserAction {
        self.state = TuiState::EnteringGuess;
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return UserAction::Exit;
            }

            match Self::next_key() {
                Ok(Some(key)) if Self::is_quit(&key) => return UserAction::Exit,
                Ok(Some(key)) => {
                    if let Some(c) = Self::typed_char(&key) {
                        debug_log!("read_guess() - Key '{}'", c);
                        return UserAction::Guess(c.to_string());
                    }
                    debug_log!("read_guess() - Ignoring key: {:?}", key);
                }
                Ok(None) => {}
                Err(e) => {
                    debug_log!("read_guess() - Input error: {}", e);
                    return UserAction::Exit;
                }
            }
        }
    }

    fn display_outcome(&mut self, outcome: &GuessOutcome) {
        let text = outcome_message(outcome);
        if outcome.is_accepted() {
            self.message = text;
            self.error_message.clear();
        } else {
            self.error_message = text;
        }
        self.status = match outcome {
            GuessOutcome::Correct(c) => format!("Revealed '{c}'"),
            GuessOutcome::Incorrect(c) => format!("Missed '{c}'"),
            _ => "Guess ignored".to_string(),
        };
        self.draw_or_log();
    }

    fn display_game_over(&mut self, snapshot: &Snapshot) {
        self.snapshot = Some(snapshot.clone());
        self.state = TuiState::AskingReplay;
        self.message = game_over_message(snapshot);
        self.error_message.clear();
        self.status = match snapshot.status {
            GameStatus::Won => "Game Over - You won!".to_string(),
            _ => "Game Over - You lost".to_string(),
        };
        self.draw_or_log();
    }

    fn ask_replay(&mut self) -> bool {
        self.state = TuiState::AskingReplay;
        loop {
            if self.draw().is_err() {
                return false;
            }

            match Self::next_key() {
                Ok(Some(key)) if Self::is_quit(&key) => return false,
                Ok(Some(key)) => match Self::typed_char(&key).map(|c| c.to_ascii_lowercase()) {
                    Some('y') => return true,
                    Some('n') => return false,
                    Some(_) => {
                        self.error_message =
                            "Invalid input. Press 'Y' for Yes or 'N' for No.".to_string();
                    }
                    None => {}
                },
                Ok(None) => {}
                Err(e) => {
                    debug_log!("ask_replay() - Input error: {}", e);
                    return false;
                }
            }
        }
    }

    fn display_goodbye(&mut self) {
        self.state = TuiState::Finished;
        self.message = GOODBYE_MESSAGE.to_string();
        self.error_message.clear();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.state = TuiState::Finished;
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
