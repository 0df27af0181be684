use anyhow::{Context, Result};
use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::{LogDestination, init_logging};
use hangman::tui::TuiInterface;
use hangman::{GameInterface, GameSession, RandomPicker, WordPicker, game_loop, load_wordbank};
use std::io;
use std::num::NonZeroU32;

fn main() -> Result<()> {
    let cli = parse_cli();

    let destination = if cli.tui {
        LogDestination::File
    } else {
        LogDestination::Stderr
    };
    let log_path = init_logging(destination);
    if let Some(path) = &log_path {
        log::info!("Logging to {}", path.display());
    }

    let bank = load_wordbank(&cli.wordlist_path);
    log::info!(
        "Loaded {} words (source: {})",
        bank.len(),
        cli.wordlist_path.display()
    );

    let max_attempts =
        NonZeroU32::new(cli.max_attempts).context("max attempts must be at least 1")?;
    let picker: Box<dyn WordPicker> = match cli.seed {
        Some(seed) => Box::new(RandomPicker::seeded(seed)),
        None => Box::new(RandomPicker::new()),
    };
    let mut session = GameSession::new(bank, max_attempts, picker);

    let mut interface: Box<dyn GameInterface> = if cli.tui {
        Box::new(TuiInterface::new().context("failed to initialize terminal UI")?)
    } else {
        let stdin = io::stdin();
        Box::new(CliInterface::new(stdin.lock(), io::stdout()))
    };

    let rounds = game_loop(&mut session, interface.as_mut());
    log::info!("Session ended after {rounds} round(s)");
    Ok(())
}
