// Conditional logging macros - only active in debug builds

use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_NAME: &str = "hangman.log";

/// Where log records end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    Stderr,
    /// Append to `hangman.log` in the user cache directory. Used by the TUI,
    /// which owns the terminal while it runs.
    File,
}

/// Location of the log file used by [`LogDestination::File`].
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("hangman").join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Resolve the file target. Falls back to discarding records when the file
/// cannot be opened; the terminal belongs to the TUI, so stderr is not an option.
fn file_target(path: Option<PathBuf>) -> (Target, Option<PathBuf>) {
    let Some(path) = path else {
        eprintln!("Warning: no cache directory available; logging disabled");
        return (Target::Pipe(Box::new(io::sink())), None);
    };
    match open_log_file(&path) {
        Ok(file) => (Target::Pipe(Box::new(file)), Some(path)),
        Err(e) => {
            eprintln!(
                "Warning: cannot open log file '{}': {e}; logging disabled",
                path.display()
            );
            (Target::Pipe(Box::new(io::sink())), None)
        }
    }
}

/// Install the global `env_logger` logger.
///
/// `RUST_LOG` overrides the default `warn` filter. Returns the log file path
/// when records are written to a file. Never fails: a log file that cannot be
/// opened only disables logging.
pub fn init_logging(destination: LogDestination) -> Option<PathBuf> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let path = match destination {
        LogDestination::Stderr => {
            builder.target(Target::Stderr);
            None
        }
        LogDestination::File => {
            let (target, path) = file_target(log_file_path());
            builder.target(target);
            path
        }
    };

    // A logger may already be installed (tests, embedding); keep the existing one.
    if builder.try_init().is_err() {
        debug_log!("Logger already initialized");
    }
    path
}
