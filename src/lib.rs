// Library interface for hangman
// This allows integration tests to access internal modules

pub mod logging;

pub mod cli;
pub mod engine;
pub mod game_state;
pub mod picker;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{GameSession, GameStatus, GuessOutcome, GuessResult, Snapshot};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use picker::{FixedPicker, RandomPicker, WordPicker};
pub use wordbank::{WordBank, load_wordbank, load_wordbank_from_file, load_wordbank_from_str};
