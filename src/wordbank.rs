use crate::debug_log;
use crate::picker::WordPicker;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_WORDLIST_PATH: &str = "words.txt";

pub const DEFAULT_WORDS: [&str; 10] = [
    "python",
    "hangman",
    "challenge",
    "programming",
    "developer",
    "algorithm",
    "function",
    "variable",
    "iteration",
    "condition",
];

/// Non-empty pool of candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Drops entries that are empty or not purely ASCII alphabetic, since they
    /// can never be fully revealed. Returns `None` if nothing usable remains.
    #[must_use]
    pub fn new(words: Vec<String>) -> Option<Self> {
        let words: Vec<String> = words.into_iter().filter(|w| is_usable_word(w)).collect();
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick one word using `picker`. Out-of-range indices wrap around.
    pub fn choose<P: WordPicker + ?Sized>(&self, picker: &mut P) -> &str {
        let index = picker.pick_index(self.words.len()) % self.words.len();
        &self.words[index]
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

fn is_usable_word(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    if word.chars().all(|c| c.is_ascii_alphabetic()) {
        true
    } else {
        log::warn!("Skipping word list entry '{word}': not an ASCII alphabetic word");
        false
    }
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|word| is_usable_word(word))
        .map(ToString::to_string)
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if is_usable_word(word) {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Load the word pool from `path`, falling back to the built-in list when the
/// file is missing, unreadable, or has no usable words.
pub fn load_wordbank<P: AsRef<Path>>(path: P) -> WordBank {
    let path = path.as_ref();
    if !path.exists() {
        debug_log!(
            "Word list '{}' not found, using built-in words",
            path.display()
        );
        return WordBank::default();
    }

    match load_wordbank_from_file(path) {
        Ok(words) => WordBank::new(words).unwrap_or_else(|| {
            log::warn!(
                "Word list '{}' has no usable words, using built-in words",
                path.display()
            );
            WordBank::default()
        }),
        Err(e) => {
            log::warn!(
                "Failed to read word list '{}': {e}; using built-in words",
                path.display()
            );
            WordBank::default()
        }
    }
}
