//! Hangman game engine.
//!
//! [`GameSession`] owns all state for one target word and enforces the rules.
//! It performs no I/O: every guess returns a [`GuessResult`] describing what
//! happened plus a [`Snapshot`] of the state afterwards.
//!
//! # State Machine
//! - `InProgress` → `Won` once every position is revealed
//! - `InProgress` → `Lost` once the remaining attempts reach zero
//! - `reset()` returns to `InProgress` from any state

use crate::picker::{RandomPicker, WordPicker};
use crate::wordbank::WordBank;
use crate::{debug_log, info_log};
use rand::rngs::ThreadRng;
use std::collections::BTreeSet;
use std::num::NonZeroU32;

pub const PLACEHOLDER: char = '_';
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Outcome category of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not exactly one ASCII letter. Nothing changed.
    Invalid,
    /// Letter was already guessed. Nothing changed.
    Duplicate(char),
    Correct(char),
    Incorrect(char),
    /// The session has already been won or lost. Nothing changed.
    GameOver,
}

impl GuessOutcome {
    /// Whether this guess changed the session.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Correct(_) | Self::Incorrect(_))
    }
}

/// Owned view of a session, taken after a guess or on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub pattern: Vec<char>,
    pub remaining_attempts: u32,
    pub max_attempts: u32,
    pub guessed: Vec<char>,
    pub incorrect: Vec<char>,
    pub status: GameStatus,
    /// Only revealed once the game is over.
    pub answer: Option<String>,
}

impl Snapshot {
    /// Pattern with characters separated by spaces, e.g. `c _ t`.
    #[must_use]
    pub fn pattern_display(&self) -> String {
        join_chars(&self.pattern)
    }

    #[must_use]
    pub fn guessed_display(&self) -> String {
        join_chars(&self.guessed)
    }

    #[must_use]
    pub fn incorrect_display(&self) -> String {
        join_chars(&self.incorrect)
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.max_attempts - self.remaining_attempts
    }
}

fn join_chars(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len() * 2);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub outcome: GuessOutcome,
    pub snapshot: Snapshot,
}

/// Fold raw input to a guessable letter: exactly one ASCII alphabetic
/// character, lowercased.
fn fold_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// One game of Hangman bound to a single target word.
#[derive(Debug)]
pub struct GameSession<P: WordPicker = RandomPicker<ThreadRng>> {
    bank: WordBank,
    picker: P,
    max_attempts: NonZeroU32,
    target_word: String,
    remaining_attempts: u32,
    guessed_letters: BTreeSet<char>,
    correct_letters: BTreeSet<char>,
    incorrect_letters: BTreeSet<char>,
    revealed: Vec<char>,
    status: GameStatus,
}

impl<P: WordPicker> GameSession<P> {
    /// Create a session and pick its first target word.
    pub fn new(bank: WordBank, max_attempts: NonZeroU32, picker: P) -> Self {
        let mut session = Self {
            bank,
            picker,
            max_attempts,
            target_word: String::new(),
            remaining_attempts: max_attempts.get(),
            guessed_letters: BTreeSet::new(),
            correct_letters: BTreeSet::new(),
            incorrect_letters: BTreeSet::new(),
            revealed: Vec::new(),
            status: GameStatus::InProgress,
        };
        session.reset();
        session
    }

    /// Pick a new target word from the pool and clear all progress.
    pub fn reset(&mut self) {
        self.target_word = self.bank.choose(&mut self.picker).to_ascii_lowercase();
        self.remaining_attempts = self.max_attempts.get();
        self.guessed_letters.clear();
        self.correct_letters.clear();
        self.incorrect_letters.clear();
        self.revealed = vec![PLACEHOLDER; self.target_word.chars().count()];
        self.status = GameStatus::InProgress;
        info_log!(
            "New game: {} letters, {} attempts",
            self.revealed.len(),
            self.remaining_attempts
        );
    }

    /// Submit one guess. Never fails: invalid, repeated, and late guesses
    /// are reported through [`GuessOutcome`] and leave the state untouched.
    pub fn guess(&mut self, input: &str) -> GuessResult {
        let outcome = self.apply_guess(input);
        debug_log!("guess({input:?}) -> {outcome:?}");
        GuessResult {
            outcome,
            snapshot: self.snapshot(),
        }
    }

    fn apply_guess(&mut self, input: &str) -> GuessOutcome {
        if self.status.is_over() {
            return GuessOutcome::GameOver;
        }

        let Some(letter) = fold_letter(input) else {
            return GuessOutcome::Invalid;
        };

        if !self.guessed_letters.insert(letter) {
            return GuessOutcome::Duplicate(letter);
        }

        let outcome = if self.target_word.contains(letter) {
            self.correct_letters.insert(letter);
            for (slot, c) in self.revealed.iter_mut().zip(self.target_word.chars()) {
                if c == letter {
                    *slot = letter;
                }
            }
            GuessOutcome::Correct(letter)
        } else {
            self.incorrect_letters.insert(letter);
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            GuessOutcome::Incorrect(letter)
        };

        self.update_status();
        outcome
    }

    // Win is checked first: a complete pattern always wins.
    fn update_status(&mut self) {
        if !self.revealed.contains(&PLACEHOLDER) {
            self.status = GameStatus::Won;
            info_log!("Game won with {} attempts left", self.remaining_attempts);
        } else if self.remaining_attempts == 0 {
            self.status = GameStatus::Lost;
            info_log!("Game lost");
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pattern: self.revealed.clone(),
            remaining_attempts: self.remaining_attempts,
            max_attempts: self.max_attempts.get(),
            guessed: self.guessed_letters.iter().copied().collect(),
            incorrect: self.incorrect_letters.iter().copied().collect(),
            status: self.status,
            answer: self.status.is_over().then(|| self.target_word.clone()),
        }
    }

    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.get()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    #[must_use]
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    #[must_use]
    pub fn correct_letters(&self) -> &BTreeSet<char> {
        &self.correct_letters
    }

    #[must_use]
    pub fn incorrect_letters(&self) -> &BTreeSet<char> {
        &self.incorrect_letters
    }

    #[must_use]
    pub fn revealed_pattern(&self) -> &[char] {
        &self.revealed
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Only meaningful once [`is_over`](Self::is_over) is true.
    #[must_use]
    pub fn did_win(&self) -> bool {
        self.status == GameStatus::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::FixedPicker;

    fn session(word: &str, attempts: u32) -> GameSession<FixedPicker> {
        let bank = WordBank::new(vec![word.to_string()]).unwrap();
        GameSession::new(bank, NonZeroU32::new(attempts).unwrap(), FixedPicker(0))
    }

    fn pattern(s: &GameSession<FixedPicker>) -> String {
        s.revealed_pattern().iter().collect()
    }

    fn assert_invariants(s: &GameSession<FixedPicker>) {
        let union: BTreeSet<char> = s
            .correct_letters()
            .union(s.incorrect_letters())
            .copied()
            .collect();
        assert_eq!(&union, s.guessed_letters());
        assert!(s.correct_letters().is_disjoint(s.incorrect_letters()));
        assert_eq!(
            s.remaining_attempts(),
            s.max_attempts() - s.incorrect_letters().len() as u32
        );
        assert_eq!(s.revealed_pattern().len(), s.target_word().len());
        for (shown, actual) in s.revealed_pattern().iter().zip(s.target_word().chars()) {
            if s.correct_letters().contains(&actual) {
                assert_eq!(*shown, actual);
            } else {
                assert_eq!(*shown, PLACEHOLDER);
            }
        }
    }

    #[test]
    fn test_new_session_is_fresh() {
        let s = session("cat", 6);
        assert_eq!(s.target_word(), "cat");
        assert_eq!(pattern(&s), "___");
        assert_eq!(s.remaining_attempts(), 6);
        assert!(s.guessed_letters().is_empty());
        assert_eq!(s.status(), GameStatus::InProgress);
        assert!(!s.is_over());
    }

    #[test]
    fn test_unplayable_words_never_become_targets() {
        let bank = WordBank::new(vec![String::new(), "new york".to_string(), "ox".to_string()])
            .unwrap();
        for index in 0..3 {
            let mut s = GameSession::new(bank.clone(), NonZeroU32::new(6).unwrap(), FixedPicker(index));
            assert_eq!(s.target_word(), "ox");
            assert_eq!(pattern(&s), "__");
            assert_eq!(s.guess("z").outcome, GuessOutcome::Incorrect('z'));
            assert_eq!(s.status(), GameStatus::InProgress);
        }
    }

    #[test]
    fn test_target_word_is_lowercased() {
        let s = session("HangMan", 6);
        assert_eq!(s.target_word(), "hangman");
    }

    #[test]
    fn test_scenario_win_in_order() {
        let mut s = session("cat", 6);
        let expected = ["c__", "ca_", "cat"];
        for (letter, want) in ["c", "a", "t"].iter().zip(expected) {
            let result = s.guess(letter);
            assert!(matches!(result.outcome, GuessOutcome::Correct(_)));
            assert_eq!(pattern(&s), want);
            assert_invariants(&s);
        }
        assert_eq!(s.status(), GameStatus::Won);
        assert!(s.did_win());
        assert_eq!(s.remaining_attempts(), 6);
    }

    #[test]
    fn test_scenario_loss_then_rejected() {
        let mut s = session("cat", 2);
        assert_eq!(s.guess("x").outcome, GuessOutcome::Incorrect('x'));
        assert_eq!(s.remaining_attempts(), 1);
        assert_eq!(s.status(), GameStatus::InProgress);

        assert_eq!(s.guess("y").outcome, GuessOutcome::Incorrect('y'));
        assert_eq!(s.remaining_attempts(), 0);
        assert_eq!(s.status(), GameStatus::Lost);
        assert!(!s.did_win());

        let before = s.snapshot();
        let result = s.guess("z");
        assert_eq!(result.outcome, GuessOutcome::GameOver);
        assert_eq!(result.snapshot, before);
        assert!(!s.guessed_letters().contains(&'z'));
    }

    #[test]
    fn test_invalid_input_changes_nothing() {
        let mut s = session("cat", 6);
        let before = s.snapshot();
        for input in ["5", "ab", "", " ", "é", "-", "a "] {
            let result = s.guess(input);
            assert_eq!(result.outcome, GuessOutcome::Invalid, "input {input:?}");
            assert_eq!(result.snapshot, before);
        }
    }

    #[test]
    fn test_case_fold_duplicate() {
        let mut s = session("cat", 6);
        assert_eq!(s.guess("A").outcome, GuessOutcome::Correct('a'));
        let before = s.snapshot();
        let result = s.guess("a");
        assert_eq!(result.outcome, GuessOutcome::Duplicate('a'));
        assert_eq!(result.snapshot, before);
    }

    #[test]
    fn test_duplicate_incorrect_consumes_no_attempt() {
        let mut s = session("cat", 6);
        s.guess("q");
        assert_eq!(s.remaining_attempts(), 5);
        assert_eq!(s.guess("Q").outcome, GuessOutcome::Duplicate('q'));
        assert_eq!(s.remaining_attempts(), 5);
        assert_eq!(pattern(&s), "___");
    }

    #[test]
    fn test_repeated_letters_revealed_together() {
        let mut s = session("banana", 6);
        s.guess("a");
        assert_eq!(pattern(&s), "_a_a_a");
        s.guess("n");
        assert_eq!(pattern(&s), "_anana");
    }

    #[test]
    fn test_win_on_last_attempt() {
        let mut s = session("ab", 2);
        s.guess("z");
        assert_eq!(s.remaining_attempts(), 1);
        s.guess("a");
        s.guess("b");
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.remaining_attempts(), 1);
    }

    #[test]
    fn test_single_attempt_loss() {
        let mut s = session("ab", 1);
        s.guess("z");
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.remaining_attempts(), 0);
    }

    #[test]
    fn test_each_valid_guess_lands_in_exactly_one_set() {
        let mut s = session("rust", 26);
        for c in 'a'..='z' {
            if s.is_over() {
                break;
            }
            s.guess(&c.to_string());
            assert!(s.guessed_letters().contains(&c));
            assert!(s.correct_letters().contains(&c) ^ s.incorrect_letters().contains(&c));
            assert_invariants(&s);
        }
        assert_eq!(s.status(), GameStatus::Won);
    }

    #[test]
    fn test_pattern_length_stable_over_many_sequences() {
        let inputs = ["e", "E", "x", "7", "lm", "t", "a", "z", "q", "s", "o", "r"];
        for word in ["a", "zebra", "mississippi", "rhythm"] {
            for offset in 0..inputs.len() {
                let mut s = session(word, 4);
                for input in inputs.iter().cycle().skip(offset).take(inputs.len()) {
                    s.guess(input);
                    assert_eq!(s.revealed_pattern().len(), word.len());
                    assert_invariants(&s);
                }
            }
        }
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut s = session("cat", 3);
        s.guess("x");
        s.guess("c");
        s.reset();
        assert_eq!(pattern(&s), "___");
        assert_eq!(s.remaining_attempts(), 3);
        assert!(s.guessed_letters().is_empty());
        assert!(s.correct_letters().is_empty());
        assert!(s.incorrect_letters().is_empty());
        assert_eq!(s.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_reset_after_loss_allows_play() {
        let mut s = session("cat", 1);
        s.guess("x");
        assert!(s.is_over());
        s.reset();
        assert_eq!(s.guess("c").outcome, GuessOutcome::Correct('c'));
    }

    #[test]
    fn test_snapshot_displays() {
        let mut s = session("cat", 6);
        s.guess("t");
        s.guess("b");
        s.guess("a");
        let snap = s.snapshot();
        assert_eq!(snap.pattern_display(), "_ a t");
        assert_eq!(snap.guessed_display(), "a b t");
        assert_eq!(snap.incorrect_display(), "b");
        assert_eq!(snap.incorrect_count(), 1);
        assert_eq!(snap.answer, None);
    }

    #[test]
    fn test_snapshot_reveals_answer_when_over() {
        let mut s = session("ox", 6);
        s.guess("o");
        let result = s.guess("x");
        assert_eq!(result.snapshot.status, GameStatus::Won);
        assert_eq!(result.snapshot.answer.as_deref(), Some("ox"));
    }

    #[test]
    fn test_outcome_is_accepted() {
        assert!(GuessOutcome::Correct('a').is_accepted());
        assert!(GuessOutcome::Incorrect('a').is_accepted());
        assert!(!GuessOutcome::Invalid.is_accepted());
        assert!(!GuessOutcome::Duplicate('a').is_accepted());
        assert!(!GuessOutcome::GameOver.is_accepted());
    }
}
