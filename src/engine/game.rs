//! Game session state machine
//!
//! One `GameSession` per game. Each call to [`GameSession::run`] resolves a
//! raw input token into an outcome and advances the counters. The engine
//! performs no I/O; callers snapshot and persist after each transition.

use crate::core::{Letter, Outcome, SecretWord};

/// Wrong guesses allowed before the game is lost
///
/// Also the last hangman progression stage; stages run `0..=MAX_WRONG_GUESSES`.
pub const MAX_WRONG_GUESSES: u8 = 6;

/// An in-progress (or finished) hangman game
///
/// Invariants:
/// - `wrong_guesses` and `right_guesses` only ever increase
/// - `guessed` grows by at most one letter per `run` call and never shrinks
/// - the session is terminal iff `wrong_guesses == MAX_WRONG_GUESSES`
///   or `right_guesses == secret_word.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret_word: SecretWord,
    guessed: Vec<Letter>,
    wrong_guesses: u8,
    right_guesses: usize,
    last_outcome: Option<Outcome>,
}

impl GameSession {
    /// Start a fresh game: counters zeroed, guessed set cleared
    #[must_use]
    pub const fn new(secret_word: SecretWord) -> Self {
        Self {
            secret_word,
            guessed: Vec::new(),
            wrong_guesses: 0,
            right_guesses: 0,
            last_outcome: None,
        }
    }

    /// Rebuild a session from persisted parts
    ///
    /// Used by the session store when resuming. Counters are trusted as
    /// saved; the store rejects snapshots it cannot decode.
    #[must_use]
    pub(crate) const fn from_parts(
        secret_word: SecretWord,
        guessed: Vec<Letter>,
        wrong_guesses: u8,
        right_guesses: usize,
        last_outcome: Option<Outcome>,
    ) -> Self {
        Self {
            secret_word,
            guessed,
            wrong_guesses,
            right_guesses,
            last_outcome,
        }
    }

    /// Resolve one raw input token into an outcome
    ///
    /// Invalid or repeated input leaves the counters untouched. A fresh
    /// letter is recorded, then either the right-guess counter advances by
    /// the letter's occurrence count in the secret word (reaching the word
    /// length wins) or the wrong-guess counter advances by one (reaching
    /// [`MAX_WRONG_GUESSES`] loses).
    ///
    /// The engine assumes it is not called again once terminal; the shell
    /// enforces that.
    pub fn run(&mut self, token: &str) -> Outcome {
        let outcome = self.resolve(token);
        self.last_outcome = Some(outcome);
        outcome
    }

    fn resolve(&mut self, token: &str) -> Outcome {
        let Ok(letter) = Letter::parse(token) else {
            return Outcome::InvalidInput;
        };
        if self.guessed.contains(&letter) {
            return Outcome::AlreadyGuessed;
        }

        self.guessed.push(letter);
        let occurrences = self.secret_word.occurrences(letter);

        if occurrences > 0 {
            self.right_guesses += occurrences;
            if self.right_guesses == self.secret_word.len() {
                return Outcome::Won;
            }
            Outcome::RightGuess
        } else {
            self.wrong_guesses += 1;
            if self.wrong_guesses == MAX_WRONG_GUESSES {
                return Outcome::Lost;
            }
            Outcome::WrongGuess
        }
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub const fn secret_word(&self) -> &SecretWord {
        &self.secret_word
    }

    /// Wrong guesses so far; doubles as the hangman progression stage
    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    /// Total letter occurrences found so far (not distinct letters)
    #[inline]
    #[must_use]
    pub const fn right_guesses(&self) -> usize {
        self.right_guesses
    }

    /// Guessed letters in the order they were tried
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed
    }

    /// Guessed letters joined for display, e.g. `"a, b, c"`
    #[must_use]
    pub fn guessed_display(&self) -> String {
        self.guessed
            .iter()
            .map(|l| l.as_char().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Outcome of the most recent `run` call, if any
    #[inline]
    #[must_use]
    pub const fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Per-position mask of the secret word
    ///
    /// `Some(letter)` where the letter has been guessed, `None` for still
    /// hidden positions. The shell renders `None` as a blank.
    #[must_use]
    pub fn revealed(&self) -> Vec<Option<char>> {
        self.secret_word
            .chars()
            .map(|c| {
                if self.guessed.iter().any(|l| l.as_char() == c) {
                    Some(c)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Whether the game has ended in a win or a loss
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.wrong_guesses == MAX_WRONG_GUESSES || self.right_guesses == self.secret_word.len()
    }
}
