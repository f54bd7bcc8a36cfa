//! Secret word representation
//!
//! A `SecretWord` stores the word to be guessed along with per-letter
//! occurrence counts, which drive the engine's win-detection threshold.

use crate::core::Letter;
use rustc_hash::FxHashMap;
use std::fmt;

/// The word being guessed, fixed for the lifetime of a session
///
/// Stores the word lowercase along with a map of letter occurrence counts.
/// The word provider contract keeps lengths in `[5, 12]`; construction only
/// enforces that the word is non-empty alphabetic, so tests can use short
/// words freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letter_counts: FxHashMap<char, usize>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::InvalidCharacters => {
                write!(f, "Secret word must contain only ASCII letters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains any
    /// non-alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use hangman_rescue::core::SecretWord;
    ///
    /// let word = SecretWord::new("Zephyr").unwrap();
    /// assert_eq!(word.text(), "zephyr");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("no way").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letter_counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in text.chars() {
            *letter_counts.entry(ch).or_insert(0) += 1;
        }

        Ok(Self {
            text,
            letter_counts,
        })
    }

    /// The word as a lowercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// How many times a letter occurs in the word
    ///
    /// A correct guess advances the right-guess counter by this amount,
    /// so a letter appearing three times is worth three on a single guess.
    #[inline]
    #[must_use]
    pub fn occurrences(&self, letter: Letter) -> usize {
        self.letter_counts.get(&letter.as_char()).copied().unwrap_or(0)
    }

    /// Whether the letter appears at all
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letter_counts.contains_key(&letter.as_char())
    }

    /// Iterate the word's characters in position order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::parse(&c.to_string()).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("zephyr").unwrap();
        assert_eq!(word.text(), "zephyr");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = SecretWord::new("ZePhYr").unwrap();
        assert_eq!(word.text(), "zephyr");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("ze phyr"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("zephyr1"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("zephyr-"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn occurrences_counts_duplicates() {
        let word = SecretWord::new("abba").unwrap();
        assert_eq!(word.occurrences(letter('a')), 2);
        assert_eq!(word.occurrences(letter('b')), 2);
        assert_eq!(word.occurrences(letter('z')), 0);
    }

    #[test]
    fn occurrences_case_insensitive_via_letter() {
        let word = SecretWord::new("Banana").unwrap();
        assert_eq!(word.occurrences(Letter::parse("A").unwrap()), 3);
        assert_eq!(word.occurrences(Letter::parse("N").unwrap()), 2);
    }

    #[test]
    fn contains_matches_occurrences() {
        let word = SecretWord::new("banana").unwrap();
        assert!(word.contains(letter('b')));
        assert!(word.contains(letter('n')));
        assert!(!word.contains(letter('x')));
    }

    #[test]
    fn chars_in_position_order() {
        let word = SecretWord::new("abba").unwrap();
        let chars: Vec<char> = word.chars().collect();
        assert_eq!(chars, ['a', 'b', 'b', 'a']);
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("gallows").unwrap();
        assert_eq!(format!("{word}"), "gallows");
    }
}
