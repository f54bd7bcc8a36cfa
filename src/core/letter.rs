//! Letter validation
//!
//! Classifies a raw input token as a single guessable letter or rejects it.
//! The historical validator accepted any run of alphabetic characters;
//! `is_alphabetic_token` preserves that check as a pure function, while
//! `Letter::parse` additionally requires exactly one character, so a token
//! like "ab" is rejected rather than fed into occurrence counting.

use std::fmt;

/// A validated single ASCII Latin letter, folded to lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(char);

/// Error type for invalid letter tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    Empty,
    NotAlphabetic,
    NotSingle(usize),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty input is not a letter"),
            Self::NotAlphabetic => write!(f, "Letters must be in the Latin alphabet"),
            Self::NotSingle(len) => {
                write!(f, "Guess one letter at a time, got {len} characters")
            }
        }
    }
}

impl std::error::Error for LetterError {}

/// True iff the token is non-empty and every character is an ASCII Latin letter
///
/// Case-insensitive. Multi-character tokens pass this check; single-letter
/// enforcement lives in [`Letter::parse`].
///
/// # Examples
/// ```
/// use hangman_rescue::core::is_alphabetic_token;
///
/// assert!(is_alphabetic_token("q"));
/// assert!(is_alphabetic_token("Qz"));
/// assert!(!is_alphabetic_token("q1"));
/// assert!(!is_alphabetic_token(""));
/// ```
#[must_use]
pub fn is_alphabetic_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

impl Letter {
    /// Parse a raw token into a single lowercase letter
    ///
    /// # Errors
    /// Returns `LetterError` if the token is empty, contains any
    /// non-alphabetic character, or is longer than one character.
    ///
    /// # Examples
    /// ```
    /// use hangman_rescue::core::Letter;
    ///
    /// assert_eq!(Letter::parse("A").unwrap().as_char(), 'a');
    /// assert!(Letter::parse("ab").is_err());
    /// assert!(Letter::parse("3").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, LetterError> {
        if token.is_empty() {
            return Err(LetterError::Empty);
        }
        if !is_alphabetic_token(token) {
            return Err(LetterError::NotAlphabetic);
        }

        let mut chars = token.chars();
        let first = chars.next().ok_or(LetterError::Empty)?;
        if chars.next().is_some() {
            return Err(LetterError::NotSingle(token.chars().count()));
        }

        Ok(Self(first.to_ascii_lowercase()))
    }

    /// The lowercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabetic_token_accepts_letters() {
        assert!(is_alphabetic_token("a"));
        assert!(is_alphabetic_token("Z"));
        assert!(is_alphabetic_token("abc"));
        assert!(is_alphabetic_token("AbC"));
    }

    #[test]
    fn alphabetic_token_rejects_non_letters() {
        // Any non-alphabetic character anywhere makes the token invalid
        assert!(!is_alphabetic_token(""));
        assert!(!is_alphabetic_token("1"));
        assert!(!is_alphabetic_token("a1"));
        assert!(!is_alphabetic_token("1a"));
        assert!(!is_alphabetic_token("a b"));
        assert!(!is_alphabetic_token("!"));
        assert!(!is_alphabetic_token("é"));
        assert!(!is_alphabetic_token("a\n"));
    }

    #[test]
    fn parse_folds_to_lowercase() {
        assert_eq!(Letter::parse("q").unwrap().as_char(), 'q');
        assert_eq!(Letter::parse("Q").unwrap().as_char(), 'q');
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Letter::parse(""), Err(LetterError::Empty));
    }

    #[test]
    fn parse_rejects_non_alphabetic() {
        assert_eq!(Letter::parse("7"), Err(LetterError::NotAlphabetic));
        assert_eq!(Letter::parse("!"), Err(LetterError::NotAlphabetic));
        assert_eq!(Letter::parse(" "), Err(LetterError::NotAlphabetic));
    }

    #[test]
    fn parse_rejects_multi_letter_tokens() {
        // Alphabetic but longer than one letter: valid token historically,
        // rejected here so occurrence counting only ever sees one letter.
        assert_eq!(Letter::parse("ab"), Err(LetterError::NotSingle(2)));
        assert_eq!(Letter::parse("word"), Err(LetterError::NotSingle(4)));
    }

    #[test]
    fn letter_display() {
        let letter = Letter::parse("K").unwrap();
        assert_eq!(format!("{letter}"), "k");
    }
}
