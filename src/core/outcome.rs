//! Guess outcomes
//!
//! The six fixed tags a guess can resolve to. The kebab-case string forms
//! are a wire contract: they appear in persisted session snapshots and are
//! the keys the presentation shell maps to messages and sound cues.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of running a single guess through the engine
///
/// `Won` and `Lost` are terminal; the other four are transient per-guess
/// outcomes that leave the session playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// The token was not a valid single letter
    InvalidInput,
    /// The letter was guessed earlier in this session
    AlreadyGuessed,
    /// The letter does not appear in the secret word
    WrongGuess,
    /// The letter appears at least once, but the word is not complete
    RightGuess,
    /// Every letter occurrence has been found
    Won,
    /// The wrong-guess limit was reached
    Lost,
}

impl Outcome {
    /// True for `Won` and `Lost`; a terminal session accepts no further guesses
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// The kebab-case tag, identical to the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid-input",
            Self::AlreadyGuessed => "already-guessed",
            Self::WrongGuess => "wrong-guess",
            Self::RightGuess => "right-guess",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Parse a kebab-case tag back into an outcome
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "invalid-input" => Some(Self::InvalidInput),
            "already-guessed" => Some(Self::AlreadyGuessed),
            "wrong-guess" => Some(Self::WrongGuess),
            "right-guess" => Some(Self::RightGuess),
            "won" => Some(Self::Won),
            "lost" => Some(Self::Lost),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Outcome; 6] = [
        Outcome::InvalidInput,
        Outcome::AlreadyGuessed,
        Outcome::WrongGuess,
        Outcome::RightGuess,
        Outcome::Won,
        Outcome::Lost,
    ];

    #[test]
    fn terminal_only_for_won_and_lost() {
        assert!(Outcome::Won.is_terminal());
        assert!(Outcome::Lost.is_terminal());
        assert!(!Outcome::InvalidInput.is_terminal());
        assert!(!Outcome::AlreadyGuessed.is_terminal());
        assert!(!Outcome::WrongGuess.is_terminal());
        assert!(!Outcome::RightGuess.is_terminal());
    }

    #[test]
    fn tags_match_contract() {
        let tags: Vec<&str> = ALL.iter().map(|o| o.as_str()).collect();
        assert_eq!(
            tags,
            [
                "invalid-input",
                "already-guessed",
                "wrong-guess",
                "right-guess",
                "won",
                "lost"
            ]
        );
    }

    #[test]
    fn serde_uses_kebab_case_tags() {
        for outcome in ALL {
            let json = serde_json::to_string(&outcome).unwrap();
            assert_eq!(json, format!("\"{}\"", outcome.as_str()));

            let back: Outcome = serde_json::from_str(&json).unwrap();
            assert_eq!(back, outcome);
        }
    }

    #[test]
    fn from_tag_round_trips() {
        for outcome in ALL {
            assert_eq!(Outcome::from_tag(outcome.as_str()), Some(outcome));
        }
        assert_eq!(Outcome::from_tag("draw"), None);
        assert_eq!(Outcome::from_tag(""), None);
    }
}
