//! Session snapshot persistence
//!
//! Mirrors the engine's `GameSession` into storage after every guess so an
//! interrupted game can be resumed. The secret word is stored base64-encoded
//! over its reversed bytes; that is an obfuscation against casual
//! inspection of the data file, not a security measure, and must round-trip
//! exactly. Anything the store cannot decode is treated as "no saved
//! session".

use crate::core::{Letter, Outcome, SecretWord};
use crate::engine::{GameSession, MAX_WRONG_GUESSES};
use crate::store::{Storage, StorageError};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

const SESSION_KEY: &str = "session";

/// Persisted form of a game session
#[derive(Debug, Serialize, Deserialize)]
struct SessionSnapshot {
    secret_word: String,
    wrong_guesses: u8,
    right_guesses: usize,
    guessed_letters: Vec<char>,
    state: Option<Outcome>,
}

/// Saves and restores the in-progress game
pub struct SessionStore<S: Storage> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist a snapshot of the session
    ///
    /// Write failures are logged and swallowed: losing a snapshot costs at
    /// most the in-flight guess and is never surfaced to the player.
    pub fn save(&mut self, session: &GameSession) {
        let snapshot = SessionSnapshot {
            secret_word: encode_secret(session.secret_word().text()),
            wrong_guesses: session.wrong_guesses(),
            right_guesses: session.right_guesses(),
            guessed_letters: session
                .guessed_letters()
                .iter()
                .map(|l| l.as_char())
                .collect(),
            state: session.last_outcome(),
        };

        let result = serde_json::to_string(&snapshot)
            .map_err(std::io::Error::other)
            .map_err(StorageError::Io)
            .and_then(|json| self.storage.set(SESSION_KEY, &json));

        if let Err(e) = result {
            tracing::warn!("Failed to save session: {e}");
        }
    }

    /// Load the last saved session, if one can be reconstructed
    ///
    /// Absent, malformed, or undecodable snapshots all yield `None`.
    /// Terminal-vs-resumable policy is the caller's concern; a terminal
    /// snapshot is still returned.
    #[must_use]
    pub fn load(&self) -> Option<GameSession> {
        let json = self.storage.get(SESSION_KEY)?;
        let snapshot: SessionSnapshot = match serde_json::from_str(&json) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!("Discarding malformed session snapshot: {e}");
                return None;
            }
        };

        let word = decode_secret(&snapshot.secret_word)?;
        let secret_word = SecretWord::new(word).ok()?;

        // Counters outside their model ranges cannot come from the engine;
        // treat the snapshot as corrupt rather than resume an unwinnable
        // or unlosable game.
        if snapshot.wrong_guesses > MAX_WRONG_GUESSES
            || snapshot.right_guesses > secret_word.len()
        {
            tracing::debug!("Discarding session snapshot with out-of-range counters");
            return None;
        }

        let mut guessed = Vec::with_capacity(snapshot.guessed_letters.len());
        for ch in snapshot.guessed_letters {
            guessed.push(Letter::parse(&ch.to_string()).ok()?);
        }

        Some(GameSession::from_parts(
            secret_word,
            guessed,
            snapshot.wrong_guesses,
            snapshot.right_guesses,
            snapshot.state,
        ))
    }

    /// Clear the persisted session
    pub fn remove(&mut self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            tracing::warn!("Failed to remove session: {e}");
        }
    }
}

/// Obfuscate the secret word for storage: reverse, then base64
fn encode_secret(word: &str) -> String {
    let reversed: String = word.chars().rev().collect();
    STANDARD.encode(reversed.as_bytes())
}

/// Invert [`encode_secret`]; `None` if the stored form is not valid
fn decode_secret(encoded: &str) -> Option<String> {
    let bytes = STANDARD.decode(encoded).ok()?;
    let reversed = String::from_utf8(bytes).ok()?;
    Some(reversed.chars().rev().collect())
}
