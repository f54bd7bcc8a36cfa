//! Random secret-word selection
//!
//! The engine requires words in `[MIN_WORD_LEN, MAX_WORD_LEN]`; the
//! provider keeps drawing until a candidate fits, mirroring the contract
//! of an opaque external word source.

use crate::core::SecretWord;
use crate::words::WORDS;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Shortest playable secret word
pub const MIN_WORD_LEN: usize = 5;
/// Longest playable secret word
pub const MAX_WORD_LEN: usize = 12;

/// Draw a random secret word of playable length
///
/// Retries until a candidate's length lands in `[MIN_WORD_LEN,
/// MAX_WORD_LEN]`. The embedded list always contains such words, so this
/// terminates.
///
/// # Panics
/// Panics only if the embedded word list is empty or contains no valid
/// word, which would be a build defect.
#[must_use]
pub fn random_secret<R: Rng + ?Sized>(rng: &mut R) -> SecretWord {
    loop {
        let candidate = WORDS.choose(rng).expect("embedded word list is empty");
        if (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&candidate.len()) {
            return SecretWord::new(*candidate).expect("embedded words are valid");
        }
    }
}
