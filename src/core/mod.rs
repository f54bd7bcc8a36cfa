//! Core domain types for hangman
//!
//! Letters, secret words, and guess outcomes shared by the engine, the
//! stores, and the presentation shells. All types here are pure and
//! storage-free.

mod letter;
mod outcome;
mod word;

pub use letter::{Letter, LetterError, is_alphabetic_token};
pub use outcome::Outcome;
pub use word::{SecretWord, WordError};
