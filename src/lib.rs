//! Hangman Rescue
//!
//! A terminal hangman game: guess the secret word one letter at a time
//! before the gallows fill in. Interrupted games resume from a saved
//! snapshot, and win/loss statistics persist across sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_rescue::core::{Outcome, SecretWord};
//! use hangman_rescue::engine::GameSession;
//!
//! let mut game = GameSession::new(SecretWord::new("abba").unwrap());
//! assert_eq!(game.run("a"), Outcome::RightGuess);
//! assert_eq!(game.run("b"), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Session, statistics, and preference persistence
pub mod store;

// Pure render-instruction layer
pub mod shell;

// Word provider
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
