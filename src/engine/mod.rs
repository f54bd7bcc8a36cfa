//! Guess engine
//!
//! The game state machine: owns the secret word and counters, resolves
//! each guess into an [`crate::core::Outcome`].

mod game;

pub use game::{GameSession, MAX_WRONG_GUESSES};
