//! Word provider
//!
//! An embedded word list plus the provider loop that keeps drawing until a
//! word's length falls within the playable range.

mod embedded;
mod provider;

pub use embedded::WORDS;
pub use provider::{MAX_WORD_LEN, MIN_WORD_LEN, random_secret};
