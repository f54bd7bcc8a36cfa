//! Persistence layer
//!
//! A string-valued key-value [`Storage`] abstraction with file-backed and
//! in-memory implementations, plus the three named records built on top of
//! it: the session snapshot, the statistics record, and the sound
//! preference. Missing or malformed data always degrades to defaults;
//! nothing in this module is fatal to gameplay.

mod prefs;
mod session;
mod stats;
mod storage;

pub use prefs::PreferenceStore;
pub use session::SessionStore;
pub use stats::{StatisticsRecord, StatisticsTracker};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, default_data_dir};
