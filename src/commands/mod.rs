//! Command implementations

pub mod simple;
pub mod stats;

pub use simple::run_simple;
pub use stats::{run_reset_stats, run_stats};

use crate::engine::GameSession;
use crate::store::{SessionStore, Storage};
use crate::words::random_secret;
use rand::Rng;

/// Resume the saved session if it is still playable, else start fresh
///
/// A terminal or unreadable snapshot starts a new game; the fresh session
/// is saved immediately so a crash before the first guess still resumes.
/// Returns the session and whether it was resumed.
pub fn resume_or_new<S: Storage, R: Rng + ?Sized>(
    store: &mut SessionStore<S>,
    rng: &mut R,
) -> (GameSession, bool) {
    if let Some(saved) = store.load()
        && !saved.is_terminal()
    {
        return (saved, true);
    }

    let session = GameSession::new(random_secret(rng));
    store.remove();
    store.save(&session);
    (session, false)
}
