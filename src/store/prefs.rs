//! Sound-cue preference
//!
//! Whether the shell should surface sound cues. Persisted as its own
//! record so it survives across games independently of the session and
//! statistics records. No audio is played anywhere; the flag only gates
//! the cue in the render instruction.

use crate::store::Storage;
use serde::{Deserialize, Serialize};

const PREFERENCE_KEY: &str = "sound-preference";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceRecord {
    sound_enabled: bool,
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        // Fresh installs start with sound cues on
        Self {
            sound_enabled: true,
        }
    }
}

/// Persisted user preferences
pub struct PreferenceStore<S: Storage> {
    record: PreferenceRecord,
    storage: S,
}

impl<S: Storage> PreferenceStore<S> {
    /// Load preferences; absence or malformed data yields the defaults
    pub fn new(storage: S) -> Self {
        let record = storage
            .get(PREFERENCE_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();

        Self { record, storage }
    }

    /// Whether sound cues should be surfaced
    #[inline]
    #[must_use]
    pub const fn sound_enabled(&self) -> bool {
        self.record.sound_enabled
    }

    /// Flip the sound-cue flag and persist it
    pub fn toggle_sound(&mut self) {
        self.record.sound_enabled = !self.record.sound_enabled;
        let result = serde_json::to_string(&self.record)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .set(PREFERENCE_KEY, &json)
                    .map_err(|e| e.to_string())
            });

        if let Err(e) = result {
            tracing::warn!("Failed to save sound preference: {e}");
        }
    }
}
