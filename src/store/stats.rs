//! Lifetime statistics
//!
//! Cumulative win/loss totals and streaks, persisted after every change.
//! Only terminal outcomes touch the record; per-guess outcomes are ignored.

use crate::core::Outcome;
use crate::store::Storage;
use serde::{Deserialize, Serialize};

const STATISTICS_KEY: &str = "statistics";

/// Persisted win/loss counters
///
/// Invariant: at most one of `victories_in_row` / `defeats_in_row` is
/// nonzero, and each `max_*_in_row` is at least its current streak.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsRecord {
    pub victories: u64,
    pub defeats: u64,
    pub victories_in_row: u64,
    pub defeats_in_row: u64,
    pub max_victories_in_row: u64,
    pub max_defeats_in_row: u64,
}

impl StatisticsRecord {
    fn record_victory(&mut self) {
        self.victories += 1;
        self.victories_in_row += 1;
        self.defeats_in_row = 0;
        self.max_victories_in_row = self.max_victories_in_row.max(self.victories_in_row);
    }

    fn record_defeat(&mut self) {
        self.defeats += 1;
        self.defeats_in_row += 1;
        self.victories_in_row = 0;
        self.max_defeats_in_row = self.max_defeats_in_row.max(self.defeats_in_row);
    }

    /// Apply a game outcome; returns whether the record changed
    pub fn update(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Won => {
                self.record_victory();
                true
            }
            Outcome::Lost => {
                self.record_defeat();
                true
            }
            Outcome::InvalidInput
            | Outcome::AlreadyGuessed
            | Outcome::WrongGuess
            | Outcome::RightGuess => false,
        }
    }

    /// Total games finished
    #[must_use]
    pub const fn total_games(&self) -> u64 {
        self.victories + self.defeats
    }
}

/// Statistics with persistence
///
/// Loads the stored record on construction (a missing or unreadable record
/// starts from zero) and writes the full record back after every mutation.
pub struct StatisticsTracker<S: Storage> {
    record: StatisticsRecord,
    storage: S,
}

impl<S: Storage> StatisticsTracker<S> {
    /// Create a tracker, loading any previously persisted record
    pub fn new(storage: S) -> Self {
        let record = storage
            .get(STATISTICS_KEY)
            .and_then(|json| match serde_json::from_str(&json) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::debug!("Discarding malformed statistics record: {e}");
                    None
                }
            })
            .unwrap_or_default();

        Self { record, storage }
    }

    /// The current counters
    #[inline]
    #[must_use]
    pub const fn record(&self) -> &StatisticsRecord {
        &self.record
    }

    /// Consume a game outcome; persists iff the outcome was terminal
    pub fn update(&mut self, outcome: Outcome) {
        if self.record.update(outcome) {
            self.persist();
        }
    }

    /// Zero all counters and persist immediately
    pub fn reset(&mut self) {
        self.record = StatisticsRecord::default();
        self.persist();
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.record)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .set(STATISTICS_KEY, &json)
                    .map_err(|e| e.to_string())
            });

        if let Err(e) = result {
            tracing::warn!("Failed to save statistics: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    fn streak_invariant_holds(record: &StatisticsRecord) -> bool {
        let one_streak = record.victories_in_row == 0 || record.defeats_in_row == 0;
        one_streak
            && record.max_victories_in_row >= record.victories_in_row
            && record.max_defeats_in_row >= record.defeats_in_row
    }

    #[test]
    fn update_ignores_non_terminal_outcomes() {
        let mut record = StatisticsRecord::default();
        for outcome in [
            Outcome::InvalidInput,
            Outcome::AlreadyGuessed,
            Outcome::WrongGuess,
            Outcome::RightGuess,
        ] {
            assert!(!record.update(outcome));
        }
        assert_eq!(record, StatisticsRecord::default());
    }

    #[test]
    fn victory_advances_streak_and_resets_defeats() {
        let mut record = StatisticsRecord::default();
        record.update(Outcome::Lost);
        record.update(Outcome::Won);

        assert_eq!(record.victories, 1);
        assert_eq!(record.defeats, 1);
        assert_eq!(record.victories_in_row, 1);
        assert_eq!(record.defeats_in_row, 0);
        assert_eq!(record.max_defeats_in_row, 1);
    }

    #[test]
    fn max_streaks_track_running_maxima() {
        let mut record = StatisticsRecord::default();
        for outcome in [
            Outcome::Won,
            Outcome::Won,
            Outcome::Won,
            Outcome::Lost,
            Outcome::Won,
        ] {
            record.update(outcome);
        }

        assert_eq!(record.max_victories_in_row, 3);
        assert_eq!(record.victories_in_row, 1);
        assert_eq!(record.max_defeats_in_row, 1);
        assert_eq!(record.total_games(), 5);
    }

    #[test]
    fn streak_invariant_under_arbitrary_sequences() {
        // Deterministic pseudo-random win/loss sequence
        let mut record = StatisticsRecord::default();
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;

        for _ in 0..200 {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let outcome = if seed & 1 == 0 {
                Outcome::Won
            } else {
                Outcome::Lost
            };
            record.update(outcome);
            assert!(streak_invariant_holds(&record));
        }
        assert_eq!(record.total_games(), 200);
    }

    #[test]
    fn tracker_starts_from_zero_without_stored_record() {
        let tracker = StatisticsTracker::new(MemoryStorage::new());
        assert_eq!(tracker.record(), &StatisticsRecord::default());
    }

    #[test]
    fn tracker_persists_through_files() {
        let dir = tempfile::tempdir().unwrap();

        {
            let storage = crate::store::FileStorage::new(dir.path()).unwrap();
            let mut tracker = StatisticsTracker::new(storage);
            tracker.update(Outcome::Won);
            tracker.update(Outcome::Lost);
        }

        let storage = crate::store::FileStorage::new(dir.path()).unwrap();
        let tracker = StatisticsTracker::new(storage);
        assert_eq!(tracker.record().victories, 1);
        assert_eq!(tracker.record().defeats, 1);
        assert_eq!(tracker.record().defeats_in_row, 1);
        assert_eq!(tracker.record().victories_in_row, 0);
    }

    #[test]
    fn reset_zeroes_and_persists() {
        let dir = tempfile::tempdir().unwrap();

        {
            let storage = crate::store::FileStorage::new(dir.path()).unwrap();
            let mut tracker = StatisticsTracker::new(storage);
            tracker.update(Outcome::Won);
            tracker.reset();
        }

        let storage = crate::store::FileStorage::new(dir.path()).unwrap();
        let tracker = StatisticsTracker::new(storage);
        assert_eq!(tracker.record(), &StatisticsRecord::default());
    }

    #[test]
    fn malformed_stored_record_starts_fresh() {
        let mut storage = MemoryStorage::new();
        storage.set("statistics", "{broken").unwrap();

        let tracker = StatisticsTracker::new(storage);
        assert_eq!(tracker.record(), &StatisticsRecord::default());
    }
}
