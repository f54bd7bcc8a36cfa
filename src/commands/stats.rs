//! Statistics commands
//!
//! Print or reset the lifetime statistics record.

use crate::output::print_statistics;
use crate::store::{FileStorage, StatisticsTracker, StorageError};
use colored::Colorize;
use std::path::Path;

/// Print the lifetime statistics
///
/// # Errors
/// Returns `StorageError` if the data directory cannot be prepared.
pub fn run_stats(data_dir: &Path) -> Result<(), StorageError> {
    let tracker = StatisticsTracker::new(FileStorage::new(data_dir)?);
    print_statistics(tracker.record());
    Ok(())
}

/// Zero the lifetime statistics and persist immediately
///
/// # Errors
/// Returns `StorageError` if the data directory cannot be prepared.
pub fn run_reset_stats(data_dir: &Path) -> Result<(), StorageError> {
    let mut tracker = StatisticsTracker::new(FileStorage::new(data_dir)?);
    tracker.reset();
    println!("{}", "Statistics reset to zero.".green());
    Ok(())
}
