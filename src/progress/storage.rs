//! Progress storage operations
//!
//! One JSON file per user (progress_{username}.json) holding the completed
//! day list. Missing files mean fresh progress, never an error.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use super::models::UserProgress;
use crate::storage::write_json_file;
use crate::syllabus::TOTAL_DAYS;

#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error("Invalid day: {0} (expected 1..=30)")]
    InvalidDay(u8),
}

pub type Result<T> = std::result::Result<T, ProgressError>;

/// Storage for per-user study progress
pub struct ProgressStorage {
    base_path: PathBuf,
}

impl ProgressStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn progress_file(&self, username: &str) -> PathBuf {
        self.base_path.join(format!("progress_{username}.json"))
    }

    /// Ensure the base directory exists.
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    /// Load a user's progress, defaulting to an empty record.
    pub fn progress(&self, username: &str) -> Result<UserProgress> {
        let file = self.progress_file(username);
        if !file.exists() {
            return Ok(UserProgress::new(username.to_string()));
        }

        let content = fs::read_to_string(&file)?;
        let progress: UserProgress = serde_json::from_str(&content)?;
        Ok(progress)
    }

    /// Record a completed day. Appends on first completion and keeps that
    /// order; completing an already-done day is a no-op.
    pub fn mark_complete(&self, username: &str, day: u8) -> Result<UserProgress> {
        if day == 0 || day > TOTAL_DAYS {
            return Err(ProgressError::InvalidDay(day));
        }

        let mut progress = self.progress(username)?;
        if !progress.is_completed(day) {
            progress.completed_days.push(day);
            progress.current_day = progress.next_day().unwrap_or(TOTAL_DAYS);
            progress.updated_at = Utc::now();
            self.save_progress(&progress)?;
            log::info!("Marked day {} complete for '{}'", day, username);
        }
        Ok(progress)
    }

    /// Delete a user's progress file, if present.
    pub fn reset(&self, username: &str) -> Result<()> {
        let file = self.progress_file(username);
        if file.exists() {
            fs::remove_file(&file)?;
            log::info!("Reset progress for '{}'", username);
        }
        Ok(())
    }

    fn save_progress(&self, progress: &UserProgress) -> Result<()> {
        write_json_file(&self.progress_file(&progress.username), progress)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_storage() -> (tempfile::TempDir, ProgressStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = ProgressStorage::new(dir.path().to_path_buf());
        storage.init().unwrap();
        (dir, storage)
    }

    #[test]
    fn test_fresh_progress_is_empty() {
        let (_dir, storage) = test_storage();
        let progress = storage.progress("alice").unwrap();
        assert!(progress.completed_days.is_empty());
        assert_eq!(progress.current_day, 1);
    }

    #[test]
    fn test_mark_complete_persists() {
        let (_dir, storage) = test_storage();

        storage.mark_complete("alice", 1).unwrap();
        storage.mark_complete("alice", 3).unwrap();

        let progress = storage.progress("alice").unwrap();
        assert_eq!(progress.completed_days, vec![1, 3]);
        assert_eq!(progress.current_day, 2);
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let (_dir, storage) = test_storage();

        storage.mark_complete("alice", 5).unwrap();
        let progress = storage.mark_complete("alice", 5).unwrap();

        assert_eq!(progress.completed_days, vec![5]);
    }

    #[test]
    fn test_mark_complete_rejects_out_of_range_days() {
        let (_dir, storage) = test_storage();

        assert!(matches!(
            storage.mark_complete("alice", 0),
            Err(ProgressError::InvalidDay(0))
        ));
        assert!(matches!(
            storage.mark_complete("alice", 31),
            Err(ProgressError::InvalidDay(31))
        ));
    }

    #[test]
    fn test_progress_is_per_user() {
        let (_dir, storage) = test_storage();

        storage.mark_complete("alice", 1).unwrap();

        assert!(storage.progress("bob").unwrap().completed_days.is_empty());
    }

    #[test]
    fn test_reset_clears_progress() {
        let (_dir, storage) = test_storage();

        storage.mark_complete("alice", 1).unwrap();
        storage.reset("alice").unwrap();

        assert!(storage.progress("alice").unwrap().completed_days.is_empty());
    }
}
