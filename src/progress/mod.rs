//! Per-user study progress
//!
//! Tracks which days of the plan each account has completed. Generated
//! flashcards are never persisted here; progress survives even when
//! generation runs in fallback mode.

pub mod models;
pub mod storage;

pub use models::UserProgress;
pub use storage::{ProgressError, ProgressStorage};
