//! 30-day TOGAF study companion
//!
//! The syllabus and glossary are compiled in; users, progress, and
//! settings live as JSON files in the platform data directory. Only the
//! flashcard generation call leaves the machine, and even that degrades
//! to built-in fallback cards when the service is unreachable.

pub mod generation;
pub mod glossary;
pub mod i18n;
pub mod progress;
pub mod settings;
pub mod storage;
pub mod syllabus;
pub mod users;

/// Product name shown in headers.
pub const APP_NAME: &str = "TOGAF Master 30";
