//! Local accounts
//!
//! No passwords, no server: an account is a normalized name that keys a
//! per-user progress file. Logging in with the same name resumes the
//! matching progress.

pub mod models;
pub mod storage;

pub use models::User;
pub use storage::{normalize_username, UserError, UserStorage};
