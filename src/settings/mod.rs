//! Global application settings (language and theme)

pub mod models;
pub mod storage;

pub use models::{AppSettings, Theme};
pub use storage::SettingsStorage;
