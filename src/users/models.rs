//! Data model for local accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A local account. Usernames are normalized (trimmed, lowercased) and act
/// as the key for per-user progress files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            username,
            name,
            created_at: now,
            last_login: now,
        }
    }

    /// Display name if set, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}
