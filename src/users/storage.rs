//! Account storage operations
//!
//! Handles the account list (users.json) and the active account marker
//! (current_user.json).

use std::fs;
use std::path::PathBuf;

use chrono::Utc;

use super::models::User;
use crate::storage::write_json_file;

/// Error type for account operations
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),
}

pub type Result<T> = std::result::Result<T, UserError>;

// The normalized username ends up in a file name (progress_{username}.json).
const RESERVED_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Normalize a raw username the way the login screen does: trim whitespace
/// and lowercase. Rejects empty results and characters that cannot appear
/// in a file name.
pub fn normalize_username(raw: &str) -> Result<String> {
    let username = raw.trim().to_lowercase();
    if username.is_empty() {
        return Err(UserError::InvalidUsername(
            "username must not be empty".to_string(),
        ));
    }
    if username
        .chars()
        .any(|c| c.is_control() || RESERVED_CHARS.contains(&c))
    {
        return Err(UserError::InvalidUsername(format!(
            "username contains a reserved character: {username}"
        )));
    }
    Ok(username)
}

/// Storage for local accounts
pub struct UserStorage {
    base_path: PathBuf,
}

impl UserStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn users_file(&self) -> PathBuf {
        self.base_path.join("users.json")
    }

    fn current_user_file(&self) -> PathBuf {
        self.base_path.join("current_user.json")
    }

    /// Ensure the base directory exists.
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    /// List all accounts, most recently used first.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let file = self.users_file();
        if !file.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&file)?;
        let mut users: Vec<User> = serde_json::from_str(&content)?;
        users.sort_by(|a, b| b.last_login.cmp(&a.last_login));
        Ok(users)
    }

    /// Get one account by normalized username.
    pub fn get_user(&self, username: &str) -> Result<User> {
        self.list_users()?
            .into_iter()
            .find(|u| u.username == username)
            .ok_or_else(|| UserError::NotFound(username.to_string()))
    }

    /// Create or resume an account and make it the active one.
    ///
    /// The username is normalized; the optional display name is trimmed and
    /// dropped when empty. Re-logging in updates the stored display name
    /// and last-login time instead of creating a duplicate.
    pub fn login(&self, raw_username: &str, raw_name: Option<&str>) -> Result<User> {
        let username = normalize_username(raw_username)?;
        let name = raw_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);

        let mut users = self.list_users()?;
        let user = match users.iter_mut().find(|u| u.username == username) {
            Some(existing) => {
                if name.is_some() {
                    existing.name = name;
                }
                existing.last_login = Utc::now();
                existing.clone()
            }
            None => {
                let user = User::new(username.clone(), name);
                users.push(user.clone());
                user
            }
        };

        self.save_users(&users)?;
        self.set_current_username(&user.username)?;

        log::info!("Logged in as '{}'", user.username);
        Ok(user)
    }

    /// The active account's username, if any.
    pub fn current_username(&self) -> Result<Option<String>> {
        let file = self.current_user_file();
        if !file.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&file)?;
        let username: String = serde_json::from_str(&content)?;
        Ok(Some(username))
    }

    /// The active account, if any. A stale marker pointing at a deleted
    /// account is treated as logged out.
    pub fn current_user(&self) -> Result<Option<User>> {
        match self.current_username()? {
            Some(username) => match self.get_user(&username) {
                Ok(user) => Ok(Some(user)),
                Err(UserError::NotFound(_)) => Ok(None),
                Err(e) => Err(e),
            },
            None => Ok(None),
        }
    }

    /// Mark an existing account as active.
    pub fn set_current_username(&self, username: &str) -> Result<()> {
        self.get_user(username)?;
        write_json_file(&self.current_user_file(), &username)?;
        Ok(())
    }

    /// Clear the active-account marker.
    pub fn logout(&self) -> Result<()> {
        let file = self.current_user_file();
        if file.exists() {
            fs::remove_file(&file)?;
            log::info!("Logged out");
        }
        Ok(())
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        write_json_file(&self.users_file(), &users)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_storage() -> (tempfile::TempDir, UserStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = UserStorage::new(dir.path().to_path_buf());
        storage.init().unwrap();
        (dir, storage)
    }

    #[test]
    fn test_login_creates_and_activates_account() {
        let (_dir, storage) = test_storage();

        let user = storage.login("  Alice ", Some(" Alice Chen ")).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.name.as_deref(), Some("Alice Chen"));
        assert_eq!(storage.current_username().unwrap().as_deref(), Some("alice"));
    }

    #[test]
    fn test_login_twice_updates_instead_of_duplicating() {
        let (_dir, storage) = test_storage();

        storage.login("alice", None).unwrap();
        let again = storage.login("ALICE", Some("Alice")).unwrap();

        assert_eq!(again.name.as_deref(), Some("Alice"));
        assert_eq!(storage.list_users().unwrap().len(), 1);
    }

    #[test]
    fn test_login_rejects_blank_username() {
        let (_dir, storage) = test_storage();
        assert!(matches!(
            storage.login("   ", None),
            Err(UserError::InvalidUsername(_))
        ));
    }

    #[test]
    fn test_login_rejects_file_name_hostile_usernames() {
        let (_dir, storage) = test_storage();

        for raw in ["alice/work", "..\\alice", "a:b", "day\tone"] {
            assert!(matches!(
                storage.login(raw, None),
                Err(UserError::InvalidUsername(_))
            ));
        }

        // A rejected login must not create or activate an account.
        assert!(storage.list_users().unwrap().is_empty());
        assert!(storage.current_username().unwrap().is_none());
    }

    #[test]
    fn test_login_accepts_unicode_usernames() {
        let (_dir, storage) = test_storage();

        let user = storage.login("小明", None).unwrap();
        assert_eq!(user.username, "小明");
        assert_eq!(storage.current_username().unwrap().as_deref(), Some("小明"));
    }

    #[test]
    fn test_marker_update_consumes_stale_temp_file() {
        let (dir, storage) = test_storage();
        storage.login("alice", None).unwrap();

        // Leftover from an interrupted write; the next update must replace
        // it, not write beside it.
        let tmp = dir.path().join("current_user.json.tmp");
        fs::write(&tmp, "{trunc").unwrap();

        storage.set_current_username("alice").unwrap();

        assert!(!tmp.exists());
        assert_eq!(storage.current_username().unwrap().as_deref(), Some("alice"));
    }

    #[test]
    fn test_logout_clears_active_account() {
        let (_dir, storage) = test_storage();

        storage.login("bob", None).unwrap();
        storage.logout().unwrap();

        assert!(storage.current_username().unwrap().is_none());
        // Account itself survives logout
        assert_eq!(storage.list_users().unwrap().len(), 1);
    }

    #[test]
    fn test_current_user_none_without_login() {
        let (_dir, storage) = test_storage();
        assert!(storage.current_user().unwrap().is_none());
    }

    #[test]
    fn test_set_current_requires_existing_user() {
        let (_dir, storage) = test_storage();
        assert!(matches!(
            storage.set_current_username("ghost"),
            Err(UserError::NotFound(_))
        ));
    }
}
