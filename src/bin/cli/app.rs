use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use togaf30_lib::i18n::Language;
use togaf30_lib::progress::{ProgressStorage, UserProgress};
use togaf30_lib::settings::{AppSettings, SettingsStorage};
use togaf30_lib::storage::default_data_dir;
use togaf30_lib::users::{User, UserStorage};

/// Shared application state for CLI commands
pub struct App {
    pub users: UserStorage,
    pub progress: ProgressStorage,
    pub settings_storage: SettingsStorage,
    pub settings: AppSettings,
}

impl App {
    /// Initialize all storages under one data directory.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir().context("Failed to get data directory")?,
        };

        let users = UserStorage::new(data_dir.clone());
        users.init().context("Failed to initialize user storage")?;

        let progress = ProgressStorage::new(data_dir.clone());
        progress
            .init()
            .context("Failed to initialize progress storage")?;

        let settings_storage =
            SettingsStorage::new(data_dir).context("Failed to initialize settings storage")?;
        let settings = settings_storage
            .settings()
            .context("Failed to load settings")?;

        Ok(Self {
            users,
            progress,
            settings_storage,
            settings,
        })
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    /// The active account, if any.
    pub fn optional_user(&self) -> Result<Option<User>> {
        self.users
            .current_user()
            .context("Failed to read current user")
    }

    /// The active account, or a login hint as the error.
    pub fn current_user(&self) -> Result<User> {
        match self.optional_user()? {
            Some(user) => Ok(user),
            None => bail!("Not logged in. Run 'togaf30 login <username>' first."),
        }
    }

    /// The active account together with its progress.
    pub fn current_progress(&self) -> Result<(User, UserProgress)> {
        let user = self.current_user()?;
        let progress = self
            .progress
            .progress(&user.username)
            .context("Failed to load progress")?;
        Ok((user, progress))
    }

    /// An explicit day, or the active account's current day.
    pub fn resolve_day(&self, day: Option<u8>) -> Result<u8> {
        match day {
            Some(day) => Ok(day),
            None => Ok(self.current_progress()?.1.current_day),
        }
    }
}
