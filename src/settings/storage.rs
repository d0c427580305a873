use std::fs;
use std::path::PathBuf;

use super::models::{AppSettings, Theme};
use crate::i18n::Language;
use crate::storage::{write_json_file, StorageError};

type Result<T> = std::result::Result<T, StorageError>;

/// Storage for global settings (one settings.json file)
pub struct SettingsStorage {
    base_path: PathBuf,
}

impl SettingsStorage {
    /// Create a settings storage, creating the directory if needed
    pub fn new(base_path: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn settings_file(&self) -> PathBuf {
        self.base_path.join("settings.json")
    }

    /// Load settings, falling back to defaults when the file is missing.
    pub fn settings(&self) -> Result<AppSettings> {
        let file = self.settings_file();
        if !file.exists() {
            return Ok(AppSettings::default());
        }

        let content = fs::read_to_string(&file)?;
        let settings: AppSettings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn save_settings(&self, settings: &AppSettings) -> Result<()> {
        write_json_file(&self.settings_file(), settings)
    }

    pub fn set_language(&self, language: Language) -> Result<AppSettings> {
        let mut settings = self.settings()?;
        settings.language = language;
        self.save_settings(&settings)?;
        log::info!("Set language to {}", language);
        Ok(settings)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<AppSettings> {
        let mut settings = self.settings()?;
        settings.theme = theme;
        self.save_settings(&settings)?;
        log::info!("Set theme to {:?}", theme);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SettingsStorage::new(dir.path().to_path_buf()).unwrap();

        let settings = storage.settings().unwrap();
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_set_language_persists() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SettingsStorage::new(dir.path().to_path_buf()).unwrap();

        storage.set_language(Language::Zh).unwrap();

        let settings = storage.settings().unwrap();
        assert_eq!(settings.language, Language::Zh);
        // Theme untouched
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_set_theme_persists() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SettingsStorage::new(dir.path().to_path_buf()).unwrap();

        storage.set_theme(Theme::Dark).unwrap();

        assert_eq!(storage.settings().unwrap().theme, Theme::Dark);
    }

    #[test]
    fn test_partial_settings_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SettingsStorage::new(dir.path().to_path_buf()).unwrap();

        fs::write(dir.path().join("settings.json"), r#"{"language":"zh"}"#).unwrap();

        let settings = storage.settings().unwrap();
        assert_eq!(settings.language, Language::Zh);
        assert_eq!(settings.theme, Theme::Light);
    }
}
