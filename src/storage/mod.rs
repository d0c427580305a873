use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the default data directory
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|p| p.join("togaf30"))
        .ok_or(StorageError::DataDirNotFound)
}

/// Serialize `value` as pretty JSON and replace `path` atomically.
///
/// Writes to a sibling temp file first so a crash mid-write never leaves
/// a truncated file behind.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_file_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("value.json");

        write_json_file(&path, &vec![1, 2, 3]).unwrap();
        write_json_file(&path, &vec![4, 5]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<i32> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, vec![4, 5]);
    }

    #[test]
    fn test_write_json_file_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("value.json");

        write_json_file(&path, &"hello").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
