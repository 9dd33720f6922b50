//! Whole-file JSON persistence helpers.
//! Reads fall back to defaults; writes replace the file in one rename.

use crate::error::StorageError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads `path` as JSON, falling back to `T::default()` when the file is
/// missing, empty or not valid JSON for `T`.
pub fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    match try_load(path) {
        Ok(Some(value)) => value,
        Ok(None) => {
            log::debug!("{:?} not found, starting empty", path);
            T::default()
        }
        Err(e) => {
            log::warn!("Ignoring unreadable {:?}: {}", path, e);
            T::default()
        }
    }
}

/// Reads `path` as JSON. `Ok(None)` when the file does not exist or is blank.
pub fn try_load<T>(path: &Path) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
{
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Writes `value` as pretty JSON, replacing the whole file.
///
/// The data goes to a sibling temporary file first and is renamed over
/// `path`, so readers never see a half-written file.
pub fn save_pretty<T>(path: &Path, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json_string = serde_json::to_string_pretty(value)?;
    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, json_string.as_bytes())?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    log::debug!("Saved {:?}", path);
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = TempDir::new().unwrap();
        let value: BTreeMap<String, u32> = load_or_default(&dir.path().join("absent.json"));
        assert!(value.is_empty());
    }

    #[test]
    fn test_load_invalid_json_gives_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        let value: BTreeMap<String, u32> = load_or_default(&path);
        assert!(value.is_empty());
    }

    #[test]
    fn test_try_load_blank_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.json");
        fs::write(&path, "  \n").unwrap();

        let value: Option<Vec<u32>> = try_load(&path).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_try_load_reports_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[1, 2,").unwrap();

        let result: Result<Option<Vec<u32>>, _> = try_load(&path);
        assert!(matches!(result, Err(StorageError::Json(_))));
    }

    #[test]
    fn test_save_creates_parent_dirs_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("out.json");

        save_pretty(&path, &vec![1, 2, 3]).unwrap();

        assert!(path.exists());
        assert!(!temp_path_for(&path).exists());
        let back: Vec<u32> = try_load(&path).unwrap().unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taken.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("inside.txt"), "occupied").unwrap();

        let result = save_pretty(&path, &vec![1, 2, 3]);

        assert!(matches!(result, Err(StorageError::Io(_))));
        assert!(!temp_path_for(&path).exists());
        assert!(path.join("inside.txt").exists());
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        save_pretty(&path, &vec![1, 2, 3]).unwrap();
        save_pretty(&path, &vec![9]).unwrap();

        let back: Vec<u32> = try_load(&path).unwrap().unwrap();
        assert_eq!(back, vec![9]);
    }
}
