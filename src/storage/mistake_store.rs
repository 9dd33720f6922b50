//! Persisted wrong-answer counters keyed by mistake key.
//!
//! The whole file is read and rewritten on every access. There is no
//! locking: with two writers the last save wins.

use super::json::{load_or_default, save_pretty};
use crate::error::StorageError;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Mistake key to wrong-answer count, in file order.
pub type Mistakes = IndexMap<String, u64>;

#[derive(Clone, Debug)]
pub struct MistakeStore {
    path: PathBuf,
}

impl MistakeStore {
    /// Store backed by the JSON file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current mapping. Empty when the file is absent or unreadable.
    pub fn load(&self) -> Mistakes {
        load_or_default(&self.path)
    }

    /// Overwrites the file with `mistakes`.
    pub fn save(&self, mistakes: &Mistakes) -> Result<(), StorageError> {
        save_pretty(&self.path, mistakes)
    }

    /// Increments the count for `key` (starting at 1) and saves.
    /// Returns the new count.
    pub fn record_mistake(&self, key: &str) -> Result<u64, StorageError> {
        let mut mistakes = self.load();
        let count = mistakes.entry(key.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;
        self.save(&mistakes)?;
        log::info!("Recorded mistake for {} (now {})", key, count);
        Ok(count)
    }
}
