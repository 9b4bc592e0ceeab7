//! Local mirror of the task collection.
//!
//! The whole collection is stored as one JSON document in a single keyed
//! slot (`<key>.json` in the data directory). Reads never fail: a missing,
//! unreadable or malformed slot is reported as absent so the caller falls
//! back to the remote fetch.

use super::data_storage::DataStorage;
use super::task::Task;
use anyhow::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Slot name used when none is configured.
pub const DEFAULT_CACHE_KEY: &str = "todos";

#[derive(Debug, Clone)]
pub struct Cache {
    path: PathBuf,
}

impl Cache {
    /// Opens the slot `key` inside the application data directory.
    pub fn new(key: &str) -> Result<Self> {
        let path = DataStorage::new().get_path(&format!("{}.json", key))?;
        Ok(Self { path })
    }

    /// Opens a slot at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored collection, or `None` when the slot is empty or unusable.
    pub fn load(&self) -> Option<Vec<Task>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read saved todos");
                return None;
            }
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                debug!(count = tasks.len(), "restored todos from cache");
                Some(tasks)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to parse saved todos");
                None
            }
        }
    }

    /// Replaces the slot contents with `tasks`.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let raw = serde_json::to_string(tasks)?;
        fs::write(&self.path, raw)?;
        debug!(count = tasks.len(), "saved todos to cache");
        Ok(())
    }

    /// Removes the slot. A slot that does not exist is already clear.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
