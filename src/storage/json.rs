//! JSON file-based key-value backend.
//!
//! All keys live in one human-readable JSON document. Every write goes through
//! an atomic write-to-temp + rename so a crash never leaves a half-written file.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1), the document is loaded into memory once
//! - **Write**: O(n), the whole document is serialized on every change
//! - **Best for**: a single journal of a few hundred trips

use crate::domain::error::{JournalError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current container format version.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// Values are kept as opaque strings, mirroring browser local storage; the
/// trips adapter stores its own JSON array as one string value.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the container format for future migrations.
    version: u32,

    #[serde(default)]
    items: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            items: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; owned by the application root and used from one thread.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "items": {
///     "travelJournalTrips": "[{\"id\":1,\"city\":\"Santorini\", ...}]"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the document, loaded on creation and kept equal to the
    /// file after every successful write.
    data: StorageData,
}

impl JsonFileStore {
    /// Creates or opens a JSON file store.
    ///
    /// If the file exists its items are loaded, otherwise the store starts
    /// empty. Parent directories are created automatically.
    ///
    /// A file that exists but is not a valid container is moved aside to
    /// `<file>.corrupt` and the store starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wanderlog::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::new(PathBuf::from("/tmp/wanderlog/storage.json"))?;
    /// # Ok::<(), wanderlog::JournalError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON file store");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = if file_path.exists() {
            match Self::load_from_file(&file_path) {
                Ok(data) => data,
                Err(JournalError::StorageRead(reason)) => {
                    Self::quarantine(&file_path, &reason);
                    StorageData::default()
                }
                Err(e) => return Err(e),
            }
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(item_count = data.items.len(), "file store initialized");

        Ok(Self { file_path, data })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Path an unreadable store file is moved to.
    #[must_use]
    pub fn corrupt_backup_path(&self) -> PathBuf {
        corrupt_backup_path(&self.file_path)
    }

    /// Loads the container from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::StorageRead`] if the file is not a valid
    /// container, or an I/O error if it cannot be read.
    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| JournalError::StorageRead(format!("failed to parse {}: {e}", path.display())))?;

        if data.version != FORMAT_VERSION {
            tracing::warn!(version = data.version, expected = FORMAT_VERSION, "unexpected store version");
        }

        tracing::debug!(version = data.version, items = data.items.len(), "loaded store data");
        Ok(data)
    }

    /// Moves an unreadable store file aside, keeping it for inspection.
    fn quarantine(path: &Path, reason: &str) {
        let backup = corrupt_backup_path(path);
        match std::fs::rename(path, &backup) {
            Ok(()) => tracing::warn!(
                error = %reason,
                backup = %backup.display(),
                "store file unreadable, moved aside and starting empty"
            ),
            Err(e) => tracing::error!(
                error = %reason,
                rename_error = %e,
                "store file unreadable and could not be moved aside, starting empty"
            ),
        }
    }

    /// Saves the container to disk using an atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::StorageWrite`] if serialization, the temporary
    /// file write or the rename fails.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| JournalError::StorageWrite(format!("failed to serialize store: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)
            .map_err(|e| JournalError::StorageWrite(format!("{}: {e}", tmp_path.display())))?;
        if let Err(e) = std::fs::rename(&tmp_path, &self.file_path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(JournalError::StorageWrite(format!("{}: {e}", self.file_path.display())));
        }

        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }

    /// Applies `change`, persists, and rolls the item back if the save fails.
    fn commit(&mut self, key: &str, change: Option<String>) -> Result<()> {
        let previous = match change {
            Some(value) => self.data.items.insert(key.to_string(), value),
            None => self.data.items.remove(key),
        };

        if let Err(e) = self.save_to_file() {
            match previous {
                Some(old) => self.data.items.insert(key.to_string(), old),
                None => self.data.items.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

fn corrupt_backup_path(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.corrupt", path.display()))
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_item", key = %key, len = value.len()).entered();
        self.commit(key, Some(value.to_string()))
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove_item", key = %key).entered();
        if !self.data.items.contains_key(key) {
            return Ok(());
        }
        self.commit(key, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        {
            let mut store = JsonFileStore::new(path.clone()).unwrap();
            store.set_item("a", "1").unwrap();
            store.set_item("b", "2").unwrap();
            store.remove_item("a").unwrap();
        }

        let store = JsonFileStore::new(path).unwrap();
        assert_eq!(store.get_item("a").unwrap(), None);
        assert_eq!(store.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn corrupt_container_is_moved_aside_and_store_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut store = JsonFileStore::new(path.clone()).unwrap();
        assert_eq!(store.get_item("anything").unwrap(), None);

        let backup = store.corrupt_backup_path();
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "{ not json");
        assert!(!path.exists());

        store.set_item("k", "v").unwrap();
        let reopened = JsonFileStore::new(path).unwrap();
        assert_eq!(reopened.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn failed_write_rolls_the_item_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = JsonFileStore::new(path.clone()).unwrap();

        // A non-empty directory in place of the file makes the rename fail.
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupied"), "x").unwrap();

        let err = store.set_item("k", "v").unwrap_err();
        assert!(matches!(err, JournalError::StorageWrite(_)));
        assert_eq!(store.get_item("k").unwrap(), None);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = JsonFileStore::new(path.clone()).unwrap();
        store.set_item("k", "v").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
