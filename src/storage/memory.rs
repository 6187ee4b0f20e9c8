//! In-memory key-value backend.
//!
//! Used by tests and by callers that do not want anything on disk. An optional
//! byte quota reproduces the "storage full" failure of browser local storage.

use crate::domain::error::{JournalError, Result};
use crate::storage::backend::KeyValueStore;
use std::collections::HashMap;

/// Map-backed store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    /// Maximum total bytes of keys plus values, `None` for unlimited.
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    /// Creates an empty, unlimited store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that rejects writes growing past `quota_bytes`.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Total bytes currently held (keys plus values).
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.items.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota_bytes {
            let replaced = self.items.get(key).map_or(0, |old| key.len() + old.len());
            let projected = self.used_bytes() - replaced + key.len() + value.len();
            if projected > quota {
                tracing::debug!(key = %key, projected, quota, "memory store quota exceeded");
                return Err(JournalError::StorageWrite(format!(
                    "quota of {quota} bytes exceeded writing {key:?} ({projected} bytes)"
                )));
            }
        }

        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_rejects_oversized_write_and_keeps_old_value() {
        let mut store = MemoryStore::with_quota(10);
        store.set_item("k", "12345").unwrap();

        let err = store.set_item("k", "0123456789").unwrap_err();
        assert!(matches!(err, JournalError::StorageWrite(_)));
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("12345"));
    }

    #[test]
    fn replacing_a_value_frees_its_old_bytes() {
        let mut store = MemoryStore::with_quota(6);
        store.set_item("k", "abcde").unwrap();
        store.set_item("k", "vwxyz").unwrap();
        assert_eq!(store.used_bytes(), 6);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let mut store = MemoryStore::new();
        store.remove_item("nothing").unwrap();
        assert_eq!(store.get_item("nothing").unwrap(), None);
    }
}
