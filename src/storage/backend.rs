//! Key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait: the narrow local-storage seam
//! the journal persists through. String keys map to string values, exactly like
//! browser local storage, so the persisted layout is the same whichever backend
//! is plugged in.
//!
//! # Design Philosophy
//!
//! The trait only carries the three operations the trips adapter needs. Typed
//! access (parsing the trips array) lives in [`crate::storage::TripStore`].

use crate::domain::error::Result;

/// Abstraction over persistent key-value backends.
///
/// # Implementations
///
/// - [`crate::storage::MemoryStore`]: in-process map with an optional quota
/// - [`crate::storage::JsonFileStore`]: JSON document on disk with atomic writes
///
/// # Examples
///
/// ```
/// use wanderlog::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set_item("greeting", "hello")?;
/// assert_eq!(store.get_item("greeting")?.as_deref(), Some("hello"));
/// # Ok::<(), wanderlog::JournalError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::JournalError::StorageWrite`] if the value cannot be
    /// stored (quota exceeded, I/O failure).
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}
