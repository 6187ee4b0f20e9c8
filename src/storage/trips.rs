//! Trips array adapter.
//!
//! [`TripStore`] reads and writes the whole trips array as one JSON string
//! under [`TRIPS_STORAGE_KEY`]. There is no incremental diff: every write
//! re-serializes the full array.

use crate::domain::error::{JournalError, Result};
use crate::domain::Trip;
use crate::storage::backend::KeyValueStore;

/// Storage key holding the JSON-encoded trips array.
pub const TRIPS_STORAGE_KEY: &str = "travelJournalTrips";

/// Typed wrapper around a [`KeyValueStore`] for the trips array.
#[derive(Debug)]
pub struct TripStore<S> {
    backend: S,
}

impl<S: KeyValueStore> TripStore<S> {
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Reads the persisted trips.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::StorageRead`] when the stored payload is not a
    /// valid trips array, or the backend's own error if it cannot be read.
    pub fn read_trips(&self) -> Result<Option<Vec<Trip>>> {
        let _span = tracing::debug_span!("read_trips", key = TRIPS_STORAGE_KEY).entered();

        let Some(raw) = self.backend.get_item(TRIPS_STORAGE_KEY)? else {
            tracing::debug!("no stored trips");
            return Ok(None);
        };

        let trips: Vec<Trip> = serde_json::from_str(&raw)
            .map_err(|e| JournalError::StorageRead(format!("failed to parse stored trips: {e}")))?;

        tracing::debug!(count = trips.len(), "stored trips read");
        Ok(Some(trips))
    }

    /// Serializes `trips` and stores them under the fixed key.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::StorageWrite`] if serialization or the backend
    /// write fails.
    pub fn write_trips(&mut self, trips: &[Trip]) -> Result<()> {
        let _span = tracing::debug_span!("write_trips", count = trips.len()).entered();

        let json = serde_json::to_string(trips)
            .map_err(|e| JournalError::StorageWrite(format!("failed to serialize trips: {e}")))?;
        self.backend.set_item(TRIPS_STORAGE_KEY, &json)?;

        tracing::debug!(bytes = json.len(), "trips written");
        Ok(())
    }

    /// Unwraps the adapter, returning the backend.
    pub fn into_inner(self) -> S {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_trips;
    use crate::storage::MemoryStore;

    #[test]
    fn missing_key_reads_as_none() {
        let store = TripStore::new(MemoryStore::new());
        assert_eq!(store.read_trips().unwrap(), None);
    }

    #[test]
    fn write_then_read_is_identical() {
        let mut store = TripStore::new(MemoryStore::new());
        let trips = sample_trips();

        store.write_trips(&trips).unwrap();
        assert_eq!(store.read_trips().unwrap(), Some(trips));
    }

    #[test]
    fn corrupt_payload_is_a_read_error() {
        let mut backend = MemoryStore::new();
        backend.set_item(TRIPS_STORAGE_KEY, "[{\"id\": 1,").unwrap();
        let store = TripStore::new(backend);

        assert!(matches!(store.read_trips(), Err(JournalError::StorageRead(_))));
    }

    #[test]
    fn quota_failure_is_a_write_error() {
        let mut store = TripStore::new(MemoryStore::with_quota(32));
        let err = store.write_trips(&sample_trips()).unwrap_err();
        assert!(matches!(err, JournalError::StorageWrite(_)));
    }
}
