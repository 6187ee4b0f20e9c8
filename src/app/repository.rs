//! Trip repository: the authoritative list of trips and the current selection.
//!
//! [`TripRepository`] owns the ordered trips, an id → position index, and the
//! id of the trip currently on screen. Every mutation goes through a method so
//! two rules can run after each change:
//!
//! 1. **Selection repair**: if the selection no longer names a trip, it moves to
//!    the first trip, or to none when the list is empty.
//! 2. **Persistence**: once the initial load has finished, every change to the
//!    list re-serializes the whole array to storage. Write failures are logged
//!    and remembered but never roll back in-memory state.

use crate::domain::{sample_trips, Trip};
use crate::storage::{KeyValueStore, TripStore};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// In-memory trip list with a consistent selection pointer.
#[derive(Debug)]
pub struct TripRepository<S> {
    trips: Vec<Trip>,

    /// Trip id → position in `trips`. Rebuilt whenever positions shift.
    index: HashMap<u32, usize>,

    /// Currently selected trip id; `None` only while `trips` is empty.
    current: Option<u32>,

    /// True until [`TripRepository::load`] completes.
    loading: bool,

    /// Seed the built-in sample journal when storage is empty or unreadable.
    seed_sample_data: bool,

    /// Artificial pause before a load completes, purely cosmetic.
    load_delay: Duration,

    store: TripStore<S>,

    /// Message of the most recent failed write, cleared by the next success.
    last_write_error: Option<String>,
}

impl<S: KeyValueStore> TripRepository<S> {
    /// Creates an empty repository in the loading state.
    ///
    /// Nothing is read until [`TripRepository::load`] is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use wanderlog::app::TripRepository;
    /// use wanderlog::storage::MemoryStore;
    ///
    /// let mut repo = TripRepository::new(MemoryStore::new());
    /// assert!(repo.is_loading());
    ///
    /// repo.load();
    /// assert!(!repo.is_loading());
    /// assert_eq!(repo.current_id(), Some(1)); // seeded with sample trips
    /// ```
    pub fn new(backend: S) -> Self {
        Self {
            trips: Vec::new(),
            index: HashMap::new(),
            current: None,
            loading: true,
            seed_sample_data: true,
            load_delay: Duration::ZERO,
            store: TripStore::new(backend),
            last_write_error: None,
        }
    }

    /// Sets whether an empty store is seeded with the sample journal.
    #[must_use]
    pub fn with_sample_seed(mut self, seed: bool) -> Self {
        self.seed_sample_data = seed;
        self
    }

    /// Sets the artificial delay applied before a load completes.
    #[must_use]
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    /// Loads trips from storage.
    ///
    /// Uses the stored array verbatim when it holds at least one trip. A
    /// missing, empty or unreadable payload falls back to the sample journal
    /// (or an empty list when seeding is disabled); an unreadable payload is
    /// logged at `warn` and otherwise recovered silently.
    ///
    /// Stored trips lacking an id, or repeating an earlier trip's id, are
    /// given fresh ids so ids are unique from the first read.
    pub fn load(&mut self) {
        let _span = tracing::debug_span!("repository_load").entered();

        if !self.load_delay.is_zero() {
            tracing::trace!(delay_ms = self.load_delay.as_millis(), "applying load delay");
            std::thread::sleep(self.load_delay);
        }

        let stored = match self.store.read_trips() {
            Ok(Some(trips)) if !trips.is_empty() => Some(trips),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "stored trips unreadable, falling back to seed data");
                None
            }
        };

        let trips = stored.unwrap_or_else(|| {
            if self.seed_sample_data {
                tracing::debug!("seeding sample journal");
                sample_trips()
            } else {
                Vec::new()
            }
        });

        self.trips = normalize_ids(trips);
        self.rebuild_index();
        self.loading = false;
        self.after_change(true);

        tracing::debug!(count = self.trips.len(), current = ?self.current, "repository loaded");
    }

    /// Inserts or replaces a trip and selects it.
    ///
    /// A trip without an id is assigned [`TripRepository::next_id`]. If a trip
    /// with the same id exists it is replaced in place, keeping its position;
    /// otherwise the trip is appended.
    ///
    /// Returns `true` for an update, `false` for an insert.
    pub fn save(&mut self, mut trip: Trip) -> bool {
        let id = trip.id.unwrap_or_else(|| self.next_id());
        trip.id = Some(id);

        let _span = tracing::debug_span!("repository_save", id, city = %trip.city).entered();

        let updated = if let Some(&pos) = self.index.get(&id) {
            self.trips[pos] = trip;
            true
        } else {
            self.index.insert(id, self.trips.len());
            self.trips.push(trip);
            false
        };

        self.current = Some(id);
        self.after_change(true);

        tracing::debug!(updated, "trip saved");
        updated
    }

    /// Removes the trip with `id`, returning it.
    ///
    /// Returns `None` and changes nothing when no such trip exists. If the
    /// removed trip was selected, the selection moves to the first remaining
    /// trip or to none.
    pub fn delete(&mut self, id: u32) -> Option<Trip> {
        let _span = tracing::debug_span!("repository_delete", id).entered();

        let Some(pos) = self.index.get(&id).copied() else {
            tracing::debug!("trip not found, nothing deleted");
            return None;
        };

        let removed = self.trips.remove(pos);
        self.rebuild_index();

        if self.current == Some(id) {
            self.current = self.first_id();
        }
        self.after_change(true);

        tracing::debug!(remaining = self.trips.len(), current = ?self.current, "trip deleted");
        Some(removed)
    }

    /// Sets the selection to `id` without checking that it exists.
    ///
    /// Selection repair runs right after, so selecting an unknown id while trips
    /// exist lands on the first trip.
    pub fn select(&mut self, id: u32) {
        tracing::debug!(id, "selecting trip");
        self.current = Some(id);
        self.after_change(false);
    }

    /// Moves the selection to the next trip in list order, wrapping to the first.
    pub fn next(&mut self) {
        self.step(|pos, len| (pos + 1) % len);
    }

    /// Moves the selection to the previous trip in list order, wrapping to the last.
    pub fn previous(&mut self) {
        self.step(|pos, len| if pos == 0 { len - 1 } else { pos - 1 });
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) {
        let len = self.trips.len();
        if len < 2 {
            return;
        }

        let pos = self
            .current
            .and_then(|id| self.index.get(&id).copied())
            .unwrap_or(0);
        self.current = self.trips[advance(pos, len)].id;
        self.after_change(false);
    }

    /// Id a newly created trip would receive: `max(ids) + 1`, or 1 when empty.
    ///
    /// When `max(ids)` is `u32::MAX` the smallest unused id is returned instead.
    #[must_use]
    pub fn next_id(&self) -> u32 {
        let after_max = self.index.keys().max().map_or(Some(1), |max| max.checked_add(1));
        after_max.unwrap_or_else(|| first_free_id(|id| self.index.contains_key(&id)))
    }

    /// Looks a trip up by id.
    #[must_use]
    pub fn get_by_id(&self, id: u32) -> Option<&Trip> {
        self.index.get(&id).map(|&pos| &self.trips[pos])
    }

    /// Replaces the whole list, as an import or external reset would.
    ///
    /// Ids are normalized, the selection is repaired and the new list is
    /// persisted.
    pub fn replace_all(&mut self, trips: Vec<Trip>) {
        let _span = tracing::debug_span!("repository_replace_all", count = trips.len()).entered();
        self.trips = normalize_ids(trips);
        self.rebuild_index();
        self.after_change(true);
    }

    /// Trips in list order.
    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Currently selected trip id.
    #[must_use]
    pub const fn current_id(&self) -> Option<u32> {
        self.current
    }

    /// Currently selected trip.
    #[must_use]
    pub fn current_trip(&self) -> Option<&Trip> {
        self.current.and_then(|id| self.get_by_id(id))
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error message from the most recent failed storage write, if any.
    #[must_use]
    pub fn last_write_error(&self) -> Option<&str> {
        self.last_write_error.as_deref()
    }

    /// Underlying storage adapter.
    pub const fn store(&self) -> &TripStore<S> {
        &self.store
    }

    /// Mutable access to the storage adapter.
    pub fn store_mut(&mut self) -> &mut TripStore<S> {
        &mut self.store
    }

    fn first_id(&self) -> Option<u32> {
        self.trips.first().and_then(|t| t.id)
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .trips
            .iter()
            .enumerate()
            .filter_map(|(pos, trip)| trip.id.map(|id| (id, pos)))
            .collect();
    }

    /// Runs selection repair, then persists if the list itself changed.
    fn after_change(&mut self, list_changed: bool) {
        self.repair_selection();
        if list_changed && !self.loading {
            self.persist();
        }
    }

    fn repair_selection(&mut self) {
        let valid = self.current.is_some_and(|id| self.index.contains_key(&id));
        if !valid {
            let repaired = self.first_id();
            if repaired != self.current {
                tracing::debug!(from = ?self.current, to = ?repaired, "repairing selection");
            }
            self.current = repaired;
        }
    }

    fn persist(&mut self) {
        match self.store.write_trips(&self.trips) {
            Ok(()) => self.last_write_error = None,
            Err(e) => {
                tracing::error!(error = %e, count = self.trips.len(), "failed to persist trips");
                self.last_write_error = Some(e.to_string());
            }
        }
    }
}

/// Assigns fresh ids to trips whose id is missing or already taken.
///
/// Trips keep their order; the first occurrence of an id wins.
fn normalize_ids(mut trips: Vec<Trip>) -> Vec<Trip> {
    let mut next = trips
        .iter()
        .filter_map(|t| t.id)
        .max()
        .map_or(Some(1), |max| max.checked_add(1));
    let mut seen = HashSet::with_capacity(trips.len());
    let mut reassigned = 0usize;

    for trip in &mut trips {
        match trip.id {
            Some(id) if seen.insert(id) => {}
            _ => {
                let id = match next {
                    Some(id) if !seen.contains(&id) => id,
                    _ => first_free_id(|id| seen.contains(&id)),
                };
                trip.id = Some(id);
                seen.insert(id);
                next = id.checked_add(1);
                reassigned += 1;
            }
        }
    }

    if reassigned > 0 {
        tracing::warn!(reassigned, "assigned fresh ids to trips with missing or duplicate ids");
    }
    trips
}

/// Smallest id from 1 upwards for which `taken` is false.
///
/// A journal cannot hold `u32::MAX` trips, so a free id always exists; 0 is
/// only returned if every id is taken.
fn first_free_id(taken: impl Fn(u32) -> bool) -> u32 {
    (1..=u32::MAX).find(|&id| !taken(id)).unwrap_or(0)
}
