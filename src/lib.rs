//! Wanderlog: the stateful core of a travel journal.
//!
//! Wanderlog keeps a list of trips (visited places and wishlisted ones),
//! remembers which trip is on screen, persists every change to a key-value
//! store, and coordinates the journal's overlays (destinations browser, trip
//! form, confirmation dialog) including the page scroll lock they imply.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, actions                          │
//! │  - Trip repository, modal manager, filter           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────────┐
//! │ UI Layer      │   │ Storage Layer     │
//! │ (ui/)         │   │ (storage/)        │
//! │ - View models │   │ - Trip store      │
//! │ - Text render │   │ - JSON file / mem │
//! └───────────────┘   └───────────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Trip, form, dates, errors (domain/)              │
//! │  - Data directory resolution (infrastructure/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Repository, modal manager, filter, state and event handling
//! - [`domain`]: Core domain types (Trip, TripForm, errors)
//! - [`infrastructure`]: Platform utilities (paths)
//! - [`storage`]: Key-value backends and the trip store adapter
//! - [`ui`]: View models and plain-text rendering
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! Either a string map ([`Config::from_map`]) or a TOML file
//! ([`Config::from_file`]):
//!
//! ```toml
//! data_dir = "~/.local/share/wanderlog"
//! storage_file = "trips.json"
//! trace_level = "debug"
//! load_delay_ms = 0
//! seed_sample_data = true
//! ```
//!
//! # Example
//!
//! ```rust
//! use wanderlog::app::{handle_event, Event, JournalState, TripRepository};
//! use wanderlog::app::modal::DocumentStyle;
//! use wanderlog::storage::MemoryStore;
//!
//! let repository = TripRepository::new(MemoryStore::new());
//! let mut state = JournalState::new(repository, DocumentStyle::default());
//!
//! for event in [Event::Load, Event::NextTrip, Event::RequestDelete(2), Event::ConfirmDelete] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.repository.len(), 3);
//! # Ok::<(), wanderlog::JournalError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, Event, JournalState, ModalManager, TripRepository};
pub use domain::{JournalError, Result, Trip, TripForm};

use app::modal::DocumentStyle;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use storage::JsonFileStore;

/// Runtime configuration.
///
/// Every field has a default, so an empty map or an empty TOML file yields
/// [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory for the trip store and the log file. Tilde-expanded.
    ///
    /// Default: `~/.local/share/wanderlog`
    pub data_dir: Option<String>,

    /// Store file name, relative to `data_dir` unless absolute.
    ///
    /// Default: `"trips.json"`
    pub storage_file: String,

    /// Tracing filter directive (`trace`, `debug`, `info`, `warn`, `error`, or
    /// a full `EnvFilter` expression). Default: `"info"`
    pub trace_level: Option<String>,

    /// Artificial pause before the initial load completes, in milliseconds.
    ///
    /// Default: `0`
    pub load_delay_ms: u64,

    /// Seed the sample journal when the store holds no trips. Default: `true`
    pub seed_sample_data: bool,
}

/// Default store file name.
pub const DEFAULT_STORAGE_FILE: &str = "trips.json";

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_file: DEFAULT_STORAGE_FILE.to_string(),
            trace_level: None,
            load_delay_ms: 0,
            seed_sample_data: true,
        }
    }
}

impl Config {
    /// Parses configuration from a string map, such as command-line `key=value`
    /// pairs.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`, `storage_file`, `trace_level`: taken as is (empty values ignored)
    /// - `load_delay_ms`: String → `u64` (falls back to 0 on parse error)
    /// - `seed_sample_data`: `"true"`/`"false"` (falls back to `true`)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use wanderlog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("storage_file".to_string(), "journal.json".to_string());
    /// map.insert("load_delay_ms".to_string(), "250".to_string());
    /// map.insert("seed_sample_data".to_string(), "false".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.storage_file, "journal.json");
    /// assert_eq!(config.load_delay_ms, 250);
    /// assert!(!config.seed_sample_data);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let load_delay_ms = config
            .get("load_delay_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.load_delay_ms);

        let seed_sample_data = config
            .get("seed_sample_data")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(defaults.seed_sample_data);

        Self {
            data_dir: non_empty("data_dir"),
            storage_file: non_empty("storage_file").unwrap_or(defaults.storage_file),
            trace_level: non_empty("trace_level"),
            load_delay_ms,
            seed_sample_data,
        }
    }

    /// Reads configuration from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Io`] if the file cannot be read and
    /// [`JournalError::Config`] if it is not valid TOML or names an unknown key.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text).map_err(|e| match e {
            JournalError::Config(msg) => {
                JournalError::Config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Config`] on invalid TOML, wrong value types or
    /// unknown keys.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| JournalError::Config(e.to_string()))
    }

    /// Full path of the trip store file.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        let file = infrastructure::expand_tilde(&self.storage_file);
        infrastructure::get_data_dir(self).join(file)
    }

    #[must_use]
    pub const fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

/// Journal state backed by the JSON file store.
pub type FileJournal = JournalState<JsonFileStore, DocumentStyle>;

/// Builds the journal state described by `config`.
///
/// Opens (or creates) the store file and wires the repository and modal
/// manager. Trips are not read yet: the repository starts in the loading state
/// until [`Event::Load`] is handled.
///
/// # Errors
///
/// Returns an I/O error if the store directory cannot be created or the store
/// file cannot be read. An unparsable store file is not an error: it is moved
/// aside and the journal starts from the sample trips.
///
/// # Example
///
/// ```rust,no_run
/// use wanderlog::{handle_event, initialize, Config, Event};
///
/// let mut journal = initialize(&Config::default())?;
/// handle_event(&mut journal, &Event::Load)?;
/// println!("{} trips", journal.repository.len());
/// # Ok::<(), wanderlog::JournalError>(())
/// ```
pub fn initialize(config: &Config) -> Result<FileJournal> {
    let storage_path = config.storage_path();
    tracing::debug!(
        storage = %storage_path.display(),
        seed = config.seed_sample_data,
        load_delay_ms = config.load_delay_ms,
        "initializing journal"
    );

    let store = JsonFileStore::new(storage_path)?;
    let repository = TripRepository::new(store)
        .with_sample_seed(config.seed_sample_data)
        .with_load_delay(config.load_delay());

    Ok(JournalState::new(repository, DocumentStyle::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_falls_back_on_bad_values() {
        let mut map = BTreeMap::new();
        map.insert("load_delay_ms".to_string(), "soon".to_string());
        map.insert("seed_sample_data".to_string(), "maybe".to_string());
        map.insert("storage_file".to_string(), "  ".to_string());

        assert_eq!(Config::from_map(&map), Config::default());
    }

    #[test]
    fn toml_overrides_only_given_keys() {
        let config = Config::from_toml("trace_level = \"debug\"\nload_delay_ms = 10\n").unwrap();
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.load_delay(), Duration::from_millis(10));
        assert_eq!(config.storage_file, DEFAULT_STORAGE_FILE);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        let err = Config::from_toml("theme = \"dark\"").unwrap_err();
        assert!(matches!(err, JournalError::Config(_)));
    }

    #[test]
    fn storage_path_joins_data_dir() {
        let config = Config {
            data_dir: Some("/srv/journal".to_string()),
            ..Config::default()
        };
        assert_eq!(config.storage_path(), PathBuf::from("/srv/journal/trips.json"));

        let absolute = Config {
            storage_file: "/tmp/elsewhere.json".to_string(),
            ..config
        };
        assert_eq!(absolute.storage_path(), PathBuf::from("/tmp/elsewhere.json"));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wanderlog.toml");
        std::fs::write(&path, "seed_sample_data = false\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.seed_sample_data);

        let missing = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, JournalError::Io(_)));
    }
}
