//! Storage layer for the persisted trips array.
//!
//! The journal persists through a browser-style key-value store: one fixed key
//! holds the JSON-encoded trips array.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait abstracting over backends
//! - `memory`: in-memory backend with an optional quota
//! - `json`: JSON file backend with atomic writes
//! - `trips`: typed adapter reading and writing the trips array

pub mod backend;
pub mod json;
pub mod memory;
pub mod trips;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use trips::{TripStore, TRIPS_STORAGE_KEY};
