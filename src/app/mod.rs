//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the presentation shell (the binary, or any host UI)
//! and the domain/storage layers:
//!
//! ```text
//! User Intent → Event → handle_event → State Mutations → Actions → Side Effects
//!                                            │
//!                                            └→ TripRepository → TripStore → KeyValueStore
//! ```
//!
//! # Modules
//!
//! - [`repository`]: Authoritative trip list, selection and persistence trigger
//! - [`modal`]: Generic modal slot manager with scroll lock
//! - [`modes`]: The journal's modal slots and payloads
//! - [`filter`]: Search, view and sort of the card list, plus statistics
//! - [`state`]: Central state container and view model computation
//! - [`handler`]: Event processing and state transitions
//! - [`actions`]: Side effect commands emitted by the handler

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modal;
pub mod modes;
pub mod repository;
pub mod state;

pub use actions::{Action, NotificationKind};
pub use filter::{TripFilter, TripSort, TripStats, TripView};
pub use handler::{handle_event, Event};
pub use modal::{DocumentStyle, ModalHandle, ModalManager, ModalState, ScrollSurface};
pub use modes::{Modal, ModalPayload};
pub use repository::TripRepository;
pub use state::JournalState;
