//! Domain layer for the travel journal.
//!
//! Core types independent of storage backends and presentation.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`trip`]: Trip record
//! - [`date`]: "Month Year" date parsing used for sorting
//! - [`form`]: Create/edit form payload and the image collaborator contract
//! - [`sample`]: Built-in sample journal used to seed empty storage

pub mod date;
pub mod error;
pub mod form;
pub mod sample;
pub mod trip;

pub use date::{format_month_year, parse_month_year, MonthYear};
pub use error::{JournalError, Result};
pub use form::{CompressOptions, ImageCompressor, TripForm};
pub use sample::sample_trips;
pub use trip::{Trip, MAX_RATING};
