//! Presentation layer: view models and a plain-text renderer.
//!
//! ```text
//! JournalState → compute_viewmodel → JournalViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable journal state
//! - [`renderer`]: Plain-text layout of a view model
//! - [`helpers`]: Shared formatting utilities (stars, truncation)

pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use viewmodel::{EmptyState, HeaderInfo, JournalViewModel, TripCard, TripDetail};
