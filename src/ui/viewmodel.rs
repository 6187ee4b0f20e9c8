//! View model types representing renderable journal state.
//!
//! View models are computed from [`crate::app::JournalState`] and consumed by
//! whatever draws the journal (the text renderer in this crate, or a host UI).
//! They hold display-ready data only: titles are already formatted, ratings are
//! already turned into stars.
//!
//! # Example
//!
//! ```rust
//! use wanderlog::ui::viewmodel::{EmptyState, JournalViewModel};
//! use wanderlog::app::TripStats;
//!
//! let vm = JournalViewModel {
//!     header: wanderlog::ui::viewmodel::HeaderInfo { title: "Wanderlog".to_string() },
//!     cards: vec![],
//!     selected: None,
//!     stats: TripStats::from_trips(&[]),
//!     is_loading: false,
//!     any_modal_open: false,
//!     empty_state: Some(EmptyState {
//!         message: "No trips yet".to_string(),
//!         subtitle: "Add your first destination".to_string(),
//!     }),
//! };
//! assert!(vm.cards.is_empty());
//! ```

use crate::app::TripStats;

/// Complete view model of the journal screen.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalViewModel {
    pub header: HeaderInfo,

    /// Trips after the active filter, in display order.
    pub cards: Vec<TripCard>,

    /// Detail of the selected trip. `None` while loading or when the journal is
    /// empty.
    pub selected: Option<TripDetail>,

    /// Summary over the whole journal, independent of the filter.
    pub stats: TripStats,

    /// Whether the initial load is still in progress.
    pub is_loading: bool,

    /// Whether any overlay is open; hosts dim and lock the page behind it.
    pub any_modal_open: bool,

    /// Message shown instead of cards when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// One trip in the card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripCard {
    pub id: u32,

    /// "City, Country".
    pub title: String,

    pub continent: String,
    pub date: String,

    /// Filled and empty stars, e.g. `"★★★★☆"`. Empty for wishlist trips.
    pub rating_stars: String,

    pub is_wishlist: bool,
    pub tags: Vec<String>,

    /// Whether this card is the repository's current trip.
    pub is_selected: bool,
}

/// Full detail of the selected trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDetail {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub rating_stars: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub lowlights: Vec<String>,
    pub image: String,
    pub image_alt: String,
    pub notes: String,
    pub expenses: String,
    pub tags: Vec<String>,
    pub is_wishlist: bool,

    /// One-based position in the repository and the total count, for "2 / 5".
    pub position: (usize, usize),
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Empty state message display information.
///
/// Shown when no trips are listed: either the journal is empty or the filter
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No trips yet").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
