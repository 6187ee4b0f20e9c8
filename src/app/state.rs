//! Application state management and view model computation.
//!
//! [`JournalState`] is the single source of truth of the journal screen. It
//! holds three parts:
//!
//! - **Repository**: the trips and the current selection ([`TripRepository`])
//! - **Modals**: open overlays and their payloads ([`ModalManager`])
//! - **Filter**: search, view and sort settings for the card list ([`TripFilter`])
//!
//! The filter only changes what is listed; selection and navigation always
//! follow repository order.
//!
//! # Example
//!
//! ```rust
//! use wanderlog::app::{JournalState, TripRepository};
//! use wanderlog::app::modal::DocumentStyle;
//! use wanderlog::storage::MemoryStore;
//!
//! let mut state = JournalState::new(TripRepository::new(MemoryStore::new()), DocumentStyle::default());
//! state.repository.load();
//!
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.cards.len(), 4);
//! assert!(vm.cards[0].is_selected);
//! ```

use super::filter::{TripFilter, TripStats};
use super::modal::{ModalManager, ScrollSurface};
use super::modes::{Modal, ModalPayload};
use super::repository::TripRepository;
use crate::domain::Trip;
use crate::storage::KeyValueStore;
use crate::ui::helpers::rating_stars;
use crate::ui::viewmodel::{EmptyState, HeaderInfo, JournalViewModel, TripCard, TripDetail};

/// Title shown in the header.
pub const APP_TITLE: &str = "Wanderlog";

/// Central application state container.
///
/// Constructed by the caller and passed explicitly; there is no global
/// instance. Mutated by [`crate::app::handle_event`].
#[derive(Debug)]
pub struct JournalState<S, D: ScrollSurface> {
    /// Trips and selection.
    pub repository: TripRepository<S>,

    /// Destinations browser, trip form and confirmation dialog.
    pub modals: ModalManager<Modal, ModalPayload, D>,

    /// Active search, view and sort settings.
    pub filter: TripFilter,
}

impl<S: KeyValueStore, D: ScrollSurface> JournalState<S, D> {
    /// Creates the state around a repository, with every modal closed and no
    /// filter.
    #[must_use]
    pub fn new(repository: TripRepository<S>, surface: D) -> Self {
        Self {
            repository,
            modals: ModalManager::new(Modal::ALL, surface),
            filter: TripFilter::default(),
        }
    }

    /// Trips passing the active filter, in display order.
    #[must_use]
    pub fn visible_trips(&self) -> Vec<&Trip> {
        self.filter.apply(self.repository.trips())
    }

    /// Computes the renderable view model from the current state.
    ///
    /// While loading, the card list is empty and no trip is selected. Stats
    /// always cover the whole journal, not just the filtered cards.
    #[must_use]
    pub fn compute_viewmodel(&self) -> JournalViewModel {
        let _span = tracing::debug_span!("compute_viewmodel",
            trips = self.repository.len(),
            loading = self.repository.is_loading()
        )
        .entered();

        let header = HeaderInfo {
            title: APP_TITLE.to_string(),
        };
        let any_modal_open = self.modals.is_any_modal_open();

        if self.repository.is_loading() {
            return JournalViewModel {
                header,
                cards: vec![],
                selected: None,
                stats: TripStats::from_trips(&[]),
                is_loading: true,
                any_modal_open,
                empty_state: None,
            };
        }

        let current = self.repository.current_id();
        let cards: Vec<TripCard> = self
            .visible_trips()
            .into_iter()
            .filter_map(|trip| {
                let id = trip.id?;
                Some(TripCard {
                    id,
                    title: trip.title(),
                    continent: trip.continent.clone(),
                    date: trip.date.clone(),
                    rating_stars: if trip.is_wishlist {
                        String::new()
                    } else {
                        rating_stars(trip.rating)
                    },
                    is_wishlist: trip.is_wishlist,
                    tags: trip.tags.clone(),
                    is_selected: current == Some(id),
                })
            })
            .collect();

        let empty_state = if self.repository.is_empty() {
            Some(EmptyState {
                message: "No trips yet".to_string(),
                subtitle: "Add your first destination to start the journal".to_string(),
            })
        } else if cards.is_empty() && self.filter.is_active() {
            Some(EmptyState {
                message: "No trips match your filters".to_string(),
                subtitle: "Try a different search or view".to_string(),
            })
        } else {
            None
        };

        JournalViewModel {
            header,
            cards,
            selected: self.selected_detail(),
            stats: TripStats::from_trips(self.repository.trips()),
            is_loading: false,
            any_modal_open,
            empty_state,
        }
    }

    fn selected_detail(&self) -> Option<TripDetail> {
        let trip = self.repository.current_trip()?;
        let id = trip.id?;
        let position = self
            .repository
            .trips()
            .iter()
            .position(|t| t.id == Some(id))
            .map_or(0, |p| p + 1);

        Some(TripDetail {
            id,
            title: trip.title(),
            date: trip.date.clone(),
            rating_stars: rating_stars(trip.rating),
            description: trip.description.clone(),
            highlights: trip.highlights.clone(),
            lowlights: trip.lowlights.clone(),
            image: trip.image.clone(),
            image_alt: trip.image_alt.clone(),
            notes: trip.notes.clone(),
            expenses: trip.expenses.clone(),
            tags: trip.tags.clone(),
            is_wishlist: trip.is_wishlist,
            position: (position, self.repository.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::TripView;
    use crate::app::modal::DocumentStyle;
    use crate::storage::MemoryStore;

    fn loaded() -> JournalState<MemoryStore, DocumentStyle> {
        let mut state = JournalState::new(TripRepository::new(MemoryStore::new()), DocumentStyle::default());
        state.repository.load();
        state
    }

    #[test]
    fn viewmodel_while_loading_is_empty() {
        let state = JournalState::new(TripRepository::new(MemoryStore::new()), DocumentStyle::default());
        let vm = state.compute_viewmodel();

        assert!(vm.is_loading);
        assert!(vm.cards.is_empty());
        assert!(vm.selected.is_none());
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn selected_detail_reports_position() {
        let mut state = loaded();
        state.repository.select(3);
        let vm = state.compute_viewmodel();

        let detail = vm.selected.unwrap();
        assert_eq!(detail.id, 3);
        assert_eq!(detail.position, (3, 4));
        assert_eq!(vm.cards.iter().filter(|c| c.is_selected).count(), 1);
    }

    #[test]
    fn wishlist_cards_have_no_stars() {
        let vm = loaded().compute_viewmodel();
        let wish = vm.cards.iter().find(|c| c.is_wishlist).unwrap();
        assert!(wish.rating_stars.is_empty());
        assert_eq!(vm.cards[0].rating_stars, "★★★★★");
    }

    #[test]
    fn filter_narrows_cards_but_not_stats() {
        let mut state = loaded();
        state.filter.view = TripView::Wishlist;
        let vm = state.compute_viewmodel();

        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.stats.visited, 3);
        assert_eq!(vm.stats.wishlist, 1);
    }

    #[test]
    fn empty_states_distinguish_empty_journal_and_no_match() {
        let mut state = loaded();
        state.filter.query = "zzzzzz".into();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.empty_state.unwrap().message, "No trips match your filters");

        state.filter.query = "   ".into();
        let vm = state.compute_viewmodel();
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.cards.len(), 4);

        state.repository.replace_all(vec![]);
        state.filter.query = "zzzzzz".into();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.empty_state.unwrap().message, "No trips yet");
        assert!(vm.selected.is_none());
    }
}
