//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which the presentation
//! shell changes the journal. Each call:
//!
//! 1. pattern-matches the [`Event`]
//! 2. mutates [`JournalState`] through repository, modal and filter methods
//! 3. returns whether a re-render is needed plus the [`Action`]s to execute
//!
//! # Event Types
//!
//! - **Lifecycle**: `Load`
//! - **Navigation**: `SelectTrip`, `NextTrip`, `PreviousTrip`, `ChooseDestination`
//! - **Editing**: `NewTrip`, `EditTrip`, `SubmitTrip`, `CloseForm`
//! - **Deletion**: `RequestDelete`, `ConfirmDelete`, `CancelConfirm`
//! - **Overlays**: `ToggleDestinations`, `Escape`
//! - **Filtering**: `Search`, `SetView`, `SetSort`, `ClearFilters`
//!
//! # Example
//!
//! ```rust
//! use wanderlog::app::{handle_event, Event, JournalState, TripRepository};
//! use wanderlog::app::modal::DocumentStyle;
//! use wanderlog::storage::MemoryStore;
//!
//! let mut state = JournalState::new(TripRepository::new(MemoryStore::new()), DocumentStyle::default());
//! handle_event(&mut state, &Event::Load)?;
//!
//! let (render, _actions) = handle_event(&mut state, &Event::NextTrip)?;
//! assert!(render);
//! assert_eq!(state.repository.current_id(), Some(2));
//! # Ok::<(), wanderlog::JournalError>(())
//! ```

use super::actions::{Action, NotificationKind};
use super::filter::{TripFilter, TripSort, TripView};
use super::modal::ScrollSurface;
use super::modes::{Modal, ModalPayload};
use super::state::JournalState;
use crate::domain::error::{JournalError, Result};
use crate::domain::TripForm;
use crate::storage::KeyValueStore;

/// Intents raised by the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Reads stored trips (or seeds them) and ends the loading state.
    Load,
    /// Shows the trip with the given id. Unknown ids fall back to the first trip.
    SelectTrip(u32),
    /// Moves to the next trip in repository order, wrapping.
    NextTrip,
    /// Moves to the previous trip in repository order, wrapping.
    PreviousTrip,
    /// Opens an empty trip form.
    NewTrip,
    /// Opens the trip form prefilled with an existing trip.
    EditTrip(u32),
    /// Validates and saves the form; the form closes on success only.
    SubmitTrip(TripForm),
    /// Closes the trip form, discarding input.
    CloseForm,
    /// Asks for confirmation before deleting a trip.
    RequestDelete(u32),
    /// Deletes the trip named by the open confirmation dialog.
    ConfirmDelete,
    /// Closes the confirmation dialog without deleting.
    CancelConfirm,
    /// Opens or closes the destinations browser.
    ToggleDestinations,
    /// Picks a trip from the destinations browser and closes it.
    ChooseDestination(u32),
    /// Closes the topmost open overlay.
    Escape,
    /// Replaces the search query.
    Search(String),
    SetView(TripView),
    SetSort(TripSort),
    /// Resets search, view and sort.
    ClearFilters,
}

/// Processes an event, mutates journal state, and returns actions to execute.
///
/// The boolean is `true` when the state changed in a way that needs a
/// re-render.
///
/// Invalid form input is not an error here: it comes back as
/// [`Action::ShowFormError`] with the form left open. Storage write failures
/// are not errors either; the change stays in memory and a warning
/// notification is emitted.
///
/// # Errors
///
/// Returns errors other than [`JournalError::Validation`] raised while
/// converting a submitted form.
#[allow(clippy::too_many_lines)]
pub fn handle_event<S: KeyValueStore, D: ScrollSurface>(
    state: &mut JournalState<S, D>,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Load => {
            state.repository.load();
            let mut actions = vec![];
            push_write_warning(state, &mut actions);
            Ok((true, actions))
        }
        Event::SelectTrip(id) => {
            let before = state.repository.current_id();
            state.repository.select(*id);
            Ok(selection_changed(state, before))
        }
        Event::NextTrip => {
            let before = state.repository.current_id();
            state.repository.next();
            Ok(selection_changed(state, before))
        }
        Event::PreviousTrip => {
            let before = state.repository.current_id();
            state.repository.previous();
            Ok(selection_changed(state, before))
        }
        Event::NewTrip => {
            tracing::debug!("opening empty trip form");
            state.modals.open(Modal::TripForm, None);
            Ok((true, vec![]))
        }
        Event::EditTrip(id) => {
            let Some(trip) = state.repository.get_by_id(*id).cloned() else {
                tracing::debug!(trip_id = id, "edit requested for unknown trip");
                return Ok((false, vec![]));
            };
            state.modals.open(Modal::TripForm, Some(ModalPayload::EditTrip(trip)));
            Ok((true, vec![]))
        }
        Event::SubmitTrip(form) => {
            let trip = match form.clone().into_trip() {
                Ok(trip) => trip,
                Err(JournalError::Validation(message)) => {
                    tracing::debug!(error = %message, "trip form rejected");
                    return Ok((true, vec![Action::ShowFormError(message)]));
                }
                Err(e) => return Err(e),
            };

            let title = trip.title();
            let updated = state.repository.save(trip);
            state.modals.close(Modal::TripForm);

            let mut actions = vec![Action::notify(
                NotificationKind::Success,
                if updated {
                    format!("Updated {title}")
                } else {
                    format!("Added {title}")
                },
            )];
            push_write_warning(state, &mut actions);
            if let Some(id) = state.repository.current_id() {
                actions.push(Action::FocusTrip(id));
            }
            Ok((true, actions))
        }
        Event::CloseForm => {
            state.modals.close(Modal::TripForm);
            Ok((true, vec![]))
        }
        Event::RequestDelete(id) => {
            if state.repository.get_by_id(*id).is_none() {
                tracing::debug!(trip_id = id, "delete requested for unknown trip");
                return Ok((false, vec![]));
            }
            state
                .modals
                .open(Modal::Confirm, Some(ModalPayload::ConfirmDelete(*id)));
            Ok((true, vec![]))
        }
        Event::ConfirmDelete => {
            let pending = match state.modals.data(Modal::Confirm) {
                Some(ModalPayload::ConfirmDelete(id)) => Some(*id),
                _ => None,
            };
            state.modals.close(Modal::Confirm);

            let Some(id) = pending else {
                tracing::debug!("confirm without pending deletion");
                return Ok((true, vec![]));
            };

            let Some(deleted) = state.repository.delete(id) else {
                return Ok((true, vec![]));
            };

            let editing_deleted = matches!(
                state.modals.data(Modal::TripForm),
                Some(ModalPayload::EditTrip(trip)) if trip.id == Some(id)
            );
            if editing_deleted {
                state.modals.close(Modal::TripForm);
            }

            let mut actions = vec![Action::notify(
                NotificationKind::Info,
                format!("Deleted {}", deleted.title()),
            )];
            push_write_warning(state, &mut actions);
            if let Some(current) = state.repository.current_id() {
                actions.push(Action::FocusTrip(current));
            }
            Ok((true, actions))
        }
        Event::CancelConfirm => {
            state.modals.close(Modal::Confirm);
            Ok((true, vec![]))
        }
        Event::ToggleDestinations => {
            state.modals.toggle(Modal::Destinations);
            Ok((true, vec![]))
        }
        Event::ChooseDestination(id) => {
            state.repository.select(*id);
            state.modals.close(Modal::Destinations);
            let actions = state
                .repository
                .current_id()
                .map(Action::FocusTrip)
                .into_iter()
                .collect();
            Ok((true, actions))
        }
        Event::Escape => {
            let topmost = [Modal::Confirm, Modal::TripForm, Modal::Destinations]
                .into_iter()
                .find(|&slot| state.modals.is_open(slot));
            match topmost {
                Some(slot) => {
                    tracing::debug!(slot = ?slot, "closing topmost modal");
                    state.modals.close(slot);
                    Ok((true, vec![]))
                }
                None => Ok((false, vec![])),
            }
        }
        Event::Search(query) => {
            if state.filter.query == *query {
                return Ok((false, vec![]));
            }
            state.filter.query.clone_from(query);
            Ok((true, vec![]))
        }
        Event::SetView(view) => {
            let changed = state.filter.view != *view;
            state.filter.view = *view;
            Ok((changed, vec![]))
        }
        Event::SetSort(sort) => {
            let changed = state.filter.sort != *sort;
            state.filter.sort = *sort;
            Ok((changed, vec![]))
        }
        Event::ClearFilters => {
            let changed = state.filter != TripFilter::default();
            state.filter = TripFilter::default();
            Ok((changed, vec![]))
        }
    }
}

fn selection_changed<S: KeyValueStore, D: ScrollSurface>(
    state: &JournalState<S, D>,
    before: Option<u32>,
) -> (bool, Vec<Action>) {
    let after = state.repository.current_id();
    if after == before {
        return (false, vec![]);
    }
    (true, after.map(Action::FocusTrip).into_iter().collect())
}

fn push_write_warning<S: KeyValueStore, D: ScrollSurface>(
    state: &JournalState<S, D>,
    actions: &mut Vec<Action>,
) {
    if let Some(error) = state.repository.last_write_error() {
        actions.push(Action::notify(
            NotificationKind::Warning,
            format!("Changes are kept for this session only: {error}"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modal::DocumentStyle;
    use crate::app::TripRepository;
    use crate::storage::MemoryStore;

    type State = JournalState<MemoryStore, DocumentStyle>;

    fn loaded() -> State {
        let mut state = JournalState::new(TripRepository::new(MemoryStore::new()), DocumentStyle::default());
        handle_event(&mut state, &Event::Load).unwrap();
        state
    }

    fn lisbon_form() -> TripForm {
        TripForm {
            continent: "Europe".into(),
            country: "Portugal".into(),
            city: "Lisbon".into(),
            date: "June 2021".into(),
            description: "Trams and tiles".into(),
            rating: 4,
            ..TripForm::default()
        }
    }

    #[test]
    fn navigation_emits_focus() {
        let mut state = loaded();
        let (render, actions) = handle_event(&mut state, &Event::PreviousTrip).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::FocusTrip(4)]);

        let (render, actions) = handle_event(&mut state, &Event::SelectTrip(4)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_new_trip_adds_selects_and_closes_form() {
        let mut state = loaded();
        handle_event(&mut state, &Event::NewTrip).unwrap();
        assert!(state.modals.is_open(Modal::TripForm));
        assert!(state.modals.data(Modal::TripForm).is_none());

        let (_, actions) = handle_event(&mut state, &Event::SubmitTrip(lisbon_form())).unwrap();

        assert_eq!(state.repository.len(), 5);
        assert_eq!(state.repository.current_id(), Some(5));
        assert!(!state.modals.is_any_modal_open());
        assert_eq!(
            actions,
            vec![
                Action::notify(NotificationKind::Success, "Added Lisbon, Portugal"),
                Action::FocusTrip(5),
            ]
        );
    }

    #[test]
    fn invalid_form_stays_open() {
        let mut state = loaded();
        handle_event(&mut state, &Event::NewTrip).unwrap();

        let form = TripForm {
            date: "someday".into(),
            ..lisbon_form()
        };
        let (render, actions) = handle_event(&mut state, &Event::SubmitTrip(form)).unwrap();

        assert!(render);
        assert!(matches!(actions.as_slice(), [Action::ShowFormError(_)]));
        assert!(state.modals.is_open(Modal::TripForm));
        assert_eq!(state.repository.len(), 4);
    }

    #[test]
    fn edit_prefills_payload_and_updates_in_place() {
        let mut state = loaded();
        handle_event(&mut state, &Event::EditTrip(2)).unwrap();

        let Some(ModalPayload::EditTrip(trip)) = state.modals.data(Modal::TripForm) else {
            panic!("form should carry the edited trip");
        };
        let mut form = TripForm::from_trip(trip);
        form.rating = 2;

        let (_, actions) = handle_event(&mut state, &Event::SubmitTrip(form)).unwrap();
        assert_eq!(state.repository.len(), 4);
        assert_eq!(state.repository.get_by_id(2).unwrap().rating, 2);
        assert_eq!(state.repository.trips()[1].id, Some(2));
        assert!(matches!(&actions[0], Action::Notify { message, .. } if message.starts_with("Updated")));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = loaded();
        handle_event(&mut state, &Event::SelectTrip(2)).unwrap();
        handle_event(&mut state, &Event::RequestDelete(2)).unwrap();
        assert_eq!(state.repository.len(), 4);
        assert_eq!(
            state.modals.data(Modal::Confirm),
            Some(&ModalPayload::ConfirmDelete(2))
        );

        handle_event(&mut state, &Event::CancelConfirm).unwrap();
        assert_eq!(state.repository.len(), 4);

        handle_event(&mut state, &Event::RequestDelete(2)).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        assert_eq!(state.repository.len(), 3);
        assert!(state.repository.get_by_id(2).is_none());
        assert_eq!(state.repository.current_id(), Some(1));
        assert!(!state.modals.is_any_modal_open());
        assert_eq!(actions.last(), Some(&Action::FocusTrip(1)));
    }

    #[test]
    fn deleting_the_edited_trip_closes_the_form() {
        let mut state = loaded();
        handle_event(&mut state, &Event::EditTrip(3)).unwrap();
        handle_event(&mut state, &Event::RequestDelete(3)).unwrap();
        handle_event(&mut state, &Event::ConfirmDelete).unwrap();

        assert!(!state.modals.is_open(Modal::TripForm));
        assert!(!state.modals.is_any_modal_open());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut state = loaded();
        assert_eq!(handle_event(&mut state, &Event::EditTrip(99)).unwrap(), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::RequestDelete(99)).unwrap(), (false, vec![]));
        assert!(!state.modals.is_any_modal_open());
    }

    #[test]
    fn escape_closes_topmost_first() {
        let mut state = loaded();
        handle_event(&mut state, &Event::ToggleDestinations).unwrap();
        handle_event(&mut state, &Event::RequestDelete(1)).unwrap();

        handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!state.modals.is_open(Modal::Confirm));
        assert!(state.modals.is_open(Modal::Destinations));
        assert_eq!(state.modals.surface().body_overflow.as_deref(), Some("hidden"));

        handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!state.modals.is_any_modal_open());
        assert_eq!(state.modals.surface().body_overflow, None);

        assert_eq!(handle_event(&mut state, &Event::Escape).unwrap(), (false, vec![]));
    }

    #[test]
    fn choosing_a_destination_selects_and_closes() {
        let mut state = loaded();
        handle_event(&mut state, &Event::ToggleDestinations).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::ChooseDestination(3)).unwrap();

        assert_eq!(state.repository.current_id(), Some(3));
        assert!(!state.modals.is_open(Modal::Destinations));
        assert_eq!(actions, vec![Action::FocusTrip(3)]);
    }

    #[test]
    fn filter_events_report_changes_only() {
        let mut state = loaded();
        assert!(handle_event(&mut state, &Event::Search("kyoto".into())).unwrap().0);
        assert!(!handle_event(&mut state, &Event::Search("kyoto".into())).unwrap().0);
        assert!(handle_event(&mut state, &Event::SetView(TripView::Visited)).unwrap().0);
        assert!(handle_event(&mut state, &Event::SetSort(TripSort::Rating)).unwrap().0);
        assert!(handle_event(&mut state, &Event::ClearFilters).unwrap().0);
        assert_eq!(state.filter, TripFilter::default());
        assert!(!handle_event(&mut state, &Event::ClearFilters).unwrap().0);
    }

    #[test]
    fn write_failure_warns_but_keeps_the_trip() {
        let mut state = JournalState::new(
            TripRepository::new(MemoryStore::with_quota(10)),
            DocumentStyle::default(),
        );
        handle_event(&mut state, &Event::Load).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::SubmitTrip(lisbon_form())).unwrap();
        assert_eq!(state.repository.len(), 5);
        assert!(actions.iter().any(|a| matches!(
            a,
            Action::Notify { kind: NotificationKind::Warning, .. }
        )));
    }
}
