//! Modal slots of the journal screen and their payloads.
//!
//! The journal has three overlays, each tracked as one slot of the
//! [`crate::app::ModalManager`]:
//!
//! - **Destinations**: browser listing every trip, used to jump to one
//! - **`TripForm`**: create/edit form; payload is the trip being edited
//! - **Confirm**: confirmation dialog; payload is the pending deletion

use crate::domain::Trip;

/// Modal slots of the journal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modal {
    Destinations,
    TripForm,
    Confirm,
}

impl Modal {
    /// Every slot, in the order the manager is initialized with.
    pub const ALL: [Self; 3] = [Self::Destinations, Self::TripForm, Self::Confirm];
}

/// Data carried by an open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalPayload {
    /// Trip loaded into the form for editing. Absent payload means "create".
    EditTrip(Trip),

    /// Id of the trip awaiting delete confirmation.
    ConfirmDelete(u32),
}
