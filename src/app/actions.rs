//! Actions representing side effects for the presentation shell.
//!
//! The event handler returns a `Vec<Action>` after processing each intent. The
//! shell executes them in order: showing a toast, putting an error under the
//! form, or scrolling a trip card into view. State changes themselves have
//! already happened by then.
//!
//! # Example
//!
//! ```rust
//! use wanderlog::app::{Action, NotificationKind};
//!
//! let actions = vec![
//!     Action::notify(NotificationKind::Success, "Trip added"),
//!     Action::FocusTrip(3),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
}

/// Commands for the presentation shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Shows a transient notification.
    Notify {
        kind: NotificationKind,
        message: String,
    },

    /// Shows a validation or image error under the trip form.
    ///
    /// The form stays open with the user's input intact.
    ShowFormError(String),

    /// Brings the card of the given trip into view.
    FocusTrip(u32),
}

impl Action {
    /// Shorthand for [`Action::Notify`].
    pub fn notify(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self::Notify {
            kind,
            message: message.into(),
        }
    }
}
