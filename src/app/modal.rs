//! Modal coordination: open/closed state and payloads for a fixed set of slots.
//!
//! [`ModalManager`] tracks one [`ModalState`] per slot and derives a single
//! "any modal open" flag from them. That flag drives a scroll lock on a
//! [`ScrollSurface`]: the first slot to open remembers the surface's overflow
//! value and sets it to `"hidden"`; the last slot to close restores it. Dropping
//! the manager restores it too, whatever the slots look like.
//!
//! # Open/close vs. toggle
//!
//! `open` and `close` always write the payload (`close` clears it). `toggle`
//! only flips `is_open` and leaves the payload alone, so toggling a slot shut
//! and open again shows the old payload. Callers relying on a fresh payload use
//! `open`.
//!
//! # Example
//!
//! ```
//! use wanderlog::app::modal::{DocumentStyle, ModalManager};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! enum Slot { A, B }
//!
//! let mut modals: ModalManager<Slot, u32, DocumentStyle> =
//!     ModalManager::new([Slot::A, Slot::B], DocumentStyle::default());
//!
//! modals.open(Slot::A, Some(1));
//! assert!(modals.is_any_modal_open());
//! assert_eq!(modals.surface().body_overflow.as_deref(), Some("hidden"));
//!
//! modals.close(Slot::A);
//! assert!(!modals.is_any_modal_open());
//! assert_eq!(modals.surface().body_overflow, None);
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::rc::Rc;

/// Overflow value applied while any modal is open.
pub const SCROLL_LOCK_OVERFLOW: &str = "hidden";

/// Page-level scroll container whose overflow style the manager controls.
pub trait ScrollSurface {
    /// Current overflow style, `None` when unset.
    fn overflow(&self) -> Option<String>;

    /// Sets (or with `None`, clears) the overflow style.
    fn set_overflow(&mut self, value: Option<String>);
}

impl<S: ScrollSurface> ScrollSurface for Rc<RefCell<S>> {
    fn overflow(&self) -> Option<String> {
        self.borrow().overflow()
    }

    fn set_overflow(&mut self, value: Option<String>) {
        self.borrow_mut().set_overflow(value);
    }
}

/// Overflow styles of the two root scroll containers (`html` and `body`).
///
/// Writes go to both; reads report `body`, which is what the page scrolls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStyle {
    pub html_overflow: Option<String>,
    pub body_overflow: Option<String>,
}

impl ScrollSurface for DocumentStyle {
    fn overflow(&self) -> Option<String> {
        self.body_overflow.clone()
    }

    fn set_overflow(&mut self, value: Option<String>) {
        self.html_overflow.clone_from(&value);
        self.body_overflow = value;
    }
}

/// State of one modal slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState<T> {
    pub is_open: bool,
    pub data: Option<T>,
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self {
            is_open: false,
            data: None,
        }
    }
}

/// Stable handle to one slot's operations.
///
/// Handles for the same slot compare equal no matter how often they are
/// requested, so consumers can hold on to one (or key caches by it) without
/// re-subscribing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalHandle<K> {
    key: K,
}

impl<K: Ord + Copy + Debug> ModalHandle<K> {
    /// Slot this handle operates on.
    #[must_use]
    pub const fn key(&self) -> K {
        self.key
    }

    /// Opens the slot with an optional payload.
    pub fn open<T, S: ScrollSurface>(self, manager: &mut ModalManager<K, T, S>, payload: Option<T>) {
        manager.open(self.key, payload);
    }

    /// Closes the slot and clears its payload.
    pub fn close<T, S: ScrollSurface>(self, manager: &mut ModalManager<K, T, S>) {
        manager.close(self.key);
    }

    /// Flips the slot's open flag, leaving its payload untouched.
    pub fn toggle<T, S: ScrollSurface>(self, manager: &mut ModalManager<K, T, S>) {
        manager.toggle(self.key);
    }
}

/// Tracks a fixed set of modal slots and the page scroll lock.
#[derive(Debug)]
pub struct ModalManager<K, T, S: ScrollSurface> {
    slots: BTreeMap<K, ModalState<T>>,
    surface: S,

    /// Overflow value seen before the lock was applied; `Some` while locked.
    saved_overflow: Option<Option<String>>,
}

impl<K: Ord + Copy + Debug, T, S: ScrollSurface> ModalManager<K, T, S> {
    /// Creates a manager for `slots`, all closed and empty.
    pub fn new(slots: impl IntoIterator<Item = K>, surface: S) -> Self {
        let slots = slots
            .into_iter()
            .map(|key| (key, ModalState::default()))
            .collect();
        Self {
            slots,
            surface,
            saved_overflow: None,
        }
    }

    /// Returns the stable handle for `key`, `None` if the slot is unknown.
    #[must_use]
    pub fn slot(&self, key: K) -> Option<ModalHandle<K>> {
        self.slots.contains_key(&key).then_some(ModalHandle { key })
    }

    /// Opens `key`, replacing its payload with `payload` (or none).
    pub fn open(&mut self, key: K, payload: Option<T>) {
        let Some(state) = self.slot_mut(key) else { return };
        state.is_open = true;
        state.data = payload;
        tracing::debug!(slot = ?key, "modal opened");
        self.sync_scroll_lock();
    }

    /// Closes `key` and clears its payload, even a stale one.
    pub fn close(&mut self, key: K) {
        let Some(state) = self.slot_mut(key) else { return };
        state.is_open = false;
        state.data = None;
        tracing::debug!(slot = ?key, "modal closed");
        self.sync_scroll_lock();
    }

    /// Flips `is_open` for `key` without touching its payload.
    pub fn toggle(&mut self, key: K) {
        let Some(state) = self.slot_mut(key) else { return };
        state.is_open = !state.is_open;
        tracing::debug!(slot = ?key, is_open = state.is_open, "modal toggled");
        self.sync_scroll_lock();
    }

    /// Closes every slot.
    pub fn close_all(&mut self) {
        for state in self.slots.values_mut() {
            state.is_open = false;
            state.data = None;
        }
        self.sync_scroll_lock();
    }

    /// Whether at least one slot is open.
    #[must_use]
    pub fn is_any_modal_open(&self) -> bool {
        self.slots.values().any(|s| s.is_open)
    }

    #[must_use]
    pub fn state(&self, key: K) -> Option<&ModalState<T>> {
        self.slots.get(&key)
    }

    #[must_use]
    pub fn is_open(&self, key: K) -> bool {
        self.slots.get(&key).is_some_and(|s| s.is_open)
    }

    /// Payload of `key`, if any. Present on closed slots only after `toggle`.
    #[must_use]
    pub fn data(&self, key: K) -> Option<&T> {
        self.slots.get(&key).and_then(|s| s.data.as_ref())
    }

    /// Scroll surface the lock is applied to.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    fn slot_mut(&mut self, key: K) -> Option<&mut ModalState<T>> {
        let state = self.slots.get_mut(&key);
        if state.is_none() {
            tracing::warn!(slot = ?key, "ignoring unknown modal slot");
        }
        state
    }

    fn sync_scroll_lock(&mut self) {
        let any_open = self.is_any_modal_open();
        match (any_open, self.saved_overflow.is_some()) {
            (true, false) => {
                self.saved_overflow = Some(self.surface.overflow());
                self.surface.set_overflow(Some(SCROLL_LOCK_OVERFLOW.to_string()));
                tracing::trace!("scroll lock applied");
            }
            (false, true) => self.release_scroll_lock(),
            _ => {}
        }
    }

    fn release_scroll_lock(&mut self) {
        if let Some(previous) = self.saved_overflow.take() {
            self.surface.set_overflow(previous);
            tracing::trace!("scroll lock released");
        }
    }
}

impl<K, T, S: ScrollSurface> Drop for ModalManager<K, T, S> {
    fn drop(&mut self) {
        if let Some(previous) = self.saved_overflow.take() {
            self.surface.set_overflow(previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Slot {
        A,
        B,
        Unused,
    }

    type Manager = ModalManager<Slot, &'static str, Rc<RefCell<DocumentStyle>>>;

    fn manager_with(style: DocumentStyle) -> (Manager, Rc<RefCell<DocumentStyle>>) {
        let shared = Rc::new(RefCell::new(style));
        (ModalManager::new([Slot::A, Slot::B], Rc::clone(&shared)), shared)
    }

    #[test]
    fn slots_start_closed_and_empty() {
        let (modals, _) = manager_with(DocumentStyle::default());
        assert_eq!(modals.state(Slot::A), Some(&ModalState::default()));
        assert!(!modals.is_any_modal_open());
    }

    #[test]
    fn open_close_drives_scroll_lock_and_restores_previous_value() {
        let (mut modals, style) = manager_with(DocumentStyle {
            html_overflow: Some("auto".into()),
            body_overflow: Some("auto".into()),
        });

        modals.open(Slot::A, Some("x"));
        assert!(modals.is_any_modal_open());
        assert_eq!(style.borrow().body_overflow.as_deref(), Some("hidden"));
        assert_eq!(style.borrow().html_overflow.as_deref(), Some("hidden"));

        modals.close(Slot::A);
        assert!(!modals.is_any_modal_open());
        assert_eq!(style.borrow().body_overflow.as_deref(), Some("auto"));
    }

    #[test]
    fn lock_holds_until_last_slot_closes() {
        let (mut modals, style) = manager_with(DocumentStyle::default());

        modals.open(Slot::A, None);
        modals.open(Slot::B, None);
        modals.close(Slot::A);
        assert_eq!(style.borrow().body_overflow.as_deref(), Some("hidden"));

        modals.close(Slot::B);
        assert_eq!(style.borrow().body_overflow, None);
    }

    #[test]
    fn close_clears_payload_but_toggle_keeps_it() {
        let (mut modals, _) = manager_with(DocumentStyle::default());

        modals.open(Slot::A, Some("first"));
        modals.toggle(Slot::A);
        assert!(!modals.is_open(Slot::A));
        assert_eq!(modals.data(Slot::A), Some(&"first"));

        modals.toggle(Slot::A);
        assert!(modals.is_open(Slot::A));
        assert_eq!(modals.data(Slot::A), Some(&"first"));

        modals.close(Slot::A);
        assert_eq!(modals.data(Slot::A), None);

        modals.toggle(Slot::A);
        assert!(modals.is_open(Slot::A));
        assert_eq!(modals.data(Slot::A), None);
    }

    #[test]
    fn open_without_payload_clears_old_payload() {
        let (mut modals, _) = manager_with(DocumentStyle::default());
        modals.open(Slot::B, Some("old"));
        modals.toggle(Slot::B);
        modals.open(Slot::B, None);
        assert_eq!(modals.data(Slot::B), None);
    }

    #[test]
    fn drop_releases_lock_even_with_open_slots() {
        let (mut modals, style) = manager_with(DocumentStyle {
            html_overflow: None,
            body_overflow: Some("scroll".into()),
        });
        modals.open(Slot::A, None);
        drop(modals);

        assert_eq!(style.borrow().body_overflow.as_deref(), Some("scroll"));
    }

    #[test]
    fn handles_are_stable_and_operate_on_their_slot() {
        let (mut modals, _) = manager_with(DocumentStyle::default());
        let first = modals.slot(Slot::A).unwrap();
        let second = modals.slot(Slot::A).unwrap();
        assert_eq!(first, second);
        assert_ne!(first, modals.slot(Slot::B).unwrap());

        first.open(&mut modals, Some("via handle"));
        assert_eq!(modals.data(Slot::A), Some(&"via handle"));
        second.toggle(&mut modals);
        assert!(!modals.is_open(Slot::A));
        first.close(&mut modals);
        assert_eq!(modals.data(Slot::A), None);
    }

    #[test]
    fn unknown_slots_are_ignored() {
        let (mut modals, style) = manager_with(DocumentStyle::default());
        assert!(modals.slot(Slot::Unused).is_none());

        modals.open(Slot::Unused, Some("nope"));
        assert!(!modals.is_any_modal_open());
        assert_eq!(style.borrow().body_overflow, None);
    }

    #[test]
    fn close_all_releases_lock() {
        let (mut modals, style) = manager_with(DocumentStyle::default());
        modals.open(Slot::A, Some("a"));
        modals.open(Slot::B, Some("b"));
        modals.close_all();
        assert!(!modals.is_any_modal_open());
        assert_eq!(modals.data(Slot::B), None);
        assert_eq!(style.borrow().body_overflow, None);
    }
}
