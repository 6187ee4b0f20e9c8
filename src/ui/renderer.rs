//! Plain-text rendering of the journal view model.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: `JournalState::compute_viewmodel`
//! 2. **Layout**: header, stats line, then the card list or the empty state,
//!    then the detail of the selected trip
//!
//! Output is returned as a `String` so callers decide where it goes.
//!
//! # Example
//!
//! ```rust
//! use wanderlog::app::{JournalState, TripRepository};
//! use wanderlog::app::modal::DocumentStyle;
//! use wanderlog::storage::MemoryStore;
//! use wanderlog::ui::render;
//!
//! let mut state = JournalState::new(TripRepository::new(MemoryStore::new()), DocumentStyle::default());
//! state.repository.load();
//! let text = render(&state);
//! assert!(text.contains("Santorini, Greece"));
//! ```

use crate::app::modal::ScrollSurface;
use crate::app::JournalState;
use crate::storage::KeyValueStore;
use crate::ui::helpers::truncate;
use crate::ui::viewmodel::{JournalViewModel, TripCard, TripDetail};
use std::fmt::Write;

/// Width of the title column in the card list.
const TITLE_WIDTH: usize = 32;

/// Renders the journal screen as plain text.
#[must_use]
pub fn render<S: KeyValueStore, D: ScrollSurface>(state: &JournalState<S, D>) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &JournalViewModel) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", vm.header.title);
    let _ = writeln!(out, "{}", "=".repeat(vm.header.title.chars().count()));

    if vm.is_loading {
        let _ = writeln!(out, "Loading trips...");
        return out;
    }

    let average = vm
        .stats
        .average_rating
        .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}"));
    let _ = writeln!(
        out,
        "{} visited · {} wishlist · {} countries · {} continents · avg {average}",
        vm.stats.visited, vm.stats.wishlist, vm.stats.countries, vm.stats.continents
    );
    let _ = writeln!(out);

    if let Some(empty) = &vm.empty_state {
        let _ = writeln!(out, "{}", empty.message);
        let _ = writeln!(out, "{}", empty.subtitle);
        return out;
    }

    for card in &vm.cards {
        render_card(&mut out, card);
    }

    if let Some(detail) = &vm.selected {
        let _ = writeln!(out);
        render_detail(&mut out, detail);
    }

    out
}

fn render_card(out: &mut String, card: &TripCard) {
    let marker = if card.is_selected { '>' } else { ' ' };
    let status = if card.is_wishlist {
        "wishlist".to_string()
    } else {
        card.rating_stars.clone()
    };
    let _ = writeln!(
        out,
        "{marker} {:<width$} {:<16} {status}",
        truncate(&card.title, TITLE_WIDTH),
        card.date,
        width = TITLE_WIDTH
    );
}

fn render_detail(out: &mut String, detail: &TripDetail) {
    let (position, total) = detail.position;
    let _ = writeln!(out, "{} ({position} / {total})", detail.title);
    let _ = writeln!(out, "{}", detail.date);
    if !detail.is_wishlist {
        let _ = writeln!(out, "{}", detail.rating_stars);
    }
    if !detail.description.is_empty() {
        let _ = writeln!(out, "{}", detail.description);
    }
    for highlight in &detail.highlights {
        let _ = writeln!(out, "  + {highlight}");
    }
    for lowlight in &detail.lowlights {
        let _ = writeln!(out, "  - {lowlight}");
    }
    if !detail.notes.is_empty() {
        let _ = writeln!(out, "Notes: {}", detail.notes);
    }
    if !detail.expenses.is_empty() {
        let _ = writeln!(out, "Expenses: {}", detail.expenses);
    }
    if !detail.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", detail.tags.join(", "));
    }
}
