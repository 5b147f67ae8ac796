//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! host events, translating them into state changes and presentation actions.
//! It follows a unidirectional data flow:
//!
//! 1. Events arrive from the host (keystroke, click, catalog reload)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`AppState`] methods
//! 4. A re-render flag and actions are returned for execution
//!
//! The re-render flag is `true` when the visible view may have changed and
//! the host should recompute its view model.

use crate::app::{Action, AppState};
use crate::domain::entry::VaultEntry;
use crate::domain::error::Result;
use crate::query::{Category, HealthFilter};

/// Events triggered by user input or host changes.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions. The set mirrors the console's callbacks:
/// search box edits, sidebar clicks, filter chip clicks, list selection, and
/// back navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the search text with the full current query string.
    SearchChanged(String),

    /// Switches the active sidebar category.
    CategorySelected(Category),

    /// Switches the active health filter chip.
    FilterSelected(HealthFilter),

    /// Selects the entry with the given id and focuses its detail pane.
    ///
    /// Rejected with `InvalidSelection` when the id is not in the current
    /// visible set; the handler propagates the error and state is unchanged.
    EntrySelected(String),

    /// Returns focus from the detail pane to the list.
    NavigateBack,

    /// Moves the selection to the next visible entry (wraps around).
    NextEntry,

    /// Moves the selection to the previous visible entry (wraps around).
    PreviousEntry,

    /// Replaces the catalog with a new snapshot from the host.
    ///
    /// Any external mutation of the underlying entries must arrive as this
    /// event so the selection invariant is re-validated.
    CatalogReplaced(Vec<VaultEntry>),
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns `(render, actions)`: `render` is `true` when the host should
/// recompute its view, `actions` are presentation commands to execute in
/// sequence.
///
/// # Errors
///
/// Returns [`VaultError::InvalidSelection`](crate::VaultError::InvalidSelection)
/// for a rejected selection and
/// [`VaultError::DuplicateId`](crate::VaultError::DuplicateId) for a catalog
/// snapshot with duplicate ids. Both are recoverable; state is unchanged.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchChanged(text) => {
            tracing::trace!(query = %text, "search text updated");
            state.set_search_text(text.clone());
            Ok((true, vec![]))
        }
        Event::CategorySelected(category) => {
            tracing::debug!(category = %category, "category selected");
            state.set_category(category.clone());
            Ok((true, vec![]))
        }
        Event::FilterSelected(filter) => {
            tracing::debug!(filter = %filter, "health filter selected");
            state.set_health_filter(*filter);
            Ok((true, vec![]))
        }
        Event::EntrySelected(id) => {
            state.select_entry(id)?;
            Ok((true, vec![Action::FocusDetail { id: id.clone() }]))
        }
        Event::NavigateBack => {
            if state.navigate_back() {
                Ok((true, vec![Action::FocusList]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::NextEntry => Ok((state.select_next(), vec![])),
        Event::PreviousEntry => Ok((state.select_previous(), vec![])),
        Event::CatalogReplaced(entries) => {
            tracing::debug!(entry_count = entries.len(), "catalog replaced");
            state.replace_catalog(entries.clone())?;
            Ok((true, vec![]))
        }
    }
}
