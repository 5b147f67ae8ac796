//! Application state: query host and selection controller.
//!
//! This module defines [`AppState`], the central state container for the
//! console core. It owns the catalog and query configuration and tracks the
//! current selection and presentation mode. It is the single source of truth
//! for all transient session state.
//!
//! # Invariants
//!
//! - If `selected_id` is `Some`, the id references an entry present in the
//!   catalog, and (except transiently inside a mutation) present in the
//!   current visible set or reconciled away on the next filter change.
//! - Selection of an id outside the visible set is rejected with
//!   [`VaultError::InvalidSelection`] and never silently mutates state.
//! - Every query mutation runs the reconciliation policy: if the previous
//!   selection is no longer visible, the first visible entry is selected, or
//!   the selection is cleared when the visible set is empty.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. All operations run to completion on the
//! calling thread with no blocking I/O. A multi-threaded host must treat the
//! whole state as one atomically swapped snapshot per recomputation.

use crate::domain::catalog::Catalog;
use crate::domain::entry::VaultEntry;
use crate::domain::error::{Result, VaultError};
use crate::query::engine::visible_entries_at;
use crate::query::state::QueryState;
use crate::query::{Category, HealthFilter};
use super::modes::PresentationMode;

/// Central state container for one console session.
///
/// Holds the catalog, the query configuration, and the selection state.
/// Mutated by the event handler in response to user input and host events.
/// View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full set of vault entries available to query. Read-only from the
    /// engine's perspective; replaced wholesale via `replace_catalog`.
    pub catalog: Catalog,

    /// Active query configuration. Mutated one field at a time through the
    /// setters, which reconcile the selection afterwards.
    pub query: QueryState,

    /// Id of the currently selected entry, if any.
    ///
    /// A non-owning back-reference into the catalog, never a copy of the
    /// entry. `None` when the visible set is empty.
    pub selected_id: Option<String>,

    /// Which pane is focused in constrained-width layouts.
    pub presentation: PresentationMode,
}

impl AppState {
    /// Creates a session over a catalog.
    ///
    /// Initial state: list focused, default query (no restriction on any
    /// axis), and the first catalog entry selected when the catalog is
    /// non-empty.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let selected_id = catalog.first().map(|e| e.id.clone());
        Self {
            catalog,
            query: QueryState::default(),
            selected_id,
            presentation: PresentationMode::default(),
        }
    }

    /// Computes the current visible set at a reference time.
    ///
    /// Pure with respect to the stored catalog and query; `now` only feeds
    /// the recently-used window.
    #[must_use]
    pub fn visible_entries_at(&self, now: i64) -> Vec<&VaultEntry> {
        visible_entries_at(&self.catalog, &self.query, now)
    }

    /// Computes the current visible set at the current time.
    #[must_use]
    pub fn visible_entries(&self) -> Vec<&VaultEntry> {
        self.visible_entries_at(chrono::Utc::now().timestamp())
    }

    /// Returns the currently selected entry, if any.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&VaultEntry> {
        self.selected_id.as_deref().and_then(|id| self.catalog.get(id))
    }

    /// Selects an entry by id and focuses the detail pane.
    ///
    /// The id must belong to the **current visible set**, not merely the
    /// catalog: an entry hidden by the active filters cannot be selected.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InvalidSelection`] and leaves all state
    /// unchanged if the id is not visible.
    pub fn select_entry(&mut self, id: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        self.select_entry_at(id, now)
    }

    /// Selects an entry by id with an explicit reference time.
    ///
    /// See [`AppState::select_entry`].
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::InvalidSelection`] if the id is not in the
    /// visible set at `now`.
    pub fn select_entry_at(&mut self, id: &str, now: i64) -> Result<()> {
        if !self.visible_entries_at(now).iter().any(|e| e.id == id) {
            tracing::debug!(id = %id, "selection rejected: not in visible set");
            return Err(VaultError::InvalidSelection { id: id.to_string() });
        }

        tracing::debug!(id = %id, "entry selected");
        self.selected_id = Some(id.to_string());
        self.presentation = PresentationMode::DetailFocused;
        Ok(())
    }

    /// Returns focus to the list pane.
    ///
    /// Valid only from `DetailFocused`; a no-op returning `false` otherwise.
    /// The selection is preserved so the detail remains addressable if the
    /// user returns to it.
    pub fn navigate_back(&mut self) -> bool {
        if self.presentation != PresentationMode::DetailFocused {
            return false;
        }
        self.presentation = PresentationMode::ListFocused;
        true
    }

    /// Replaces the search text and reconciles the selection.
    ///
    /// The text is stored as given; whitespace is not trimmed.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.reconcile_selection();
    }

    /// Switches the active sidebar category and reconciles the selection.
    pub fn set_category(&mut self, category: Category) {
        self.query.category = category;
        self.reconcile_selection();
    }

    /// Switches the active health filter chip and reconciles the selection.
    pub fn set_health_filter(&mut self, filter: HealthFilter) {
        self.query.health_filter = filter;
        self.reconcile_selection();
    }

    /// Swaps the catalog for a new snapshot and reconciles the selection.
    ///
    /// This is the host's hook for external catalog mutation: any change to
    /// the underlying entries must come through here so the selection
    /// invariant is re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::DuplicateId`] if the new snapshot contains
    /// duplicate ids; the previous catalog is kept in that case.
    pub fn replace_catalog(&mut self, entries: Vec<VaultEntry>) -> Result<()> {
        self.catalog = Catalog::from_entries(entries)?;
        self.reconcile_selection();
        Ok(())
    }

    /// Moves the selection to the next visible entry, wrapping to the first.
    ///
    /// No-op when the visible set is empty. When nothing is selected, selects
    /// the first visible entry. Does not change the presentation mode.
    pub fn select_next(&mut self) -> bool {
        self.step_selection(1)
    }

    /// Moves the selection to the previous visible entry, wrapping to the last.
    ///
    /// No-op when the visible set is empty. When nothing is selected, selects
    /// the first visible entry. Does not change the presentation mode.
    pub fn select_previous(&mut self) -> bool {
        self.step_selection(-1)
    }

    fn step_selection(&mut self, delta: isize) -> bool {
        let now = chrono::Utc::now().timestamp();
        let visible: Vec<String> = self
            .visible_entries_at(now)
            .iter()
            .map(|e| e.id.clone())
            .collect();

        if visible.is_empty() {
            return false;
        }

        let next_id = match self.selected_id.as_deref().and_then(|id| visible.iter().position(|v| v == id)) {
            Some(position) => {
                let len = visible.len() as isize;
                let next = (position as isize + delta).rem_euclid(len) as usize;
                visible[next].clone()
            }
            None => visible[0].clone(),
        };

        self.selected_id = Some(next_id);
        true
    }

    /// Re-validates the selection against the current visible set.
    ///
    /// Policy: keep the selection when it is still visible; otherwise select
    /// the first entry of the new visible set, or clear the selection when
    /// the visible set is empty. Called after every query or catalog change.
    pub fn reconcile_selection(&mut self) {
        let now = chrono::Utc::now().timestamp();
        self.reconcile_selection_at(now);
    }

    /// Re-validates the selection with an explicit reference time.
    pub fn reconcile_selection_at(&mut self, now: i64) {
        let visible = self.visible_entries_at(now);

        let still_visible = self
            .selected_id
            .as_deref()
            .is_some_and(|id| visible.iter().any(|e| e.id == id));

        if still_visible {
            return;
        }

        let replacement = visible.first().map(|e| e.id.clone());
        tracing::debug!(
            previous = ?self.selected_id,
            replacement = ?replacement,
            "selection reconciled after filter change"
        );
        self.selected_id = replacement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::EntryKind;

    fn entry(id: &str, name: &str) -> VaultEntry {
        VaultEntry::new(id, EntryKind::Login, name, "user")
    }

    fn state() -> AppState {
        let mut weak = entry("4", "aws.amazon.com");
        weak.health.strong = false;
        weak.health.days_since_change = 120;

        AppState::new(
            Catalog::from_entries(vec![
                entry("1", "github.com"),
                entry("2", "gitlab.ferriskey.rs"),
                entry("3", "hub.docker.com"),
                weak,
                entry("5", "npmjs.com"),
                entry("6", "cloudflare.com"),
            ])
            .expect("unique ids"),
        )
    }

    #[test]
    fn initial_state_selects_first_entry_in_list_mode() {
        let state = state();
        assert_eq!(state.selected_id.as_deref(), Some("1"));
        assert_eq!(state.presentation, PresentationMode::ListFocused);
    }

    #[test]
    fn initial_state_over_empty_catalog_has_no_selection() {
        let state = AppState::new(Catalog::new());
        assert!(state.selected_id.is_none());
        assert!(state.selected_entry().is_none());
    }

    #[test]
    fn select_entry_focuses_detail() {
        let mut state = state();
        state.select_entry("3").expect("visible");
        assert_eq!(state.selected_id.as_deref(), Some("3"));
        assert_eq!(state.presentation, PresentationMode::DetailFocused);
        assert_eq!(state.selected_entry().map(|e| e.name.as_str()), Some("hub.docker.com"));
    }

    #[test]
    fn selecting_a_filtered_out_entry_is_rejected_without_mutation() {
        let mut state = state();
        state.set_health_filter(HealthFilter::Weak);
        // Only id 4 is visible now; id 1 exists in the catalog but is hidden.
        let before = state.clone();
        let result = state.select_entry("1");
        assert!(matches!(result, Err(VaultError::InvalidSelection { id }) if id == "1"));
        assert_eq!(state.selected_id, before.selected_id);
        assert_eq!(state.presentation, before.presentation);
        assert_eq!(state.query, before.query);
    }

    #[test]
    fn selecting_an_unknown_id_is_rejected() {
        let mut state = state();
        assert!(state.select_entry("nope").is_err());
    }

    #[test]
    fn navigate_back_returns_to_list_and_keeps_selection() {
        let mut state = state();
        state.select_entry("2").expect("visible");
        assert!(state.navigate_back());
        assert_eq!(state.presentation, PresentationMode::ListFocused);
        assert_eq!(state.selected_id.as_deref(), Some("2"));
        // Already list-focused: no-op.
        assert!(!state.navigate_back());
    }

    #[test]
    fn filter_change_retaining_selection_keeps_it() {
        let mut state = state();
        state.select_entry("4").expect("visible");
        state.set_health_filter(HealthFilter::Weak);
        // Id 4 is still visible under the weak filter.
        assert_eq!(state.selected_id.as_deref(), Some("4"));
    }

    #[test]
    fn filter_change_excluding_selection_falls_back_to_first_visible() {
        let mut state = state();
        state.select_entry("4").expect("visible");
        state.set_search_text("git");
        // Visible set is now ids 1 and 2; id 4 dropped out.
        assert_eq!(state.selected_id.as_deref(), Some("1"));
    }

    #[test]
    fn filter_change_emptying_view_clears_selection() {
        let mut state = state();
        state.select_entry("4").expect("visible");
        state.set_search_text("no such entry");
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn clearing_the_filter_restores_a_selection() {
        let mut state = state();
        state.set_search_text("no such entry");
        assert!(state.selected_id.is_none());
        state.set_search_text("");
        assert_eq!(state.selected_id.as_deref(), Some("1"));
    }

    #[test]
    fn select_next_and_previous_wrap_within_visible_set() {
        let mut state = state();
        state.set_search_text("git");
        // Visible: 1, 2. Reconciliation kept id 1.
        assert!(state.select_next());
        assert_eq!(state.selected_id.as_deref(), Some("2"));
        assert!(state.select_next());
        assert_eq!(state.selected_id.as_deref(), Some("1"));
        assert!(state.select_previous());
        assert_eq!(state.selected_id.as_deref(), Some("2"));
    }

    #[test]
    fn select_next_on_empty_view_is_a_no_op() {
        let mut state = state();
        state.set_search_text("no such entry");
        assert!(!state.select_next());
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn replace_catalog_reconciles_selection() {
        let mut state = state();
        state.select_entry("6").expect("visible");
        state
            .replace_catalog(vec![entry("7", "fastly.com"), entry("8", "bunny.net")])
            .expect("unique ids");
        assert_eq!(state.selected_id.as_deref(), Some("7"));
    }

    #[test]
    fn replace_catalog_with_duplicates_keeps_previous_catalog() {
        let mut state = state();
        let result = state.replace_catalog(vec![entry("7", "a"), entry("7", "b")]);
        assert!(matches!(result, Err(VaultError::DuplicateId { .. })));
        assert_eq!(state.catalog.len(), 6);
    }
}
