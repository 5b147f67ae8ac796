//! View model types representing renderable console state.
//!
//! This module defines immutable view models computed from [`AppState`],
//! following the MVVM pattern. View models are optimized for rendering and
//! contain no business logic, only display-ready data: list rows with derived
//! health dots, the detail pane content, header text with the visible count,
//! and sidebar counts computed from the full catalog.

use crate::app::{AppState, PresentationMode};
use crate::domain::entry::{EntryKind, HealthSignal, VaultEntry};
use crate::query::Category;
use std::collections::BTreeMap;

/// Traffic-light indicator derived from the health signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthDot {
    /// Strong credential.
    Green,
    /// Caution: reused password or missing 2FA.
    Orange,
    /// Weak or stale password.
    Red,
}

impl From<HealthSignal> for HealthDot {
    fn from(signal: HealthSignal) -> Self {
        match signal {
            HealthSignal::Strong => Self::Green,
            HealthSignal::Caution => Self::Orange,
            HealthSignal::Weak => Self::Red,
        }
    }
}

/// One row of the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Entry id, for selection callbacks.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account identifier shown under the name.
    pub username: String,
    /// Single-character favicon placeholder.
    pub favicon: char,
    /// Derived health indicator.
    pub health_dot: HealthDot,
    /// Whether this row is the current selection.
    pub is_selected: bool,
}

/// Content of the detail pane for the selected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Entry id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Kind label (e.g. "Login").
    pub kind_label: &'static str,
    /// Account identifier.
    pub username: String,
    /// Website URL, if any.
    pub website: Option<String>,
    /// Current TOTP code, if provisioned.
    pub totp: Option<String>,
    /// Free-form notes, if any.
    pub notes: Option<String>,
    /// Folder membership, if any.
    pub folder: Option<String>,
    /// Collection membership, if any.
    pub collection: Option<String>,
    /// Derived health indicator.
    pub health_dot: HealthDot,
    /// Human-readable last password change ("120 days ago").
    pub last_changed: String,
    /// Human-readable last use ("3h ago").
    pub last_used: String,
}

/// Header display information for the list pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Formatted title, category name plus visible count.
    pub title: String,
}

/// Per-category entry counts for the sidebar, computed from the full catalog.
///
/// Replaces hardcoded sidebar numbers: folders and collections are keyed by
/// name in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarCounts {
    /// Total entries in the catalog.
    pub all_items: usize,
    /// Entries flagged as favorites.
    pub favorites: usize,
    /// Login entries.
    pub logins: usize,
    /// Card entries.
    pub cards: usize,
    /// Identity entries.
    pub identities: usize,
    /// Secure note entries.
    pub secure_notes: usize,
    /// SSH key entries.
    pub ssh_keys: usize,
    /// Folder name to entry count.
    pub folders: BTreeMap<String, usize>,
    /// Collection name to entry count.
    pub collections: BTreeMap<String, usize>,
}

impl SidebarCounts {
    fn tally<'a>(entries: impl Iterator<Item = &'a VaultEntry>) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            counts.all_items += 1;
            if entry.favorite {
                counts.favorites += 1;
            }
            match entry.kind {
                EntryKind::Login => counts.logins += 1,
                EntryKind::Card => counts.cards += 1,
                EntryKind::Identity => counts.identities += 1,
                EntryKind::SecureNote => counts.secure_notes += 1,
                EntryKind::SshKey => counts.ssh_keys += 1,
            }
            if let Some(folder) = &entry.folder {
                *counts.folders.entry(folder.clone()).or_default() += 1;
            }
            if let Some(collection) = &entry.collection {
                *counts.collections.entry(collection.clone()).or_default() += 1;
            }
        }
        counts
    }
}

/// Empty state message shown when the visible set is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,
    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Complete view model for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultViewModel {
    /// Rows of the item list, in visible-set order.
    pub rows: Vec<ListRow>,
    /// Detail pane content, `None` when nothing is selected.
    pub detail: Option<DetailView>,
    /// Header for the list pane.
    pub header: HeaderInfo,
    /// Sidebar category counts.
    pub sidebar: SidebarCounts,
    /// Empty state, `Some` when the visible set is empty.
    pub empty_state: Option<EmptyState>,
    /// Which pane is focused in constrained-width layouts.
    pub presentation: PresentationMode,
}

/// Computes a renderable view model from the current state.
///
/// Rows follow the visible set in catalog order; sidebar counts always cover
/// the full catalog regardless of active filters, matching the console's
/// sidebar behavior.
#[must_use]
pub fn compute_viewmodel(state: &AppState) -> VaultViewModel {
    let visible = state.visible_entries();

    let rows: Vec<ListRow> = visible
        .iter()
        .map(|entry| ListRow {
            id: entry.id.clone(),
            name: entry.name.clone(),
            username: entry.username.clone(),
            favicon: entry.favicon(),
            health_dot: entry.health_signal().into(),
            is_selected: state.selected_id.as_deref() == Some(entry.id.as_str()),
        })
        .collect();

    let detail = state.selected_entry().map(|entry| DetailView {
        id: entry.id.clone(),
        name: entry.name.clone(),
        kind_label: entry.kind.label(),
        username: entry.username.clone(),
        website: entry.website.clone(),
        totp: entry.totp.clone(),
        notes: entry.notes.clone(),
        folder: entry.folder.clone(),
        collection: entry.collection.clone(),
        health_dot: entry.health_signal().into(),
        last_changed: entry.last_changed_label(),
        last_used: entry.last_used_ago(),
    });

    let header = HeaderInfo {
        title: format!("{} ({})", state.query.category.title(), rows.len()),
    };

    let empty_state = if rows.is_empty() {
        Some(empty_state_for(&state.query.category, state.catalog.is_empty()))
    } else {
        None
    };

    VaultViewModel {
        rows,
        detail,
        header,
        sidebar: SidebarCounts::tally(state.catalog.iter()),
        empty_state,
        presentation: state.presentation,
    }
}

fn empty_state_for(category: &Category, catalog_empty: bool) -> EmptyState {
    if catalog_empty {
        EmptyState {
            message: "Your vault is empty".to_string(),
            subtitle: "Add an item to get started".to_string(),
        }
    } else {
        EmptyState {
            message: "No items match".to_string(),
            subtitle: format!("Nothing in {} matches the active filters", category.title()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use crate::query::HealthFilter;

    fn entry(id: &str, name: &str, kind: EntryKind) -> VaultEntry {
        VaultEntry::new(id, kind, name, "user")
    }

    fn state() -> AppState {
        let mut github = entry("1", "github.com", EntryKind::Login);
        github.favorite = true;
        github.folder = Some("Work".to_string());

        let mut weak = entry("2", "aws.amazon.com", EntryKind::Login);
        weak.health.strong = false;
        weak.folder = Some("Work".to_string());

        let mut caution = entry("3", "npmjs.com", EntryKind::Login);
        caution.health.two_fa = false;
        caution.folder = Some("Dev Tools".to_string());

        let note = entry("4", "backup codes", EntryKind::SecureNote);

        AppState::new(Catalog::from_entries(vec![github, weak, caution, note]).expect("unique ids"))
    }

    #[test]
    fn rows_follow_visible_set_and_mark_selection() {
        let vm = compute_viewmodel(&state());
        assert_eq!(vm.rows.len(), 4);
        assert!(vm.rows[0].is_selected);
        assert!(!vm.rows[1].is_selected);
        assert_eq!(vm.rows[0].favicon, 'G');
    }

    #[test]
    fn health_dots_are_derived_from_signals() {
        let vm = compute_viewmodel(&state());
        assert_eq!(vm.rows[0].health_dot, HealthDot::Green);
        assert_eq!(vm.rows[1].health_dot, HealthDot::Red);
        assert_eq!(vm.rows[2].health_dot, HealthDot::Orange);
    }

    #[test]
    fn header_shows_category_title_and_visible_count() {
        let mut state = state();
        let vm = compute_viewmodel(&state);
        assert_eq!(vm.header.title, "All Items (4)");

        state.set_health_filter(HealthFilter::Weak);
        let vm = compute_viewmodel(&state);
        assert_eq!(vm.header.title, "All Items (1)");
    }

    #[test]
    fn sidebar_counts_cover_the_full_catalog_regardless_of_filters() {
        let mut state = state();
        state.set_health_filter(HealthFilter::Weak);
        let vm = compute_viewmodel(&state);
        assert_eq!(vm.sidebar.all_items, 4);
        assert_eq!(vm.sidebar.favorites, 1);
        assert_eq!(vm.sidebar.logins, 3);
        assert_eq!(vm.sidebar.secure_notes, 1);
        assert_eq!(vm.sidebar.folders.get("Work"), Some(&2));
        assert_eq!(vm.sidebar.folders.get("Dev Tools"), Some(&1));
        assert!(vm.sidebar.collections.is_empty());
    }

    #[test]
    fn detail_reflects_the_selected_entry() {
        let mut state = state();
        state.select_entry("3").expect("visible");
        let vm = compute_viewmodel(&state);
        let detail = vm.detail.expect("selection");
        assert_eq!(detail.name, "npmjs.com");
        assert_eq!(detail.kind_label, "Login");
        assert_eq!(detail.health_dot, HealthDot::Orange);
        assert_eq!(vm.presentation, PresentationMode::DetailFocused);
    }

    #[test]
    fn empty_view_produces_empty_state_and_no_detail() {
        let mut state = state();
        state.set_search_text("zzz");
        let vm = compute_viewmodel(&state);
        assert!(vm.rows.is_empty());
        assert!(vm.detail.is_none());
        let empty = vm.empty_state.expect("empty view");
        assert_eq!(empty.message, "No items match");
    }

    #[test]
    fn empty_catalog_produces_onboarding_empty_state() {
        let state = AppState::new(Catalog::new());
        let vm = compute_viewmodel(&state);
        assert_eq!(vm.empty_state.expect("empty vault").message, "Your vault is empty");
    }
}
