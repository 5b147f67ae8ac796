//! Vaultdesk: the query, filtering, and selection core of a password-manager console.
//!
//! Vaultdesk backs a master/detail vault UI with:
//! - An insertion-ordered entry catalog with unique ids
//! - A pure query engine combining text search, sidebar categories, and
//!   health filter chips
//! - A selection controller that keeps the selected entry consistent with the
//!   visible set across filter changes
//! - Derived password health classification (strong / caution / weak)
//! - Display-ready view models and a JSON snapshot format
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host presentation layer (out of scope)             │  ← Rendering, input
//! └─────────────────────────────────────────────────────┘
//!                        │ events / actions
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Selection controller & presentation modes        │
//! │  - Event handling                                   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query Layer   │   │ UI Layer      │   │ Storage Layer │
//! │ (query/)      │   │ (ui/)         │   │ (storage/)    │
//! │ - Categories  │   │ - View models │   │ - JSON I/O    │
//! │ - Filters     │   │ - Sidebar     │   │ - Atomic save │
//! │ - Visible set │   │   counts      │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - VaultEntry, health classification                │
//! │  - Catalog, error types                             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Control Flow
//!
//! External UI events (keystroke, click) arrive as [`Event`] values.
//! [`handle_event`] mutates [`AppState`] and returns a re-render flag plus
//! [`Action`] presentation commands. The query engine recomputes the visible
//! subset on demand; after every filter or catalog change the selection
//! controller re-validates the "selection always visible" invariant with a
//! deterministic reconciliation policy.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous: every operation runs to completion on the
//! calling thread, with no blocking I/O outside the storage module. A
//! multi-threaded host must treat catalog and query state as one atomically
//! swapped snapshot per recomputation.
//!
//! # Example
//!
//! ```rust
//! use vaultdesk::{handle_event, AppState, Catalog, EntryKind, Event, VaultEntry};
//!
//! let catalog = Catalog::from_entries(vec![
//!     VaultEntry::new("1", EntryKind::Login, "github.com", "user@example.com"),
//!     VaultEntry::new("2", EntryKind::Login, "npmjs.com", "user"),
//! ])?;
//!
//! let mut state = AppState::new(catalog);
//! let (render, actions) = handle_event(&mut state, &Event::SearchChanged("GITHUB".into()))?;
//! assert!(render);
//! assert_eq!(state.visible_entries().len(), 1);
//! # let _ = actions;
//! # Ok::<(), vaultdesk::VaultError>(())
//! ```

pub mod app;
pub mod domain;
pub mod observability;
pub mod query;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, PresentationMode};
pub use domain::{
    Catalog, EntryKind, HealthSignal, PasswordHealth, Result, VaultEntry, VaultError,
    STALE_AFTER_DAYS,
};
pub use query::{
    visible_entries, visible_entries_at, Category, HealthFilter, QueryState,
    DEFAULT_RECENT_WINDOW_DAYS,
};
pub use ui::{compute_viewmodel, VaultViewModel};

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Core configuration provided by the host.
///
/// Hosts pass configuration as a flat string map (environment, CLI flags, or
/// an embedding runtime's key-value config); [`Config::from_map`] extracts
/// typed values with fallback defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to the JSON vault snapshot to load on initialization.
    ///
    /// When unset, the session starts with an empty catalog.
    pub vault_path: Option<PathBuf>,

    /// Tracing filter level for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Width of the recently-used window, in days.
    ///
    /// Default: [`DEFAULT_RECENT_WINDOW_DAYS`].
    pub recent_window_days: Option<i64>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `vault_path`: string → `Option<PathBuf>`
    /// - `trace_level`: string → `Option<String>`
    /// - `recent_window_days`: string → `Option<i64>` (ignored on parse error)
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self {
            vault_path: config.get("vault_path").map(PathBuf::from),
            trace_level: config.get("trace_level").cloned(),
            recent_window_days: config
                .get("recent_window_days")
                .and_then(|s| s.parse::<i64>().ok()),
        }
    }
}

/// Initializes a session from configuration.
///
/// Loads the vault snapshot when `vault_path` is set, falling back to an
/// empty catalog with a logged warning if the snapshot cannot be read. The
/// recently-used window defaults to [`DEFAULT_RECENT_WINDOW_DAYS`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing vaultdesk session");

    let catalog = config.vault_path.as_ref().map_or_else(Catalog::new, |path| {
        storage::load_catalog(path).unwrap_or_else(|e| {
            tracing::warn!(path = ?path, error = %e, "failed to load vault snapshot, starting empty");
            Catalog::new()
        })
    });

    let mut state = AppState::new(catalog);
    if let Some(days) = config.recent_window_days {
        state.query.recent_window_days = days;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_map_parses_typed_values() {
        let mut map = BTreeMap::new();
        map.insert("vault_path".to_string(), "/tmp/vault.json".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());
        map.insert("recent_window_days".to_string(), "14".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.vault_path, Some(PathBuf::from("/tmp/vault.json")));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.recent_window_days, Some(14));
    }

    #[test]
    fn config_from_map_ignores_malformed_numbers() {
        let mut map = BTreeMap::new();
        map.insert("recent_window_days".to_string(), "soon".to_string());
        assert_eq!(Config::from_map(&map).recent_window_days, None);
    }

    #[test]
    fn initialize_without_vault_path_starts_empty() {
        let state = initialize(&Config::default());
        assert!(state.catalog.is_empty());
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn initialize_with_unreadable_snapshot_falls_back_to_empty() {
        let config = Config {
            vault_path: Some(PathBuf::from("/nonexistent/dir/vault.json")),
            ..Config::default()
        };
        let state = initialize(&config);
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn initialize_applies_recent_window_override() {
        let config = Config {
            recent_window_days: Some(7),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.query.recent_window_days, 7);
    }
}
