//! The pure query engine.
//!
//! [`visible_entries_at`] derives the visible set: the subsequence of the
//! catalog passing all active filters. It is a pure function of its inputs
//! with no hidden state, so identical inputs always yield identical output.
//! The three predicates (text, category, health) are combined conjunctively,
//! and the result preserves catalog insertion order; sorting is deliberately
//! not a side effect of filtering.

use crate::domain::catalog::Catalog;
use crate::domain::entry::VaultEntry;
use crate::query::state::QueryState;

/// Computes the visible set for a catalog under a query, at a reference time.
///
/// `now` is the unix timestamp used for the recently-used window. All other
/// predicates are time-independent. An empty catalog yields an empty result.
///
/// # Filtering Algorithm
///
/// 1. **Category**: the sidebar category scopes the base set (`AllItems`
///    passes everything).
/// 2. **Text**: if `search_text` is non-empty, the entry passes iff its name
///    or username, lowercased, contains the lowercased query as a substring.
///    Whitespace is not trimmed.
/// 3. **Health**: the active chip's predicate over the raw health inputs.
#[must_use]
pub fn visible_entries_at<'a>(catalog: &'a Catalog, query: &QueryState, now: i64) -> Vec<&'a VaultEntry> {
    let _span = tracing::debug_span!(
        "visible_entries",
        total_entries = catalog.len(),
        query_len = query.search_text.len(),
        category = %query.category,
        health_filter = %query.health_filter,
    )
    .entered();

    let needle = if query.search_text.is_empty() {
        None
    } else {
        Some(query.search_text.to_lowercase())
    };

    let visible: Vec<&VaultEntry> = catalog
        .iter()
        .filter(|entry| {
            if !query.category.matches(entry, now, query.recent_window_days) {
                return false;
            }

            if let Some(needle) = &needle {
                let name_matches = entry.name.to_lowercase().contains(needle);
                let username_matches = entry.username.to_lowercase().contains(needle);
                if !name_matches && !username_matches {
                    return false;
                }
            }

            query.health_filter.passes(entry)
        })
        .collect();

    tracing::debug!(visible_count = visible.len(), "query applied");

    visible
}

/// Computes the visible set at the current time.
///
/// Convenience wrapper over [`visible_entries_at`] using `chrono::Utc::now()`
/// as the recently-used reference point.
#[must_use]
pub fn visible_entries<'a>(catalog: &'a Catalog, query: &QueryState) -> Vec<&'a VaultEntry> {
    visible_entries_at(catalog, query, chrono::Utc::now().timestamp())
}
