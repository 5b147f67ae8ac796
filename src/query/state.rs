//! Mutable query configuration.
//!
//! [`QueryState`] holds the three independent inputs of the query engine:
//! search text, active category, and active health filter. Each field defaults
//! to "no restriction" and each user action mutates exactly one field, so the
//! state is never partially invalid.

use super::category::Category;
use super::health::HealthFilter;

/// Default width of the recently-used window, in days.
pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 30;

/// The query engine's mutable configuration.
///
/// Created with defaults at session start; mutated by the selection
/// controller's setters. Search text is matched case-insensitively and is
/// deliberately not trimmed: whitespace-only queries are taken literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Case-insensitive substring to match against entry names and usernames.
    pub search_text: String,

    /// Active sidebar category. `AllItems` passes everything.
    pub category: Category,

    /// Active health filter chip. `All` passes everything.
    pub health_filter: HealthFilter,

    /// Width of the recently-used window, in days.
    pub recent_window_days: i64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: Category::AllItems,
            health_filter: HealthFilter::All,
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
        }
    }
}

impl QueryState {
    /// Returns whether no restriction is active on any axis.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.search_text.is_empty()
            && self.category == Category::AllItems
            && self.health_filter == HealthFilter::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_impose_no_restriction() {
        let state = QueryState::default();
        assert!(state.is_unrestricted());
        assert_eq!(state.recent_window_days, DEFAULT_RECENT_WINDOW_DAYS);
    }

    #[test]
    fn any_single_field_restricts() {
        let mut state = QueryState::default();
        state.search_text = "git".to_string();
        assert!(!state.is_unrestricted());

        let mut state = QueryState::default();
        state.health_filter = HealthFilter::Weak;
        assert!(!state.is_unrestricted());
    }
}
