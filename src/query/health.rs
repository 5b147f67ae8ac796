//! Health-based filter chips.
//!
//! The filter chips narrow the visible set by password health: weak passwords,
//! reused passwords, or passwords past the stale threshold. Each chip is an
//! independent predicate over the raw [`PasswordHealth`] inputs, not over the
//! derived signal, so `Weak` here means "not strong" rather than the composite
//! [`HealthSignal::Weak`](crate::domain::HealthSignal::Weak) classification.

use crate::domain::entry::VaultEntry;
use std::fmt;
use std::str::FromStr;

/// Health filter chip narrowing the visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthFilter {
    /// No health restriction. The default.
    #[default]
    All,
    /// Passwords failing the strength policy.
    Weak,
    /// Passwords reused by another entry.
    Reused,
    /// Passwords unchanged for more than the stale threshold.
    Stale,
}

impl HealthFilter {
    /// Returns whether the entry passes this filter.
    #[must_use]
    pub const fn passes(self, entry: &VaultEntry) -> bool {
        match self {
            Self::All => true,
            Self::Weak => !entry.health.strong,
            Self::Reused => entry.health.reused,
            Self::Stale => entry.health.is_stale(),
        }
    }
}

impl fmt::Display for HealthFilter {
    /// Formats the filter as its chip token.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Weak => write!(f, "weak-passwords"),
            Self::Reused => write!(f, "reused"),
            Self::Stale => write!(f, "old-90d"),
        }
    }
}

impl FromStr for HealthFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "weak-passwords" => Ok(Self::Weak),
            "reused" => Ok(Self::Reused),
            "old-90d" => Ok(Self::Stale),
            other => Err(format!("unknown health filter token: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{EntryKind, VaultEntry};

    fn entry(strong: bool, reused: bool, days: i64) -> VaultEntry {
        let mut e = VaultEntry::new("1", EntryKind::Login, "example.com", "user");
        e.health.strong = strong;
        e.health.reused = reused;
        e.health.days_since_change = days;
        e
    }

    #[test]
    fn all_passes_everything() {
        assert!(HealthFilter::All.passes(&entry(false, true, 500)));
    }

    #[test]
    fn weak_passes_only_non_strong_passwords() {
        assert!(HealthFilter::Weak.passes(&entry(false, false, 10)));
        assert!(!HealthFilter::Weak.passes(&entry(true, false, 10)));
    }

    #[test]
    fn reused_passes_only_reused_passwords() {
        assert!(HealthFilter::Reused.passes(&entry(true, true, 10)));
        assert!(!HealthFilter::Reused.passes(&entry(true, false, 10)));
    }

    #[test]
    fn stale_threshold_is_strictly_greater_than_ninety_days() {
        assert!(!HealthFilter::Stale.passes(&entry(true, false, 90)));
        assert!(HealthFilter::Stale.passes(&entry(true, false, 91)));
        assert!(HealthFilter::Stale.passes(&entry(true, false, 120)));
    }

    #[test]
    fn tokens_round_trip() {
        for filter in [
            HealthFilter::All,
            HealthFilter::Weak,
            HealthFilter::Reused,
            HealthFilter::Stale,
        ] {
            assert_eq!(filter.to_string().parse::<HealthFilter>().expect("parses"), filter);
        }
        assert!("weak".parse::<HealthFilter>().is_err());
    }
}
