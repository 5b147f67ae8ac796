//! Vault entry domain model and health classification.
//!
//! This module defines the core [`VaultEntry`] type representing one stored
//! credential, along with its closed [`EntryKind`] set, the raw
//! [`PasswordHealth`] inputs, and the derived [`HealthSignal`] classification.
//! The health signal is a pure function of the health inputs and carries no
//! independent mutable state.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Days after which an unchanged password is considered stale.
///
/// An entry is stale when `days_since_change` is strictly greater than this
/// threshold. Staleness forces the health signal to [`HealthSignal::Weak`]
/// regardless of the other inputs.
pub const STALE_AFTER_DAYS: i64 = 90;

/// The closed set of credential kinds an entry can have.
///
/// Serialized in kebab-case to match the snapshot format and the category
/// tokens used by hosts (`secure-note`, `ssh-key`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// Website or service login (username + password).
    Login,
    /// Payment card.
    Card,
    /// Personal identity record.
    Identity,
    /// Free-form encrypted note.
    SecureNote,
    /// SSH key pair.
    SshKey,
}

impl EntryKind {
    /// Returns the human-readable singular label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Card => "Card",
            Self::Identity => "Identity",
            Self::SecureNote => "Secure Note",
            Self::SshKey => "SSH Key",
        }
    }
}

/// Raw password health inputs for one entry.
///
/// These four fields fully determine the derived [`HealthSignal`]; there is no
/// hidden state. `days_since_change` counts whole days since the password was
/// last rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHealth {
    /// Whether the password meets the strength policy.
    pub strong: bool,
    /// Whether the password is reused by another entry.
    pub reused: bool,
    /// Whether two-factor authentication is enabled.
    pub two_fa: bool,
    /// Whole days since the password was last changed.
    pub days_since_change: i64,
}

impl PasswordHealth {
    /// Derives the health classification from the raw inputs.
    ///
    /// Classification rules, in order of precedence:
    /// 1. [`HealthSignal::Weak`] if the password is not strong, or if it has
    ///    not been changed for more than [`STALE_AFTER_DAYS`] days. Staleness
    ///    overrides every other signal.
    /// 2. [`HealthSignal::Caution`] if the password is reused or two-factor
    ///    authentication is disabled.
    /// 3. [`HealthSignal::Strong`] otherwise.
    #[must_use]
    pub const fn signal(&self) -> HealthSignal {
        if !self.strong || self.days_since_change > STALE_AFTER_DAYS {
            HealthSignal::Weak
        } else if self.reused || !self.two_fa {
            HealthSignal::Caution
        } else {
            HealthSignal::Strong
        }
    }

    /// Returns whether the password has gone unchanged past the stale threshold.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        self.days_since_change > STALE_AFTER_DAYS
    }
}

/// Derived strength/risk classification of a credential.
///
/// Computed from [`PasswordHealth`] by [`PasswordHealth::signal`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthSignal {
    /// Strong password, unique, 2FA enabled, recently rotated.
    Strong,
    /// Usable but flagged: reused password or missing 2FA.
    Caution,
    /// Weak or stale password; rotation recommended.
    Weak,
}

/// Represents one stored credential in the vault.
///
/// Entries carry a unique, immutable `id`, a [`EntryKind`] classification,
/// display fields, optional folder and collection memberships, and raw
/// password health inputs. Access timestamps are kept for recently-used
/// filtering and display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultEntry {
    /// Unique stable identifier. Immutable once created.
    pub id: String,

    /// Credential kind from the closed [`EntryKind`] set.
    pub kind: EntryKind,

    /// Human-readable display name, typically the site or service name.
    pub name: String,

    /// Account identifier shown alongside the name (username or email).
    pub username: String,

    /// Website URL, if applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Current TOTP code, if one is provisioned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totp: Option<String>,

    /// Folder membership, if the entry is filed in a folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// Shared collection membership, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    /// Whether the entry is marked as a favorite.
    #[serde(default)]
    pub favorite: bool,

    /// Unix timestamp of the most recent use.
    pub last_used: i64,

    /// Unix timestamp when the entry was created.
    pub created_at: i64,

    /// Raw password health inputs.
    pub health: PasswordHealth,
}

impl VaultEntry {
    /// Creates a new entry with the given identity fields.
    ///
    /// Both `last_used` and `created_at` are set to the current time. Optional
    /// fields start empty, `favorite` starts false, and health defaults to a
    /// strong, unique, 2FA-enabled password changed today. Callers adjust
    /// fields directly after construction.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: EntryKind, name: impl Into<String>, username: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            username: username.into(),
            website: None,
            notes: None,
            totp: None,
            folder: None,
            collection: None,
            favorite: false,
            last_used: now,
            created_at: now,
            health: PasswordHealth {
                strong: true,
                reused: false,
                two_fa: true,
                days_since_change: 0,
            },
        }
    }

    /// Derives the health classification for this entry.
    ///
    /// Pure function of [`VaultEntry::health`]; see [`PasswordHealth::signal`]
    /// for the classification rules.
    #[must_use]
    pub const fn health_signal(&self) -> HealthSignal {
        self.health.signal()
    }

    /// Returns the single-character favicon placeholder for list rendering.
    ///
    /// Uppercased first character of the display name, or `'?'` for an empty
    /// name.
    #[must_use]
    pub fn favicon(&self) -> char {
        self.name
            .chars()
            .next()
            .map_or('?', |c| c.to_ascii_uppercase())
    }

    /// Returns a human-readable string describing how long ago the entry was used.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    #[must_use]
    pub fn last_used_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.last_used;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }

    /// Returns a display label for the last password change.
    ///
    /// "today" for zero days, otherwise "N days ago".
    #[must_use]
    pub fn last_changed_label(&self) -> String {
        match self.health.days_since_change {
            d if d <= 0 => "today".to_string(),
            1 => "1 day ago".to_string(),
            d => format!("{d} days ago"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(strong: bool, reused: bool, two_fa: bool, days: i64) -> PasswordHealth {
        PasswordHealth {
            strong,
            reused,
            two_fa,
            days_since_change: days,
        }
    }

    #[test]
    fn strong_requires_strength_and_uniqueness_and_two_fa() {
        assert_eq!(health(true, false, true, 47).signal(), HealthSignal::Strong);
    }

    #[test]
    fn missing_two_fa_is_caution() {
        assert_eq!(health(true, false, false, 12).signal(), HealthSignal::Caution);
    }

    #[test]
    fn reused_password_is_caution() {
        assert_eq!(health(true, true, true, 5).signal(), HealthSignal::Caution);
    }

    #[test]
    fn weak_password_is_weak_even_with_two_fa() {
        assert_eq!(health(false, false, true, 10).signal(), HealthSignal::Weak);
    }

    #[test]
    fn weak_password_without_other_flags_is_weak() {
        // The base vector: not strong, not reused, no 2FA, 10 days.
        assert_eq!(health(false, false, false, 10).signal(), HealthSignal::Weak);
    }

    #[test]
    fn stale_forces_weak_regardless_of_other_signals() {
        assert_eq!(health(true, false, true, 120).signal(), HealthSignal::Weak);
    }

    #[test]
    fn stale_threshold_is_strictly_greater_than() {
        // Exactly 90 days is not yet stale; 91 is.
        assert_eq!(health(true, false, true, 90).signal(), HealthSignal::Strong);
        assert_eq!(health(true, false, true, 91).signal(), HealthSignal::Weak);
        assert!(!health(true, false, true, 90).is_stale());
        assert!(health(true, false, true, 91).is_stale());
    }

    #[test]
    fn favicon_uppercases_first_character() {
        let entry = VaultEntry::new("1", EntryKind::Login, "github.com", "user");
        assert_eq!(entry.favicon(), 'G');

        let mut nameless = entry.clone();
        nameless.name = String::new();
        assert_eq!(nameless.favicon(), '?');
    }

    #[test]
    fn last_used_ago_formats_elapsed_time() {
        let mut entry = VaultEntry::new("1", EntryKind::Login, "github.com", "user");
        assert_eq!(entry.last_used_ago(), "just now");

        entry.last_used = chrono::Utc::now().timestamp() - 300;
        assert_eq!(entry.last_used_ago(), "5m ago");

        entry.last_used = chrono::Utc::now().timestamp() - 3 * SECONDS_PER_DAY;
        assert_eq!(entry.last_used_ago(), "3d ago");
    }

    #[test]
    fn last_changed_label_formats_days() {
        let mut entry = VaultEntry::new("1", EntryKind::Login, "github.com", "user");
        assert_eq!(entry.last_changed_label(), "today");

        entry.health.days_since_change = 1;
        assert_eq!(entry.last_changed_label(), "1 day ago");

        entry.health.days_since_change = 120;
        assert_eq!(entry.last_changed_label(), "120 days ago");
    }
}
