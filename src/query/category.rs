//! Sidebar category identifiers and matching.
//!
//! Categories determine the base set of entries visible before search and
//! health filtering. The identifier is a tagged variant rather than a flat
//! string so that type, folder, and collection matching stay exhaustive and
//! compiler-checked: kind categories match [`VaultEntry::kind`], folder and
//! collection categories match the corresponding membership field.

use crate::domain::entry::{EntryKind, VaultEntry};
use std::fmt;
use std::str::FromStr;

/// Number of seconds in one day, for the recently-used window.
const SECONDS_PER_DAY: i64 = 86400;

/// Category selected in the sidebar, scoping the visible set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    /// Every entry in the catalog. The default.
    #[default]
    AllItems,

    /// Entries marked as favorites.
    Favorites,

    /// Entries used within the recently-used window.
    RecentlyUsed,

    /// Entries of one credential kind.
    Kind(EntryKind),

    /// Entries filed in the named folder.
    Folder(String),

    /// Entries belonging to the named shared collection.
    Collection(String),
}

impl Category {
    /// Returns whether the entry belongs to this category.
    ///
    /// `now` is the reference unix timestamp for the recently-used window and
    /// `recent_window_days` its width. Folder and collection names are matched
    /// by exact, case-sensitive equality.
    #[must_use]
    pub fn matches(&self, entry: &VaultEntry, now: i64, recent_window_days: i64) -> bool {
        match self {
            Self::AllItems => true,
            Self::Favorites => entry.favorite,
            Self::RecentlyUsed => now - entry.last_used <= recent_window_days * SECONDS_PER_DAY,
            Self::Kind(kind) => entry.kind == *kind,
            Self::Folder(name) => entry.folder.as_deref() == Some(name.as_str()),
            Self::Collection(name) => entry.collection.as_deref() == Some(name.as_str()),
        }
    }

    /// Returns the display title for this category, used in the list header.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::AllItems => "All Items".to_string(),
            Self::Favorites => "Favorites".to_string(),
            Self::RecentlyUsed => "Recently Used".to_string(),
            Self::Kind(EntryKind::Login) => "Logins".to_string(),
            Self::Kind(EntryKind::Card) => "Cards".to_string(),
            Self::Kind(EntryKind::Identity) => "Identities".to_string(),
            Self::Kind(EntryKind::SecureNote) => "Secure Notes".to_string(),
            Self::Kind(EntryKind::SshKey) => "SSH Keys".to_string(),
            Self::Folder(name) | Self::Collection(name) => name.clone(),
        }
    }
}

impl fmt::Display for Category {
    /// Formats the category as its kebab-case sidebar token.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllItems => write!(f, "all-items"),
            Self::Favorites => write!(f, "favorites"),
            Self::RecentlyUsed => write!(f, "recently-used"),
            Self::Kind(EntryKind::Login) => write!(f, "logins"),
            Self::Kind(EntryKind::Card) => write!(f, "cards"),
            Self::Kind(EntryKind::Identity) => write!(f, "identities"),
            Self::Kind(EntryKind::SecureNote) => write!(f, "secure-notes"),
            Self::Kind(EntryKind::SshKey) => write!(f, "ssh-keys"),
            Self::Folder(name) => write!(f, "folder-{name}"),
            Self::Collection(name) => write!(f, "collection-{name}"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parses a kebab-case sidebar token into a category.
    ///
    /// Folder and collection tokens carry the name as a suffix
    /// (`folder-Work`, `collection-Team Alpha`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all-items" => Ok(Self::AllItems),
            "favorites" => Ok(Self::Favorites),
            "recently-used" => Ok(Self::RecentlyUsed),
            "logins" => Ok(Self::Kind(EntryKind::Login)),
            "cards" => Ok(Self::Kind(EntryKind::Card)),
            "identities" => Ok(Self::Kind(EntryKind::Identity)),
            "secure-notes" => Ok(Self::Kind(EntryKind::SecureNote)),
            "ssh-keys" => Ok(Self::Kind(EntryKind::SshKey)),
            other => {
                if let Some(name) = other.strip_prefix("folder-") {
                    if !name.is_empty() {
                        return Ok(Self::Folder(name.to_string()));
                    }
                }
                if let Some(name) = other.strip_prefix("collection-") {
                    if !name.is_empty() {
                        return Ok(Self::Collection(name.to_string()));
                    }
                }
                Err(format!("unknown category token: '{other}'"))
            }
        }
    }
}
