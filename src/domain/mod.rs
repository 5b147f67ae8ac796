//! Domain layer for the vaultdesk core.
//!
//! This module contains the core domain types for the query and selection
//! engine, independent of any presentation or storage concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Vault entry model and health classification
//! - [`catalog`]: Insertion-ordered entry collection

pub mod catalog;
pub mod entry;
pub mod error;

pub use catalog::Catalog;
pub use entry::{EntryKind, HealthSignal, PasswordHealth, VaultEntry, STALE_AFTER_DAYS};
pub use error::{Result, VaultError};
