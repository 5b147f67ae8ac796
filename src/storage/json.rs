//! JSON vault snapshot loading and saving.
//!
//! This module reads and writes the human-readable vault snapshot format.
//! Writes are atomic (write-to-temp + rename) so the file is never left in a
//! corrupt state, even if the process crashes mid-write. Snapshots carry no
//! encryption and no durability guarantees beyond the atomic rename.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": [
//!     {
//!       "id": "1",
//!       "kind": "login",
//!       "name": "github.com",
//!       "username": "user@example.com",
//!       "favorite": false,
//!       "last_used": 1234567890,
//!       "created_at": 1234567000,
//!       "health": { "strong": true, "reused": false, "two_fa": true, "days_since_change": 47 }
//!     }
//!   ]
//! }
//! ```

use crate::domain::catalog::Catalog;
use crate::domain::entry::VaultEntry;
use crate::domain::error::{Result, VaultError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current snapshot format version.
const SNAPSHOT_VERSION: u32 = 1;

/// Top-level snapshot container.
///
/// Wraps the entry list in a versioned object for future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VaultSnapshot {
    /// Version of the snapshot format.
    version: u32,

    /// All entries, in catalog insertion order.
    #[serde(default)]
    entries: Vec<VaultEntry>,
}

/// Loads a catalog from a JSON snapshot file.
///
/// A missing file is not an error: it yields an empty catalog, matching a
/// fresh vault. Entry order in the file becomes catalog insertion order.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, contains invalid
/// JSON, or contains duplicate entry ids.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let _span = tracing::debug_span!("load_catalog", path = ?path).entered();

    if !path.exists() {
        tracing::debug!("snapshot missing, starting with empty catalog");
        return Ok(Catalog::new());
    }

    let contents = std::fs::read_to_string(path)?;
    let snapshot: VaultSnapshot = serde_json::from_str(&contents)
        .map_err(|e| VaultError::Storage(format!("failed to parse snapshot: {e}")))?;

    tracing::debug!(
        version = snapshot.version,
        entry_count = snapshot.entries.len(),
        "snapshot loaded"
    );

    Catalog::from_entries(snapshot.entries)
}

/// Saves a catalog to a JSON snapshot file using an atomic write.
///
/// Writes to a temporary sibling file first, then renames it over the target
/// path. Parent directories are created automatically.
///
/// # Errors
///
/// Returns an error if serialization fails, the temporary file cannot be
/// written, or the rename fails.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    let _span = tracing::debug_span!("save_catalog", path = ?path, entry_count = catalog.len()).entered();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let snapshot = VaultSnapshot {
        version: SNAPSHOT_VERSION,
        entries: catalog.entries().to_vec(),
    };

    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| VaultError::Storage(format!("failed to serialize snapshot: {e}")))?;

    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, json)?;
    std::fs::rename(&tmp_path, path)?;

    tracing::debug!("snapshot saved");
    Ok(())
}
