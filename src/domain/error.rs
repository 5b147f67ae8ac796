//! Error types for the vaultdesk core.
//!
//! This module defines the centralized error type [`VaultError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for vaultdesk operations.
///
/// This enum consolidates all error conditions that can occur in the query and
/// selection core, from rejected selections to snapshot failures. The only
/// domain error proper is [`VaultError::InvalidSelection`]; everything else
/// covers the catalog and storage boundary. All variants are recoverable.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Selection of an entry outside the current visible set was rejected.
    ///
    /// Raised by `AppState::select_entry` when the requested id is not present
    /// in the filtered view, including ids that exist in the catalog but are
    /// currently filtered out. State is left unchanged when this is returned.
    #[error("entry '{id}' is not in the current visible set")]
    InvalidSelection {
        /// The id that was requested.
        id: String,
    },

    /// Two catalog entries share the same id.
    ///
    /// Entry ids must be unique across the catalog. Raised on catalog
    /// construction, insertion, and snapshot load.
    #[error("duplicate entry id '{id}' in catalog")]
    DuplicateId {
        /// The offending id.
        id: String,
    },

    /// Vault snapshot could not be read or written.
    ///
    /// The string contains a description of what went wrong, typically a
    /// serialization failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for vaultdesk operations.
///
/// This is a type alias for `std::result::Result<T, VaultError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, VaultError>;
