//! Vault snapshot persistence.
//!
//! JSON file I/O for catalog snapshots. See [`json`] for the format and
//! atomicity guarantees.

pub mod json;

pub use json::{load_catalog, save_catalog};
