//! Insertion-ordered entry catalog with id uniqueness.
//!
//! The [`Catalog`] is the full set of vault entries available to query. It
//! preserves insertion order (the query engine never re-sorts) and enforces
//! that entry ids are unique. The catalog is read-only from the query engine's
//! perspective; only its owner mutates it, via [`Catalog::push`] or wholesale
//! replacement.

use crate::domain::entry::VaultEntry;
use crate::domain::error::{Result, VaultError};
use std::collections::HashSet;

/// Ordered collection of vault entries with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<VaultEntry>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builds a catalog from a sequence of entries, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::DuplicateId`] if two entries share an id. The
    /// first duplicated id encountered is reported.
    pub fn from_entries(entries: Vec<VaultEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(VaultError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Appends an entry to the end of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::DuplicateId`] if the catalog already contains an
    /// entry with the same id. The catalog is left unchanged on error.
    pub fn push(&mut self, entry: VaultEntry) -> Result<()> {
        if self.contains_id(&entry.id) {
            return Err(VaultError::DuplicateId { id: entry.id });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&VaultEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Returns whether an entry with the given id exists.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Returns the first entry in insertion order, if any.
    #[must_use]
    pub fn first(&self) -> Option<&VaultEntry> {
        self.entries.first()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, VaultEntry> {
        self.entries.iter()
    }

    /// Returns the entries as a slice, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[VaultEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a VaultEntry;
    type IntoIter = std::slice::Iter<'a, VaultEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
