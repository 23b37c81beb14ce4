// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validated, immutable document collections.
//!
//! The index stores positions, not copies, so the collection a query runs
//! against has to line up with the one the index was built from. A
//! `Collection` makes that checkable: it is immutable once constructed, cheap to
//! clone (the documents sit behind an `Arc`), and carries a fingerprint of the
//! text the index is built from. Differing fingerprints mean differing
//! indexes. Equal fingerprints are only a hint: [`Collection::same_contents`]
//! confirms them document by document.
//!
//! # Invariants
//!
//! - every document has a non-blank `name` and `description`
//! - ids are unique within the collection
//! - order never changes after construction

use crate::error::{CatalogError, Result};
use crate::types::Document;
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

/// An ordered, validated set of documents.
#[derive(Debug, Clone)]
pub struct Collection {
    documents: Arc<[Document]>,
    fingerprint: u64,
}

impl Collection {
    /// Validate documents and freeze them into a collection.
    ///
    /// Fails fast on the first malformed document rather than letting it
    /// silently drop out of search.
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        {
            let mut seen: HashMap<&str, usize> = HashMap::with_capacity(documents.len());
            for (position, doc) in documents.iter().enumerate() {
                if doc.name().trim().is_empty() {
                    return Err(CatalogError::MissingName {
                        id: doc.id().to_string(),
                    });
                }
                if doc.description().trim().is_empty() {
                    return Err(CatalogError::MissingDescription {
                        id: doc.id().to_string(),
                    });
                }
                if let Some(first) = seen.insert(doc.id(), position) {
                    return Err(CatalogError::DuplicateId {
                        id: doc.id().to_string(),
                        first,
                        second: position,
                    });
                }
            }
        }

        let fingerprint = fingerprint(&documents);
        Ok(Self {
            documents: documents.into(),
            fingerprint,
        })
    }

    /// A collection with no documents.
    pub fn empty() -> Self {
        Self {
            documents: Arc::from(Vec::new()),
            fingerprint: fingerprint(&[]),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Content fingerprint: document count in the high half, CRC32 of every
    /// id and search text in the low half.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// True when both handles point at the very same documents.
    pub fn same_allocation(&self, other: &Collection) -> bool {
        Arc::ptr_eq(&self.documents, &other.documents)
    }

    /// True when both collections hold equal documents in the same order.
    ///
    /// Pointer equality answers immediately and a fingerprint mismatch rejects
    /// cheaply. Only a fingerprint match falls through to comparing documents,
    /// since a 32-bit checksum can collide.
    pub fn same_contents(&self, other: &Collection) -> bool {
        self.same_allocation(other)
            || (self.fingerprint == other.fingerprint && self.documents == other.documents)
    }

    /// Overwrite the fingerprint to simulate a checksum collision.
    #[cfg(test)]
    pub(crate) fn with_fingerprint(mut self, fingerprint: u64) -> Self {
        self.fingerprint = fingerprint;
        self
    }

    /// Look a document up by id.
    pub fn find(&self, id: &str) -> Option<(usize, &Document)> {
        self.documents
            .iter()
            .enumerate()
            .find(|(_, doc)| doc.id() == id)
    }
}

impl Deref for Collection {
    type Target = [Document];

    fn deref(&self) -> &Self::Target {
        &self.documents
    }
}

fn fingerprint(documents: &[Document]) -> u64 {
    let mut hasher = crc32fast::Hasher::new();
    for doc in documents {
        hasher.update(doc.id().as_bytes());
        hasher.update(&[0]);
        hasher.update(doc.search_text().as_bytes());
        hasher.update(&[0xff]);
    }
    ((documents.len() as u64) << 32) | u64::from(hasher.finalize())
}
