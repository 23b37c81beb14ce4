// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog loading: where collections come from.
//!
//! A catalog file groups assembly entries by release and carries a separate
//! list of reference (API documentation) entries:
//!
//! ```json
//! {
//!   "releases": [
//!     { "id": "2024", "name": "Release 2024", "description": "...",
//!       "year": "2024", "releaseDate": "2023-04-04",
//!       "entries": [ { "id": "...", "name": "...", "description": "..." } ] }
//!   ],
//!   "reference": [ { "id": "...", "name": "...", "description": "..." } ]
//! }
//! ```
//!
//! Entries without a `parentCollectionId` inherit their release id. Ids must be
//! unique across the whole catalog, since the `all` scope puts every entry in
//! one collection.
//!
//! [`CatalogProvider`] validates once and pre-builds one [`Collection`] per
//! [`Scope`]. Asking for the same scope twice hands back the same documents
//! (same allocation), so a [`Searcher`](crate::Searcher) never rebuilds for a
//! scope it has already indexed.

use crate::collection::Collection;
use crate::error::{CatalogError, Result};
use crate::types::{CatalogEntry, Document, LegacyEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// One versioned release and the assemblies it ships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(alias = "dependencies", default)]
    pub entries: Vec<CatalogEntry>,
}

/// A whole catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub releases: Vec<Release>,
    #[serde(default)]
    pub reference: Vec<LegacyEntry>,
}

impl Catalog {
    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            releases = catalog.releases.len(),
            reference = catalog.reference.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        catalog.inherit_release_ids();
        Ok(catalog)
    }

    fn inherit_release_ids(&mut self) {
        for release in &mut self.releases {
            for entry in &mut release.entries {
                if entry.parent_collection_id.is_none() {
                    entry.parent_collection_id = Some(release.id.clone());
                }
            }
        }
    }

    pub fn release(&self, id: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.id == id)
    }

    /// Every scope this catalog can serve, in display order.
    pub fn scopes(&self) -> Vec<Scope> {
        let mut scopes = vec![Scope::All];
        scopes.extend(self.releases.iter().map(|r| Scope::Release(r.id.clone())));
        scopes.push(Scope::Reference);
        scopes
    }

    /// The documents of one scope, in catalog order.
    pub fn documents(&self, scope: &Scope) -> Result<Vec<Document>> {
        let reference_docs = || self.reference.iter().cloned().map(Document::Legacy);

        match scope {
            Scope::All => Ok(self
                .releases
                .iter()
                .flat_map(release_documents)
                .chain(reference_docs())
                .collect()),
            Scope::Reference => Ok(reference_docs().collect()),
            Scope::Release(id) => self
                .release(id)
                .map(|r| release_documents(r).collect())
                .ok_or_else(|| CatalogError::UnknownScope(id.clone())),
        }
    }
}

fn release_documents(release: &Release) -> impl Iterator<Item = Document> + '_ {
    release.entries.iter().cloned().map(Document::Catalog)
}

/// Which slice of the catalog a collection covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// Every release entry followed by every reference entry.
    All,
    /// Entries of one release, by release id.
    Release(String),
    /// Reference (API documentation) entries.
    Reference,
}

impl FromStr for Scope {
    type Err = Infallible;

    /// `all`, `reference`, or anything else as a release id.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "all" => Scope::All,
            "reference" => Scope::Reference,
            other => Scope::Release(other.to_string()),
        })
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => f.write_str("all"),
            Scope::Reference => f.write_str("reference"),
            Scope::Release(id) => f.write_str(id),
        }
    }
}

/// Supplies the collection for a scope.
///
/// Implementations must return the same contents every time they are asked
/// for the same scope, or every query pays for an index rebuild.
pub trait CollectionProvider {
    fn collection(&self, scope: &Scope) -> Result<Collection>;
}

/// Serves pre-validated collections out of a loaded catalog.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    catalog: Catalog,
    collections: HashMap<Scope, Collection>,
}

impl CatalogProvider {
    /// Validate every scope up front. Fails on the first bad document.
    pub fn new(catalog: Catalog) -> Result<Self> {
        let mut collections = HashMap::new();
        for scope in catalog.scopes() {
            let collection = Collection::new(catalog.documents(&scope)?)?;
            collections.insert(scope, collection);
        }
        Ok(Self {
            catalog,
            collections,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(Catalog::load(path)?)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Look up one document by id within a scope.
    pub fn find(&self, scope: &Scope, id: &str) -> Result<&Document> {
        let collection = self
            .collections
            .get(scope)
            .ok_or_else(|| CatalogError::UnknownScope(scope.to_string()))?;
        collection
            .find(id)
            .map(|(_, doc)| doc)
            .ok_or_else(|| CatalogError::UnknownDocument(id.to_string()))
    }
}

impl CollectionProvider for CatalogProvider {
    fn collection(&self, scope: &Scope) -> Result<Collection> {
        self.collections
            .get(scope)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownScope(scope.to_string()))
    }
}
