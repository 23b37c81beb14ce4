// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A searcher that many threads can query at once.
//!
//! Queries against the current collection share a read lock. A query against
//! a different collection takes the write lock, rebuilds, then downgrades to a
//! read lock to rank, so two threads can never interleave their rebuilds.

use super::options::SearchOptions;
use super::searcher::Searcher;
use crate::collection::Collection;
use crate::index::IndexStats;
use crate::scoring::prepare_query;
use crate::types::SearchResult;
use parking_lot::{RwLock, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct SharedSearcher {
    inner: RwLock<Searcher>,
}

impl SharedSearcher {
    pub fn new(options: SearchOptions) -> Self {
        Self::from(Searcher::new(options))
    }

    pub fn search<'a>(&self, query: &str, collection: &'a Collection) -> Vec<SearchResult<'a>> {
        if prepare_query(query).is_none() {
            return Vec::new();
        }

        if let Some(results) = self.inner.read().try_search(query, collection) {
            return results;
        }

        let mut writer = self.inner.write();
        // Another writer may have rebuilt for this collection while we waited.
        if !writer.is_current(collection) {
            writer.rebuild(collection);
        }
        let reader = RwLockWriteGuard::downgrade(writer);
        reader.try_search(query, collection).unwrap_or_default()
    }

    pub fn rebuild(&self, collection: &Collection) {
        self.inner.write().rebuild(collection);
    }

    pub fn is_current(&self, collection: &Collection) -> bool {
        self.inner.read().is_current(collection)
    }

    pub fn stats(&self) -> Option<IndexStats> {
        self.inner.read().stats()
    }

    pub fn into_inner(self) -> Searcher {
        self.inner.into_inner()
    }
}

impl From<Searcher> for SharedSearcher {
    fn from(searcher: Searcher) -> Self {
        Self {
            inner: RwLock::new(searcher),
        }
    }
}
