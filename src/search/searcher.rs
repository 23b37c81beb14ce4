// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index cache as an explicit, owned resource.
//!
//! A `Searcher` remembers which collection its index was built from. Handing
//! it a collection with different contents rebuilds the index before ranking,
//! so positions can never resolve against the wrong documents. Fingerprints
//! only speed up the comparison; a colliding fingerprint still rebuilds.

use super::options::SearchOptions;
use super::ranker::rank;
use crate::collection::Collection;
use crate::index::{IndexStats, PrefixIndex};
use crate::scoring::prepare_query;
use crate::types::SearchResult;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
struct Indexed {
    collection: Collection,
    index: PrefixIndex,
}

/// Ranks queries against a collection, building the index lazily.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    options: SearchOptions,
    state: Option<Indexed>,
}

impl Searcher {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            state: None,
        }
    }

    /// Build the index over `collection`, replacing any previous one.
    pub fn rebuild(&mut self, collection: &Collection) {
        let started = Instant::now();
        let index = PrefixIndex::build(collection);
        let stats = index.stats();
        debug!(
            documents = stats.documents,
            vocabulary = stats.vocabulary,
            postings = stats.postings,
            fingerprint = collection.fingerprint(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "rebuilt search index"
        );
        self.state = Some(Indexed {
            collection: collection.clone(),
            index,
        });
    }

    /// True when the current index was built from this collection's contents.
    pub fn is_current(&self, collection: &Collection) -> bool {
        self.state
            .as_ref()
            .is_some_and(|s| s.collection.same_contents(collection))
    }

    /// Rank `collection` against `query`, rebuilding the index first if it
    /// belongs to another collection.
    pub fn search<'a>(&mut self, query: &str, collection: &'a Collection) -> Vec<SearchResult<'a>> {
        if prepare_query(query).is_none() {
            return Vec::new();
        }
        self.ensure_current(collection);
        self.try_search(query, collection).unwrap_or_default()
    }

    /// Rank without rebuilding. `None` when the index is missing or stale.
    pub fn try_search<'a>(
        &self,
        query: &str,
        collection: &'a Collection,
    ) -> Option<Vec<SearchResult<'a>>> {
        if !self.is_current(collection) {
            return None;
        }
        let state = self.state.as_ref()?;
        Some(rank(&state.index, query, collection, &self.options))
    }

    /// Rank the collection the index was last built from.
    pub fn search_current(&self, query: &str) -> Vec<SearchResult<'_>> {
        match &self.state {
            Some(state) => rank(&state.index, query, &state.collection, &self.options),
            None => Vec::new(),
        }
    }

    fn ensure_current(&mut self, collection: &Collection) {
        if !self.is_current(collection) {
            self.rebuild(collection);
            return;
        }
        // Same contents behind a new handle: keep the index, track the handle.
        if let Some(state) = &mut self.state {
            if !state.collection.same_allocation(collection) {
                state.collection = collection.clone();
            }
        }
    }

    /// Index statistics, if an index has been built.
    pub fn stats(&self) -> Option<IndexStats> {
        self.state.as_ref().map(|s| s.index.stats())
    }

    /// The collection the current index was built from.
    pub fn collection(&self) -> Option<&Collection> {
        self.state.as_ref().map(|s| &s.collection)
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}
