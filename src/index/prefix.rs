// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorted-vocabulary prefix index.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **VOCABULARY_SORTED**: `vocabulary` is strictly increasing (sorted, no duplicates)
//! 2. **POSTINGS_ALIGNED**: `postings.len() == vocabulary.len()`
//! 3. **POSTING_LIST_SORTED**: each posting list is strictly increasing
//! 4. **POSITIONS_IN_BOUNDS**: every posting is `< doc_count`
//!
//! Sortedness is what makes prefix lookup cheap: every token that starts with
//! `q` sits in one contiguous run beginning at the first token `>= q`.

use crate::collection::Collection;
use crate::utils::tokenize;
use serde::Serialize;
use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Token → document positions, over one collection.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    vocabulary: Vec<String>,
    postings: Vec<Vec<u32>>,
    doc_count: usize,
    fingerprint: u64,
}

/// Size summary for inspection output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub documents: usize,
    pub vocabulary: usize,
    pub postings: usize,
}

impl PrefixIndex {
    /// Build an index over every document in the collection.
    ///
    /// Positions are the documents' offsets in the collection, so the index
    /// is only meaningful for a collection with the same fingerprint.
    pub fn build(collection: &Collection) -> Self {
        let documents = collection.documents();

        // Tokenize each document's search text. This is the expensive part.
        let token_sets: Vec<Vec<String>> = {
            #[cfg(feature = "parallel")]
            {
                documents
                    .par_iter()
                    .map(|doc| distinct_tokens(&doc.search_text()))
                    .collect()
            }
            #[cfg(not(feature = "parallel"))]
            {
                documents
                    .iter()
                    .map(|doc| distinct_tokens(&doc.search_text()))
                    .collect()
            }
        };

        // Positions are pushed in increasing order, so each posting list comes
        // out sorted without a second pass.
        let mut terms: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        for (position, tokens) in token_sets.into_iter().enumerate() {
            for token in tokens {
                terms.entry(token).or_default().push(position as u32);
            }
        }

        let (vocabulary, postings): (Vec<String>, Vec<Vec<u32>>) = terms.into_iter().unzip();

        Self {
            vocabulary,
            postings,
            doc_count: documents.len(),
            fingerprint: collection.fingerprint(),
        }
    }

    /// Candidate positions for a query, in ascending position order.
    ///
    /// Every query token must be a prefix of at least one token of the
    /// document. Returns nothing for a query with no tokens. `limit` caps the
    /// number of positions returned, taking the lowest ones.
    pub fn lookup(&self, query: &str, limit: Option<usize>) -> Vec<usize> {
        let query_tokens = distinct_tokens(query);
        if query_tokens.is_empty() || self.doc_count == 0 {
            return Vec::new();
        }

        let mut matched: Option<Vec<bool>> = None;
        for token in &query_tokens {
            let hits = self.prefix_hits(token);
            match matched.as_mut() {
                None => matched = Some(hits),
                Some(acc) => {
                    for (slot, hit) in acc.iter_mut().zip(hits) {
                        *slot &= hit;
                    }
                }
            }
        }

        let positions = matched
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(position, hit)| hit.then_some(position));

        match limit {
            Some(limit) => positions.take(limit).collect(),
            None => positions.collect(),
        }
    }

    /// Mark every document containing a token that starts with `prefix`.
    fn prefix_hits(&self, prefix: &str) -> Vec<bool> {
        let mut hits = vec![false; self.doc_count];
        let start = self
            .vocabulary
            .partition_point(|token| token.as_str() < prefix);

        for (token, postings) in self.vocabulary[start..]
            .iter()
            .zip(&self.postings[start..])
        {
            if !token.starts_with(prefix) {
                break;
            }
            for &position in postings {
                hits[position as usize] = true;
            }
        }
        hits
    }

    /// Fingerprint of the collection this index was built from.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn postings(&self) -> &[Vec<u32>] {
        &self.postings
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.doc_count,
            vocabulary: self.vocabulary.len(),
            postings: self.postings.iter().map(Vec::len).sum(),
        }
    }
}

fn distinct_tokens(text: &str) -> Vec<String> {
    let mut tokens = tokenize(text);
    tokens.sort_unstable();
    tokens.dedup();
    tokens
}
