// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking pipeline as a pure function of index, query and collection.

use super::options::{CandidatePolicy, SearchOptions};
use crate::collection::Collection;
use crate::contracts::{check_index_matches, check_results_sorted};
use crate::index::PrefixIndex;
use crate::scoring::ranking::rank_results;
use crate::scoring::{matched_fields, prepare_query, score_document};
use crate::types::{Document, SearchResult};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rank `collection` against `query`.
///
/// `index` must have been built from `collection` (same fingerprint). Blank
/// queries return nothing without touching the index. Results are sorted by
/// score, highest first, ties in collection order, and cut to
/// `options.limit`.
pub fn rank<'a>(
    index: &PrefixIndex,
    query: &str,
    collection: &'a Collection,
    options: &SearchOptions,
) -> Vec<SearchResult<'a>> {
    let Some(query) = prepare_query(query) else {
        return Vec::new();
    };
    check_index_matches(index, collection);

    let documents = collection.documents();
    let mut results = match options.candidates {
        CandidatePolicy::IndexCapped(cap) => index
            .lookup(&query, Some(cap))
            .into_iter()
            .filter_map(|position| {
                documents
                    .get(position)
                    .map(|doc| score_candidate(&query, position, doc))
            })
            .collect(),
        CandidatePolicy::FullCollection => full_pass(index, &query, documents),
    };

    let scored = results.len();
    rank_results(&mut results);
    results.truncate(options.limit);
    check_results_sorted(&results);

    trace!(
        query = %query,
        scored,
        returned = results.len(),
        "ranked query"
    );
    results
}

/// Index candidates plus anything else with a non-zero score, in position order.
fn full_pass<'a>(
    index: &PrefixIndex,
    query: &str,
    documents: &'a [Document],
) -> Vec<SearchResult<'a>> {
    let mut from_index = vec![false; documents.len()];
    for position in index.lookup(query, None) {
        if let Some(slot) = from_index.get_mut(position) {
            *slot = true;
        }
    }

    let keep = |(position, doc): (usize, &'a Document)| {
        let score = score_document(query, doc);
        (score > 0 || from_index[position]).then(|| SearchResult {
            document: doc,
            position,
            score,
            matched_fields: matched_fields(query, doc),
        })
    };

    #[cfg(feature = "parallel")]
    {
        documents.par_iter().enumerate().filter_map(keep).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        documents.iter().enumerate().filter_map(keep).collect()
    }
}

fn score_candidate<'a>(query: &str, position: usize, doc: &'a Document) -> SearchResult<'a> {
    SearchResult {
        document: doc,
        position,
        score: score_document(query, doc),
        matched_fields: matched_fields(query, doc),
    }
}
