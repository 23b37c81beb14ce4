// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and the ranker.
//!
//! Debug-mode assertions that check the structural properties everything else
//! relies on. They are no-ops in release builds (`debug_assert!`) and fail
//! loudly during development and tests.
//!
//! | Contract Function              | Property                                   |
//! |--------------------------------|--------------------------------------------|
//! | `check_index_well_formed`      | sorted vocabulary, aligned sorted postings |
//! | `check_results_sorted`         | scores non-increasing along the results    |
//! | `check_index_matches`          | index built from the collection queried    |

use crate::collection::Collection;
use crate::index::PrefixIndex;
use crate::types::SearchResult;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check vocabulary order, posting alignment and posting bounds.
///
/// # Panics (debug builds only)
/// Panics on the first violated invariant.
#[inline]
pub fn check_index_well_formed(index: &PrefixIndex) {
    let vocabulary = index.vocabulary();
    let postings = index.postings();

    debug_assert_eq!(
        vocabulary.len(),
        postings.len(),
        "Contract violation: vocabulary.len() {} != postings.len() {}",
        vocabulary.len(),
        postings.len()
    );

    for (i, pair) in vocabulary.windows(2).enumerate() {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: vocabulary not strictly sorted at {} ('{}' >= '{}')",
            i,
            pair[0],
            pair[1]
        );
    }

    for (term, list) in vocabulary.iter().zip(postings) {
        debug_assert!(
            !list.is_empty(),
            "Contract violation: posting list for '{}' is empty",
            term
        );
        debug_assert!(
            list.windows(2).all(|w| w[0] < w[1]),
            "Contract violation: posting list for '{}' not strictly sorted",
            term
        );
        debug_assert!(
            list.iter().all(|&p| (p as usize) < index.doc_count()),
            "Contract violation: posting list for '{}' points past doc_count {}",
            term,
            index.doc_count()
        );
    }
}

/// Check that an index belongs to the collection it is about to serve.
///
/// # Panics (debug builds only)
/// Panics if the fingerprints differ.
#[inline]
pub fn check_index_matches(index: &PrefixIndex, collection: &Collection) {
    debug_assert_eq!(
        index.fingerprint(),
        collection.fingerprint(),
        "Contract violation: index fingerprint {:#x} != collection fingerprint {:#x}",
        index.fingerprint(),
        collection.fingerprint()
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that results are ordered by non-increasing score.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_results_sorted(results: &[SearchResult<'_>]) {
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: results[{}].score {} < results[{}].score {}",
            i,
            pair[0].score,
            i + 1,
            pair[1].score
        );
    }
}
