// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Higher score first. Equal scores keep the order the candidates were
//! produced in (ascending collection position), which makes the output a pure
//! function of the query and the collection.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Only the score takes part. Ties compare `Equal` on purpose: callers rely on
/// a stable sort to keep candidate order among them.
pub fn compare_results(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Sort results best-first, keeping candidate order among ties.
pub fn rank_results(results: &mut [SearchResult<'_>]) {
    // `sort_by` is stable; `sort_unstable_by` would scramble ties.
    results.sort_by(compare_results);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_entry;
    use std::collections::BTreeSet;

    #[test]
    fn test_higher_score_first() {
        let a = make_entry("a", "A", "a");
        let b = make_entry("b", "B", "b");
        let low = SearchResult {
            document: &a,
            position: 0,
            score: 20,
            matched_fields: BTreeSet::new(),
        };
        let high = SearchResult {
            document: &b,
            position: 1,
            score: 130,
            matched_fields: BTreeSet::new(),
        };
        assert_eq!(compare_results(&high, &low), Ordering::Less);
        assert_eq!(compare_results(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let docs: Vec<_> = (0..6)
            .map(|i| make_entry(&format!("d{}", i), "Same", "same"))
            .collect();
        let scores = [10, 50, 10, 50, 10, 50];
        let mut results: Vec<SearchResult<'_>> = docs
            .iter()
            .zip(scores)
            .enumerate()
            .map(|(position, (document, score))| SearchResult {
                document,
                position,
                score,
                matched_fields: BTreeSet::new(),
            })
            .collect();

        rank_results(&mut results);

        let positions: Vec<usize> = results.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 3, 5, 0, 2, 4]);
    }
}
