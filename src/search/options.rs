// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Maximum number of results returned by default.
pub const DEFAULT_LIMIT: usize = 20;

/// Which documents get scored for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CandidatePolicy {
    /// Index candidates plus every document with a non-zero score.
    ///
    /// Nothing that scores can be hidden by the order of the index.
    #[default]
    FullCollection,
    /// Only the first `n` index candidates, in position order.
    ///
    /// Cheaper on large collections, but a high-scoring document that sits
    /// late in the collection can fall outside the cap.
    IndexCapped(usize),
}

/// Tunables for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Results kept after sorting.
    pub limit: usize,
    pub candidates: CandidatePolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            candidates: CandidatePolicy::FullCollection,
        }
    }
}

impl SearchOptions {
    /// The capped index-then-score pipeline with the default cap.
    pub fn index_capped() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            candidates: CandidatePolicy::IndexCapped(DEFAULT_LIMIT),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_candidates(mut self, candidates: CandidatePolicy) -> Self {
        self.candidates = candidates;
        self
    }
}
