// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: from a raw query to a ranked result list.
//!
//! The pipeline is short:
//!
//! ```text
//! query ──lowercase──▶ index lookup ──▶ candidates ──▶ score ──▶ stable sort ──▶ truncate
//!                                          ▲
//!                   full-collection pass ──┘ (FullCollection only)
//! ```
//!
//! [`rank`] is the pure function. [`Searcher`] owns the index cache and
//! rebuilds it when the collection changes. [`SharedSearcher`] puts a
//! single-writer lock around that cache for multi-threaded callers.

mod options;
mod ranker;
mod searcher;
mod shared;

pub use options::*;
pub use ranker::*;
pub use searcher::*;
pub use shared::*;
