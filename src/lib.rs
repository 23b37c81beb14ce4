//! Incremental search over a static reference catalog.
//!
//! A catalog holds versioned assembly records (identity, provenance, known
//! conflicts) and API documentation pages. This crate turns free-text queries
//! into ranked matches over one slice of that catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │ catalog.rs  │────▶│collection.rs │────▶│   index/        │
//! │ (Catalog,   │     │ (Collection, │     │  (PrefixIndex)  │
//! │  Scope)     │     │  fingerprint)│     │                 │
//! └─────────────┘     └──────────────┘     └─────────────────┘
//!                            │                      │
//!                            ▼                      ▼
//!                     ┌──────────────┐     ┌─────────────────┐
//!                     │  scoring/    │◀────│    search/      │
//!                     │ (weights,    │     │ (rank, Searcher,│
//!                     │  ranking)    │     │  SharedSearcher)│
//!                     └──────────────┘     └─────────────────┘
//!                                                   │
//!                                                   ▼
//!                                          ┌─────────────────┐
//!                                          │   select.rs     │
//!                                          │ (ResultCursor,  │
//!                                          │  OnSelect)      │
//!                                          └─────────────────┘
//! ```
//!
//! The index only narrows; scores are always recomputed against the full
//! record. See [`scoring`] for the weight table.
//!
//! # Usage
//!
//! ```
//! use refcat::{Collection, Searcher, SearchOptions};
//! use refcat::testing::newtonsoft;
//!
//! let collection = Collection::new(vec![newtonsoft()]).unwrap();
//! let mut searcher = Searcher::new(SearchOptions::default());
//!
//! let results = searcher.search("newtonsoft", &collection);
//! assert_eq!(results[0].score, 130);
//! ```

pub mod catalog;
mod collection;
pub mod contracts;
mod error;
pub mod index;
pub mod scoring;
pub mod search;
pub mod select;
pub mod testing;
mod types;
mod utils;

pub use catalog::{Catalog, CatalogProvider, CollectionProvider, Release, Scope};
pub use collection::Collection;
pub use error::{CatalogError, Result};
pub use index::{IndexStats, PrefixIndex};
pub use scoring::{matched_fields, prepare_query, score_document, ScoredField};
pub use search::{rank, CandidatePolicy, SearchOptions, Searcher, SharedSearcher, DEFAULT_LIMIT};
pub use select::{OnSelect, ResultCursor};
pub use types::{
    CatalogEntry, CodeExample, Conflict, Document, EntryType, LegacyEntry, MatchedField,
    Parameter, ReferencedEntry, SearchResult, Severity,
};
pub use utils::{normalize, tokenize};
