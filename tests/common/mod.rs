//! Shared test utilities and fixtures.

#![allow(dead_code)]

use refcat::{Catalog, CatalogProvider, Collection, CollectionProvider, Scope, SearchResult};
use std::sync::LazyLock;

// Re-export canonical test utilities from refcat::testing
pub use refcat::testing::{make_assembly, make_entry, make_legacy, newtonsoft, SAMPLE_CATALOG};

// ============================================================================
// SAMPLE CATALOG
// ============================================================================

/// The bundled sample catalog, validated once per test binary.
pub static SAMPLE: LazyLock<CatalogProvider> = LazyLock::new(|| {
    let catalog = Catalog::from_json(SAMPLE_CATALOG).expect("sample catalog parses");
    CatalogProvider::new(catalog).expect("sample catalog validates")
});

/// Collection for a scope of the sample catalog ("all", "reference" or a release id).
pub fn sample(scope: &str) -> Collection {
    let scope: Scope = scope.parse().expect("scope parses");
    SAMPLE.collection(&scope).expect("sample scope exists")
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn ids<'a>(results: &[SearchResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.document.id()).collect()
}

pub fn scores(results: &[SearchResult<'_>]) -> Vec<u32> {
    results.iter().map(|r| r.score).collect()
}

/// Assert that scores never increase along the list.
pub fn assert_sorted(results: &[SearchResult<'_>]) {
    for (i, pair) in results.windows(2).enumerate() {
        assert!(
            pair[0].score >= pair[1].score,
            "results[{}] score {} < results[{}] score {}",
            i,
            pair[0].score,
            i + 1,
            pair[1].score
        );
    }
}
