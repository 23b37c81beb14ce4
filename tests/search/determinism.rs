//! The same query over the same collection always gives the same answer.

use crate::common::{sample, SAMPLE_CATALOG};
use refcat::{Catalog, CatalogProvider, CollectionProvider, Scope, SearchResult, Searcher};

fn summary(results: &[SearchResult<'_>]) -> Vec<(String, u32, usize)> {
    results
        .iter()
        .map(|r| (r.document.id().to_string(), r.score, r.position))
        .collect()
}

#[test]
fn test_repeated_search_is_identical() {
    let collection = sample("all");
    let mut searcher = Searcher::default();
    for query in ["json", "system", "a", "revit", "13"] {
        let first = searcher.search(query, &collection);
        let second = searcher.search(query, &collection);
        assert_eq!(first, second, "query {:?}", query);
    }
}

#[test]
fn test_independent_loads_agree() {
    let load = || {
        CatalogProvider::new(Catalog::from_json(SAMPLE_CATALOG).unwrap())
            .unwrap()
            .collection(&Scope::All)
            .unwrap()
    };
    let (a, b) = (load(), load());
    assert!(!a.same_allocation(&b));
    assert_eq!(a.fingerprint(), b.fingerprint());

    for query in ["json", "string", "s"] {
        let left = summary(&Searcher::default().search(query, &a));
        let right = summary(&Searcher::default().search(query, &b));
        assert_eq!(left, right, "query {:?}", query);
    }
}

#[test]
fn test_search_current_matches_search() {
    let collection = sample("reference");
    let mut searcher = Searcher::default();
    let explicit = summary(&searcher.search("string", &collection));
    let current = summary(&searcher.search_current("string"));
    assert_eq!(explicit, current);
}
