//! Switching collections never serves positions from the old index.

use crate::common::{ids, make_entry, sample};
use refcat::{Collection, Searcher};

#[test]
fn test_switching_scopes_rebuilds() {
    let older = sample("2023");
    let newer = sample("2024");
    let mut searcher = Searcher::default();

    let first = searcher.search("revitapi", &older);
    assert_eq!(ids(&first), vec!["2023-revitapi"]);

    let second = searcher.search("revitapi", &newer);
    assert_eq!(ids(&second), vec!["2024-revitapi", "2024-revitapiui"]);
    assert_eq!(searcher.stats().map(|s| s.documents), Some(newer.len()));

    // and back again
    let third = searcher.search("revitapi", &older);
    assert_eq!(ids(&third), vec!["2023-revitapi"]);
}

#[test]
fn test_shorter_collection_never_indexes_out_of_range() {
    let long = Collection::new(
        (0..10)
            .map(|i| make_entry(&format!("d{}", i), &format!("Package {}", i), "text"))
            .collect(),
    )
    .unwrap();
    let short = Collection::new(vec![make_entry("only", "Package Only", "text")]).unwrap();

    let mut searcher = Searcher::default();
    assert_eq!(searcher.search("package", &long).len(), 10);
    let results = searcher.search("package", &short);
    assert_eq!(ids(&results), vec!["only"]);
}

#[test]
fn test_same_scope_does_not_rebuild() {
    let collection = sample("all");
    let mut searcher = Searcher::default();
    searcher.search("json", &collection);
    assert!(searcher.is_current(&sample("all")));
    assert!(!searcher.is_current(&sample("reference")));
}
