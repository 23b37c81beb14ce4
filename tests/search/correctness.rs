//! Result-set correctness: what may and may not come back.

use crate::common::{assert_sorted, ids, make_entry, sample};
use refcat::{rank, CandidatePolicy, Collection, PrefixIndex, SearchOptions, Searcher};

#[test]
fn test_blank_queries_return_nothing() {
    let collection = sample("all");
    let mut searcher = Searcher::default();
    for query in ["", " ", "\t", "\n  \r"] {
        assert!(searcher.search(query, &collection).is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_unmatched_query_returns_nothing() {
    let collection = sample("all");
    assert!(Searcher::default().search("kubernetes", &collection).is_empty());
}

#[test]
fn test_results_belong_to_the_collection() {
    let collection = sample("2023");
    let results = Searcher::default().search("a", &collection);
    assert!(!results.is_empty());
    for r in &results {
        let (position, doc) = collection.find(r.document.id()).expect("result is in collection");
        assert_eq!(position, r.position);
        assert!(std::ptr::eq(doc, r.document));
    }
    assert_sorted(&results);
}

#[test]
fn test_exact_name_any_case_scores_at_least_100() {
    let collection = sample("all");
    let mut searcher = Searcher::default();
    for doc in collection.iter() {
        for query in [doc.name().to_lowercase(), doc.name().to_uppercase()] {
            let results = searcher.search(&query, &collection);
            let hit = results
                .iter()
                .find(|r| r.document.id() == doc.id())
                .unwrap_or_else(|| panic!("{} not found for {:?}", doc.id(), query));
            assert!(hit.score >= 100, "{} scored {}", doc.id(), hit.score);
        }
    }
}

#[test]
fn test_capped_pipeline_only_scores_index_candidates() {
    let collection = sample("all");
    let index = PrefixIndex::build(&collection);
    let options = SearchOptions::default().with_candidates(CandidatePolicy::IndexCapped(3));

    let results = rank(&index, "system", &collection, &options);
    let candidates = index.lookup("system", Some(3));

    assert!(results.len() <= 3);
    for r in &results {
        assert!(candidates.contains(&r.position));
    }
}

#[test]
fn test_full_collection_finds_what_the_cap_hides() {
    // 20 early candidates crowd out the exact match at the end
    let mut docs: Vec<_> = (0..20)
        .map(|i| make_entry(&format!("early-{}", i), &format!("Widget {}", i), "widget helper"))
        .collect();
    docs.push(make_entry("late", "Widget", "the widget"));
    let collection = Collection::new(docs).unwrap();

    let capped = Searcher::new(SearchOptions::index_capped()).search("widget", &collection);
    assert!(!ids(&capped).contains(&"late"));

    let full = Searcher::default().search("widget", &collection);
    assert_eq!(full[0].document.id(), "late");
    assert_eq!(full[0].score, 100 + 20);
}

#[test]
fn test_mid_word_substring_found() {
    // "rializ" starts no token, so it is only found by scoring every document
    let collection = sample("2024");
    let results = Searcher::default().search("rializ", &collection);
    // description 20 beats a recommendation 10
    assert_eq!(ids(&results), vec!["2024-system-text-json", "2024-newtonsoft-json"]);
    assert_eq!(results[0].score, 20);
    assert_eq!(results[1].score, 10);
}
