//! Many threads, one shared index cache.

use crate::common::{ids, sample};
use refcat::SharedSearcher;
use std::sync::Arc;
use std::thread;

#[test]
fn test_threads_on_different_scopes_get_their_own_results() {
    let shared = Arc::new(SharedSearcher::default());
    let scopes = ["2023", "2024", "reference", "all"];

    let expected: Vec<Vec<String>> = scopes
        .iter()
        .map(|scope| {
            let collection = sample(scope);
            ids(&refcat::Searcher::default().search("s", &collection))
                .into_iter()
                .map(str::to_string)
                .collect()
        })
        .collect();

    let handles: Vec<_> = scopes
        .iter()
        .zip(expected)
        .map(|(scope, expected)| {
            let shared = Arc::clone(&shared);
            let collection = sample(scope);
            thread::spawn(move || {
                for _ in 0..25 {
                    let results = shared.search("s", &collection);
                    assert_eq!(ids(&results), expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
