//! Ranking on the sample catalog: weights, field attribution, tie order.

use crate::common::{assert_sorted, ids, sample, scores};
use refcat::{MatchedField, SearchOptions, Searcher};

#[test]
fn test_exact_name_outranks_name_substring() {
    let collection = sample("2024");
    let results = Searcher::default().search("revitapi", &collection);

    // RevitAPI: exact name 100 + assembly 80. RevitAPIUI: name 50 + assembly 80.
    assert_eq!(ids(&results), vec!["2024-revitapi", "2024-revitapiui"]);
    assert_eq!(scores(&results), vec![180, 130]);
}

#[test]
fn test_every_matching_field_adds_up() {
    let collection = sample("2024");
    let results = Searcher::default().search("newtonsoft", &collection);

    assert_eq!(ids(&results), vec!["2024-newtonsoft-json"]);
    // name 50, assembly 80, package 70, one recommendation 10, one conflict target 15
    assert_eq!(results[0].score, 225);
    assert_eq!(
        results[0].matched_fields.iter().copied().collect::<Vec<_>>(),
        vec![MatchedField::Name]
    );
}

#[test]
fn test_json_across_two_packages() {
    let collection = sample("2024");
    let results = Searcher::default().search("JSON", &collection);

    assert_eq!(
        ids(&results),
        vec!["2024-newtonsoft-json", "2024-system-text-json"]
    );
    // name 50 + assembly 80 + package 70 + description 20 + two recommendations 20 + conflict target 15
    assert_eq!(results[0].score, 255);
    // name 50 + assembly 80 + description 20
    assert_eq!(results[1].score, 150);
    assert!(results[1].matched_fields.contains(&MatchedField::Description));
}

#[test]
fn test_version_scores_without_being_reported() {
    let collection = sample("2024");
    let results = Searcher::default().search("13.0.3", &collection);

    assert_eq!(ids(&results), vec!["2024-newtonsoft-json"]);
    assert_eq!(results[0].score, 40);
    assert!(results[0].matched_fields.is_empty());
}

#[test]
fn test_description_only_match() {
    let collection = sample("2024");
    let results = Searcher::default().search("ribbons", &collection);

    assert_eq!(ids(&results), vec!["2024-revitapiui"]);
    assert_eq!(results[0].score, 20);
    assert!(results[0].matched_fields.contains(&MatchedField::Description));
}

#[test]
fn test_reference_entries() {
    let collection = sample("reference");
    let results = Searcher::default().search("Substring", &collection);

    assert_eq!(ids(&results), vec!["string-substring", "string-contains"]);
    // exact name 100 + full name 30 + description 20
    assert_eq!(results[0].score, 150);
    assert!(results[0].matched_fields.contains(&MatchedField::FullName));
    assert_eq!(results[1].score, 20);
}

#[test]
fn test_vendor_alias_is_not_searchable_text() {
    // "aws" in the catalog file becomes the cloud-provider category
    let collection = sample("all");
    let results = Searcher::default().search("aws", &collection);

    assert_eq!(ids(&results), vec!["2023-awssdk-core", "2024-awssdk-s3"]);
    // the core package also says "AWS" in its description
    assert_eq!(scores(&results), vec![220, 200]);
}

#[test]
fn test_ties_keep_catalog_order() {
    let collection = sample("all");
    let results = Searcher::default().search("copy local", &collection);

    assert_eq!(ids(&results), vec!["2023-revitapi", "2024-revitapi"]);
    assert_eq!(scores(&results), vec![10, 10]);
}

#[test]
fn test_limit_applies_after_sorting() {
    let collection = sample("all");
    let mut searcher = Searcher::new(SearchOptions::default().with_limit(2));
    let results = searcher.search("json", &collection);

    assert_eq!(results.len(), 2);
    assert_sorted(&results);
    assert!(results.iter().all(|r| r.document.name().to_lowercase().contains("json")));
}
