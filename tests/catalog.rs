//! Catalog loading and validation through the public API.

mod common;

use common::SAMPLE_CATALOG;
use refcat::{Catalog, CatalogError, CatalogProvider, CollectionProvider, Document, Scope};
use std::fs;
use tempfile::TempDir;

fn write_catalog(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    fs::write(&path, json).expect("write catalog");
    path
}

#[test]
fn test_load_sample_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, SAMPLE_CATALOG);

    let provider = CatalogProvider::load(&path).unwrap();
    let releases: Vec<&str> = provider
        .catalog()
        .releases
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(releases, vec!["2023", "2024"]);

    let all = provider.collection(&Scope::All).unwrap();
    let per_scope: usize = ["2023", "2024", "reference"]
        .iter()
        .map(|s| provider.collection(&s.parse().unwrap()).unwrap().len())
        .sum();
    assert_eq!(all.len(), per_scope);
}

#[test]
fn test_dependencies_alias_and_inherited_release() {
    let provider = CatalogProvider::new(Catalog::from_json(SAMPLE_CATALOG).unwrap()).unwrap();
    // release 2024 lists its assemblies under "dependencies"
    let doc = provider.find(&Scope::Release("2024".into()), "2024-serilog").unwrap();
    match doc {
        Document::Catalog(entry) => {
            assert_eq!(entry.parent_collection_id.as_deref(), Some("2024"));
            assert_eq!(entry.package_version.as_deref(), Some("2.12.0"));
        }
        Document::Legacy(_) => panic!("expected a catalog entry"),
    }
}

#[test]
fn test_reference_entries_are_legacy_documents() {
    let provider = CatalogProvider::new(Catalog::from_json(SAMPLE_CATALOG).unwrap()).unwrap();
    let reference = provider.collection(&Scope::Reference).unwrap();
    assert!(reference.iter().all(|d| d.as_legacy().is_some()));
    let substring = provider.find(&Scope::Reference, "string-substring").unwrap();
    assert_eq!(substring.as_legacy().map(|e| e.parameters.len()), Some(2));
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "{ \"releases\": [ ");
    assert!(matches!(
        CatalogProvider::load(&path),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    match Catalog::load(&path) {
        Err(CatalogError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[test]
fn test_missing_name_names_the_document() {
    let json = r#"{ "releases": [ { "id": "r", "name": "R", "description": "d",
        "entries": [ { "id": "nameless", "name": "", "description": "has no name" } ] } ] }"#;
    let err = CatalogProvider::new(Catalog::from_json(json).unwrap()).unwrap_err();
    assert!(matches!(err, CatalogError::MissingName { ref id } if id == "nameless"));
    assert!(err.to_string().contains("nameless"));
}

#[test]
fn test_unknown_scope_and_document() {
    let provider = CatalogProvider::new(Catalog::from_json(SAMPLE_CATALOG).unwrap()).unwrap();
    assert!(matches!(
        provider.collection(&Scope::Release("1999".into())),
        Err(CatalogError::UnknownScope(ref s)) if s == "1999"
    ));
    assert!(matches!(
        provider.find(&Scope::All, "does-not-exist"),
        Err(CatalogError::UnknownDocument(_))
    ));
}

#[test]
fn test_empty_catalog() {
    let provider = CatalogProvider::new(Catalog::from_json("{}").unwrap()).unwrap();
    assert!(provider.collection(&Scope::All).unwrap().is_empty());
    assert!(provider.collection(&Scope::Reference).unwrap().is_empty());
}
