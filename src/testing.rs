//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{CatalogEntry, Document, EntryType, LegacyEntry};

/// The bundled sample catalog, used by tests, benches and the CLI docs.
pub const SAMPLE_CATALOG: &str = include_str!("../data/sample-catalog.json");

/// Create a catalog document with only the required fields.
pub fn make_entry(id: &str, name: &str, description: &str) -> Document {
    Document::Catalog(CatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        ..Default::default()
    })
}

/// Create a legacy documentation document with only the required fields.
pub fn make_legacy(id: &str, name: &str, description: &str) -> Document {
    Document::Legacy(LegacyEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        ..Default::default()
    })
}

/// Create a catalog document with identity fields filled in.
pub fn make_assembly(id: &str, name: &str, version: &str, description: &str) -> Document {
    Document::Catalog(CatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        assembly_name: Some(name.to_string()),
        version: Some(version.to_string()),
        entry_type: Some(EntryType::ThirdParty),
        ..Default::default()
    })
}

/// The Newtonsoft.Json record used throughout the ranking examples.
pub fn newtonsoft() -> Document {
    Document::Catalog(CatalogEntry {
        id: "newtonsoft-json".to_string(),
        name: "Newtonsoft.Json".to_string(),
        description: "Popular high-performance JSON framework for .NET".to_string(),
        assembly_name: Some("Newtonsoft.Json".to_string()),
        version: Some("13.0.3.27908".to_string()),
        ..Default::default()
    })
}
