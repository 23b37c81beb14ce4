// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog: documents and the records hanging off them.
//!
//! A document is one of two explicit shapes. Catalog entries describe a
//! versioned assembly (identity, provenance, conflicts). Legacy entries describe
//! an API documentation page (syntax, parameters, examples). The shape is picked
//! when the document is constructed or deserialized, never guessed later from
//! which optional fields happen to be filled in.
//!
//! # JSON
//!
//! ```json
//! { "shape": "catalog", "id": "newtonsoft-json", "name": "Newtonsoft.Json",
//!   "description": "...", "assemblyName": "Newtonsoft.Json", "version": "13.0.3.27908" }
//! ```
//!
//! Field names are camelCase. A few names from older catalog dumps are accepted
//! as aliases (`nugetPackage`, `nugetVersion`, `revitVersionId`).

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CATALOG ENTRY
// =============================================================================

/// Where an assembly comes from.
///
/// The catalog only ever uses this small closed set. Older dumps used vendor
/// names directly; those are accepted as aliases and folded into the generic
/// categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    System,
    ThirdParty,
    #[serde(alias = "autodesk")]
    Vendor,
    #[serde(alias = "aws")]
    CloudProvider,
    #[serde(alias = "microsoft")]
    Platform,
}

impl EntryType {
    /// Convert to the kebab-case string used in JSON and in search text.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::System => "system",
            EntryType::ThirdParty => "third-party",
            EntryType::Vendor => "vendor",
            EntryType::CloudProvider => "cloud-provider",
            EntryType::Platform => "platform",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How bad a known conflict is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A known incompatibility between this assembly and another one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub conflicts_with: String,
    pub reason: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

/// An assembly this entry references transitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencedEntry {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_token: Option<String>,
}

/// A versioned assembly record.
///
/// `name` and `description` are required; everything else is optional and
/// contributes nothing to search when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<EntryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_token: Option<String>,
    #[serde(alias = "nugetPackage", default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(alias = "nugetVersion", default, skip_serializing_if = "Option::is_none")]
    pub package_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Release this entry belongs to (e.g. "2024").
    #[serde(alias = "revitVersionId", default, skip_serializing_if = "Option::is_none")]
    pub parent_collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<Conflict>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub referenced_entries: Vec<ReferencedEntry>,
}

// =============================================================================
// LEGACY DOCUMENTATION ENTRY
// =============================================================================

/// A parameter of a documented method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// A code sample attached to a documentation page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExample {
    pub title: String,
    pub language: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An API documentation page (namespace, class, method, property...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free-form kind such as "namespace" or "method".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<CodeExample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// The unit of search and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Document {
    Catalog(CatalogEntry),
    Legacy(LegacyEntry),
}

impl Document {
    pub fn id(&self) -> &str {
        match self {
            Document::Catalog(entry) => &entry.id,
            Document::Legacy(entry) => &entry.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Document::Catalog(entry) => &entry.name,
            Document::Legacy(entry) => &entry.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Document::Catalog(entry) => &entry.description,
            Document::Legacy(entry) => &entry.description,
        }
    }

    /// Category tag as text: the entry type for catalog entries, the free-form
    /// kind for legacy entries.
    pub fn type_label(&self) -> Option<&str> {
        match self {
            Document::Catalog(entry) => entry.entry_type.as_ref().map(EntryType::as_str),
            Document::Legacy(entry) => entry.kind.as_deref(),
        }
    }

    /// Display-qualified name. Only legacy entries carry one.
    pub fn full_name(&self) -> Option<&str> {
        match self {
            Document::Catalog(_) => None,
            Document::Legacy(entry) => entry.full_name.as_deref(),
        }
    }

    pub fn as_catalog(&self) -> Option<&CatalogEntry> {
        match self {
            Document::Catalog(entry) => Some(entry),
            Document::Legacy(_) => None,
        }
    }

    pub fn as_legacy(&self) -> Option<&LegacyEntry> {
        match self {
            Document::Catalog(_) => None,
            Document::Legacy(entry) => Some(entry),
        }
    }

    /// Concatenated text the prefix index is built from.
    ///
    /// Order: name, identity fields, description, type, recommendations,
    /// conflict text, references. Absent fields are skipped entirely.
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.name()];

        match self {
            Document::Catalog(entry) => {
                parts.extend(
                    [
                        &entry.assembly_name,
                        &entry.version,
                        &entry.package_name,
                        &entry.package_version,
                        &entry.public_key_token,
                        &entry.location,
                        &entry.parent_collection_id,
                    ]
                    .into_iter()
                    .filter_map(|field| field.as_deref()),
                );
                parts.push(&entry.description);
                if let Some(entry_type) = entry.entry_type {
                    parts.push(entry_type.as_str());
                }
                parts.extend(entry.recommendations.iter().map(String::as_str));
                for conflict in &entry.conflicts {
                    parts.push(&conflict.conflicts_with);
                    parts.push(&conflict.reason);
                    if let Some(solution) = &conflict.solution {
                        parts.push(solution);
                    }
                }
                parts.extend(entry.referenced_entries.iter().map(|r| r.name.as_str()));
            }
            Document::Legacy(entry) => {
                if let Some(full_name) = &entry.full_name {
                    parts.push(full_name);
                }
                parts.push(&entry.description);
                if let Some(kind) = &entry.kind {
                    parts.push(kind);
                }
                for param in &entry.parameters {
                    parts.push(&param.name);
                    parts.push(&param.param_type);
                    parts.push(&param.description);
                }
                if let Some(return_type) = &entry.return_type {
                    parts.push(return_type);
                }
                for example in &entry.examples {
                    parts.push(&example.title);
                    if let Some(description) = &example.description {
                        parts.push(description);
                    }
                }
            }
        }

        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}

impl From<CatalogEntry> for Document {
    fn from(entry: CatalogEntry) -> Self {
        Document::Catalog(entry)
    }
}

impl From<LegacyEntry> for Document {
    fn from(entry: LegacyEntry) -> Self {
        Document::Legacy(entry)
    }
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// A top-level field reported back for highlighting.
///
/// Only display fields are reported. Scoring looks at more fields than this
/// (assembly name, version, package, conflicts...), so a result can carry a
/// positive score with an empty matched set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchedField {
    Name,
    FullName,
    Description,
    Type,
}

impl MatchedField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchedField::Name => "name",
            MatchedField::FullName => "fullName",
            MatchedField::Description => "description",
            MatchedField::Type => "type",
        }
    }
}

/// One ranked hit.
///
/// Borrows the document from the collection it was ranked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub document: &'a Document,
    /// Position of the document in its collection.
    pub position: usize,
    pub score: u32,
    pub matched_fields: std::collections::BTreeSet<MatchedField>,
}
