// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Scoring tests the lowercased query as a plain substring against each field
//! of the full record. Every matching field adds its weight independently, so
//! a document that matches in its name and its assembly name collects both.
//! There is no position bonus and no term frequency: a field either contains
//! the query or it doesn't.
//!
//! # Weights
//!
//! | Field                     | Condition                 | Points |
//! |---------------------------|---------------------------|--------|
//! | name                      | exact (case-insensitive)  | 100    |
//! | name                      | substring, not exact      | 50     |
//! | assembly name             | substring                 | 80     |
//! | package name              | substring                 | 70     |
//! | version                   | substring                 | 40     |
//! | parent collection id      | substring                 | 35     |
//! | full name                 | substring                 | 30     |
//! | description               | substring                 | 20     |
//! | type                      | substring                 | 15     |
//! | each conflict target      | substring                 | 15     |
//! | each recommendation       | substring                 | 10     |
//! | each parameter name       | substring                 | 10     |
//! | each conflict reason      | substring                 | 8      |
//! | each parameter type       | substring                 | 5      |
//!
//! # Key Invariant: Exact Name Dominance
//!
//! An exact name hit outweighs a name substring hit plus a description hit:
//!
//! ```text
//! NameExact > Name + Description   (100 > 70)
//! ```
//!
//! so the document called exactly what the user typed ranks above a document
//! that merely mentions it in its name and its prose.

use crate::types::{Document, MatchedField};
use std::collections::BTreeSet;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Score for a name equal to the query.
pub const NAME_EXACT_SCORE: u32 = 100;

/// Score for a name containing the query.
pub const NAME_SUBSTRING_SCORE: u32 = 50;

/// Score for a description containing the query.
pub const DESCRIPTION_SCORE: u32 = 20;

const _: () = assert!(NAME_EXACT_SCORE > NAME_SUBSTRING_SCORE + DESCRIPTION_SCORE);

/// A field (or repeated sub-field) that contributes to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoredField {
    NameExact,
    Name,
    AssemblyName,
    PackageName,
    Version,
    ParentCollection,
    FullName,
    Description,
    Type,
    ConflictTarget,
    Recommendation,
    ParameterName,
    ConflictReason,
    ParameterType,
}

impl ScoredField {
    /// Points this field adds when it matches.
    pub fn weight(self) -> u32 {
        match self {
            ScoredField::NameExact => NAME_EXACT_SCORE,
            ScoredField::Name => NAME_SUBSTRING_SCORE,
            ScoredField::AssemblyName => 80,
            ScoredField::PackageName => 70,
            ScoredField::Version => 40,
            ScoredField::ParentCollection => 35,
            ScoredField::FullName => 30,
            ScoredField::Description => DESCRIPTION_SCORE,
            ScoredField::Type => 15,
            ScoredField::ConflictTarget => 15,
            ScoredField::Recommendation => 10,
            ScoredField::ParameterName => 10,
            ScoredField::ConflictReason => 8,
            ScoredField::ParameterType => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoredField::NameExact => "name (exact)",
            ScoredField::Name => "name",
            ScoredField::AssemblyName => "assemblyName",
            ScoredField::PackageName => "packageName",
            ScoredField::Version => "version",
            ScoredField::ParentCollection => "parentCollectionId",
            ScoredField::FullName => "fullName",
            ScoredField::Description => "description",
            ScoredField::Type => "type",
            ScoredField::ConflictTarget => "conflictsWith",
            ScoredField::Recommendation => "recommendation",
            ScoredField::ParameterName => "parameter",
            ScoredField::ConflictReason => "conflictReason",
            ScoredField::ParameterType => "parameterType",
        }
    }
}

/// Lowercase a raw query. `None` for blank input.
///
/// Surrounding whitespace only decides blankness; it is kept for scoring so a
/// name that carries trailing spaces can still be matched exactly.
pub fn prepare_query(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_lowercase())
    }
}

#[inline]
fn contains(field: &str, query: &str) -> bool {
    field.to_lowercase().contains(query)
}

#[inline]
fn contains_opt(field: Option<&str>, query: &str) -> bool {
    field.is_some_and(|f| contains(f, query))
}

/// Every scoring hit of `query` against `doc`, one entry per hit.
///
/// Repeated fields (conflicts, recommendations, parameters) produce one entry
/// per matching element. `query` must already be prepared.
pub fn field_hits(query: &str, doc: &Document) -> Vec<ScoredField> {
    let mut hits = Vec::new();

    let name = doc.name().to_lowercase();
    if name == query {
        hits.push(ScoredField::NameExact);
    } else if name.contains(query) {
        hits.push(ScoredField::Name);
    }

    match doc {
        Document::Catalog(entry) => {
            if contains_opt(entry.assembly_name.as_deref(), query) {
                hits.push(ScoredField::AssemblyName);
            }
            if contains_opt(entry.package_name.as_deref(), query) {
                hits.push(ScoredField::PackageName);
            }
            if contains_opt(entry.version.as_deref(), query) {
                hits.push(ScoredField::Version);
            }
            if contains_opt(entry.parent_collection_id.as_deref(), query) {
                hits.push(ScoredField::ParentCollection);
            }
        }
        Document::Legacy(entry) => {
            if contains_opt(entry.full_name.as_deref(), query) {
                hits.push(ScoredField::FullName);
            }
        }
    }

    if contains(doc.description(), query) {
        hits.push(ScoredField::Description);
    }
    if contains_opt(doc.type_label(), query) {
        hits.push(ScoredField::Type);
    }

    match doc {
        Document::Catalog(entry) => {
            for recommendation in &entry.recommendations {
                if contains(recommendation, query) {
                    hits.push(ScoredField::Recommendation);
                }
            }
            for conflict in &entry.conflicts {
                if contains(&conflict.conflicts_with, query) {
                    hits.push(ScoredField::ConflictTarget);
                }
                if contains(&conflict.reason, query) {
                    hits.push(ScoredField::ConflictReason);
                }
            }
        }
        Document::Legacy(entry) => {
            for param in &entry.parameters {
                if contains(&param.name, query) {
                    hits.push(ScoredField::ParameterName);
                }
                if contains(&param.param_type, query) {
                    hits.push(ScoredField::ParameterType);
                }
            }
        }
    }

    hits
}

/// Total relevance of `doc` for a prepared query.
pub fn score_document(query: &str, doc: &Document) -> u32 {
    field_hits(query, doc).into_iter().map(ScoredField::weight).sum()
}

/// Display fields that contain the query, for highlighting.
///
/// Only name, full name, description and type are reported, even though
/// scoring looks at more fields than that.
pub fn matched_fields(query: &str, doc: &Document) -> BTreeSet<MatchedField> {
    let mut fields = BTreeSet::new();
    if contains(doc.name(), query) {
        fields.insert(MatchedField::Name);
    }
    if contains_opt(doc.full_name(), query) {
        fields.insert(MatchedField::FullName);
    }
    if contains(doc.description(), query) {
        fields.insert(MatchedField::Description);
    }
    if contains_opt(doc.type_label(), query) {
        fields.insert(MatchedField::Type);
    }
    fields
}
