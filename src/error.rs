// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a catalog.
///
/// Searching itself never fails: a blank query or a query with no hits is an
/// empty result list, not an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("document '{id}' has an empty name")]
    MissingName { id: String },

    #[error("document '{id}' has an empty description")]
    MissingDescription { id: String },

    #[error("duplicate document id '{id}' (positions {first} and {second})")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error("unknown scope '{0}'")]
    UnknownScope(String),

    #[error("no document with id '{0}'")]
    UnknownDocument(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
