// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the refcat command-line interface.
//!
//! Three subcommands: `search` to rank a catalog scope against a query,
//! `show` to print one entry's detail pane, and `inspect` to summarize a
//! catalog file and the indexes built over it.

pub mod display;

use clap::{Parser, Subcommand};
use refcat::{CandidatePolicy, Scope, SearchOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "refcat",
    about = "Search and browse a static assembly reference catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog entries against a query
    Search {
        /// Path to catalog JSON file
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Scope to search: "all", "reference", or a release id
        #[arg(short, long, default_value = "all")]
        scope: Scope,

        /// Maximum number of results to return
        #[arg(short, long, env = "REFCAT_LIMIT", default_value_t = refcat::DEFAULT_LIMIT)]
        limit: usize,

        /// Only score the first N index candidates instead of the whole scope
        ///
        /// Faster on very large catalogs, but a strong match that sits late in
        /// the catalog can be missed.
        #[arg(long, env = "REFCAT_INDEX_CAP")]
        index_cap: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Select the N-th result (1-based) and print its detail pane
        #[arg(long)]
        pick: Option<usize>,
    },

    /// Show the detail pane for one entry
    Show {
        /// Path to catalog JSON file
        catalog: PathBuf,

        /// Entry id
        id: String,

        /// Scope to look in
        #[arg(short, long, default_value = "all")]
        scope: Scope,
    },

    /// Summarize a catalog: releases, entry counts, index statistics
    Inspect {
        /// Path to catalog JSON file
        catalog: PathBuf,
    },
}

/// Build ranking options from the search flags.
pub fn search_options(limit: usize, index_cap: Option<usize>) -> SearchOptions {
    let candidates = match index_cap {
        Some(cap) => CandidatePolicy::IndexCapped(cap),
        None => CandidatePolicy::FullCollection,
    };
    SearchOptions::default()
        .with_limit(limit)
        .with_candidates(candidates)
}
