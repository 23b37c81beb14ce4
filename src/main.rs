// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use refcat::{
    CatalogEntry, CatalogProvider, CollectionProvider, Document, LegacyEntry, PrefixIndex,
    ResultCursor, Scope, SearchResult, Searcher,
};

mod cli;
use cli::display::*;
use cli::{search_options, Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            catalog,
            query,
            scope,
            limit,
            index_cap,
            json,
            pick,
        } => run_search(&catalog, &query, &scope, limit, index_cap, json, pick),
        Commands::Show { catalog, id, scope } => run_show(&catalog, &id, &scope),
        Commands::Inspect { catalog } => run_inspect(&catalog),
    };

    if let Err(e) = outcome {
        eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(path: &Path) -> Result<CatalogProvider> {
    CatalogProvider::load(path).with_context(|| format!("cannot use catalog {}", path.display()))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

#[allow(clippy::too_many_arguments)]
fn run_search(
    catalog: &Path,
    query: &str,
    scope: &Scope,
    limit: usize,
    index_cap: Option<usize>,
    json: bool,
    pick: Option<usize>,
) -> Result<()> {
    let provider = load(catalog)?;
    let collection = provider.collection(scope)?;
    let mut searcher = Searcher::new(search_options(limit, index_cap));
    let results = searcher.search(query, &collection);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(query, scope, &results);
    }

    if let Some(n) = pick {
        let mut cursor = ResultCursor::new(&results);
        if n == 0 || !cursor.jump(n - 1) {
            bail!("--pick {} is out of range ({} results)", n, results.len());
        }
        cursor.select(&mut |doc: &Document| print_detail(doc));
    }
    Ok(())
}

fn print_results(query: &str, scope: &Scope, results: &[SearchResult<'_>]) {
    section_top(&format!("\"{}\" in {}", truncate(query, 40), scope));
    if results.is_empty() {
        row(&themed(GRAY, &[], "no results"));
        section_bot();
        return;
    }

    row(&themed(
        GRAY,
        &[DIM],
        &format!("{:>3}  {:>5}  {:<24}  {:<28}  {}", "#", "SCORE", "ID", "NAME", "MATCHED"),
    ));
    for (i, result) in results.iter().enumerate() {
        let doc = result.document;
        row(&format!(
            "{:>3}  {}  {}  {}  {}",
            i + 1,
            score_value(result.score),
            pad_right(&themed(GRAY, &[], &truncate(doc.id(), 24)), 24),
            pad_right(&themed(BLUE, &[BOLD], &truncate(doc.name(), 28)), 28),
            matched_label(&result.matched_fields),
        ));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// DETAIL PANE
// ═══════════════════════════════════════════════════════════════════════════

fn run_show(catalog: &Path, id: &str, scope: &Scope) -> Result<()> {
    let provider = load(catalog)?;
    print_detail(provider.find(scope, id)?);
    Ok(())
}

fn field(label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        row(&format!("{}  {}", pad_right(&themed(GRAY, &[], label), 12), value));
    }
}

fn print_detail(doc: &Document) {
    section_top(doc.name());
    field("id", Some(doc.id()));
    match doc {
        Document::Catalog(entry) => print_catalog_entry(entry),
        Document::Legacy(entry) => print_legacy_entry(entry),
    }
    section_bot();
}

fn print_catalog_entry(entry: &CatalogEntry) {
    if let Some(entry_type) = entry.entry_type {
        row(&format!("{}  {}", pad_right(&themed(GRAY, &[], "type"), 12), type_badge(entry_type)));
    }
    field("assembly", entry.assembly_name.as_deref());
    field("version", entry.version.as_deref());
    field("token", entry.public_key_token.as_deref());
    let package = entry.package_name.as_deref().map(|name| match &entry.package_version {
        Some(version) => format!("{} {}", name, version),
        None => name.to_string(),
    });
    field("package", package.as_deref());
    field("location", entry.location.as_deref());
    field("release", entry.parent_collection_id.as_deref());

    section_mid("DESCRIPTION");
    rows_wrapped(&entry.description, 0);

    if !entry.conflicts.is_empty() {
        section_mid("CONFLICTS");
        for conflict in &entry.conflicts {
            row(&format!(
                "{} {}",
                severity_badge(conflict.severity),
                themed(BLUE, &[BOLD], &conflict.conflicts_with)
            ));
            rows_wrapped(&conflict.reason, 2);
            if let Some(solution) = &conflict.solution {
                rows_wrapped(&format!("fix: {}", solution), 2);
            }
        }
    }

    if !entry.recommendations.is_empty() {
        section_mid("RECOMMENDATIONS");
        for recommendation in &entry.recommendations {
            rows_wrapped(&format!("- {}", recommendation), 0);
        }
    }

    if !entry.referenced_entries.is_empty() {
        section_mid("REFERENCES");
        for reference in &entry.referenced_entries {
            let token = reference
                .public_key_token
                .as_deref()
                .map(|t| format!("  {}", themed(GRAY, &[], t)))
                .unwrap_or_default();
            row(&format!("{} {}{}", reference.name, reference.version, token));
        }
    }
}

fn print_legacy_entry(entry: &LegacyEntry) {
    field("kind", entry.kind.as_deref());
    field("full name", entry.full_name.as_deref());
    field("returns", entry.return_type.as_deref());
    field("since", entry.since.as_deref());
    if entry.deprecated {
        row(&themed(YELLOW, &[BOLD], "deprecated"));
    }

    section_mid("DESCRIPTION");
    rows_wrapped(&entry.description, 0);

    if let Some(syntax) = &entry.syntax {
        section_mid("SYNTAX");
        row(&themed(GREEN, &[], syntax));
    }

    if !entry.parameters.is_empty() {
        section_mid("PARAMETERS");
        for param in &entry.parameters {
            let optional = if param.optional { " (optional)" } else { "" };
            row(&format!(
                "{} {}{}",
                themed(BLUE, &[BOLD], &param.name),
                themed(MAGENTA, &[], &param.param_type),
                themed(GRAY, &[], optional)
            ));
            rows_wrapped(&param.description, 2);
            if let Some(default) = &param.default_value {
                row(&format!("  default: {}", default));
            }
        }
    }

    for example in &entry.examples {
        section_mid(&format!("EXAMPLE: {}", example.title));
        if let Some(description) = &example.description {
            rows_wrapped(description, 0);
        }
        for line in example.code.lines() {
            row(&themed(GREEN, &[], &truncate(line, BOX_WIDTH - 4)));
        }
    }

    if !entry.children.is_empty() {
        section_mid("CHILDREN");
        rows_wrapped(&entry.children.join(", "), 0);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(catalog: &Path) -> Result<()> {
    let provider = load(catalog)?;

    section_top("RELEASES");
    if provider.catalog().releases.is_empty() {
        row(&themed(GRAY, &[], "none"));
    }
    for release in &provider.catalog().releases {
        let date = release.release_date.as_deref().unwrap_or("-");
        row(&format!(
            "{}  {}  {:>4} entries  {}",
            pad_right(&themed(BLUE, &[BOLD], &release.id), 10),
            pad_right(&release.name, 28),
            release.entries.len(),
            themed(GRAY, &[], date)
        ));
    }

    section_mid("INDEXES");
    row(&themed(
        GRAY,
        &[DIM],
        &format!(
            "{:<16}  {:>9}  {:>10}  {:>8}  {}",
            "SCOPE", "DOCUMENTS", "VOCABULARY", "POSTINGS", "FINGERPRINT"
        ),
    ));
    for scope in provider.catalog().scopes() {
        let collection = provider.collection(&scope)?;
        let stats = PrefixIndex::build(&collection).stats();
        row(&format!(
            "{:<16}  {:>9}  {:>10}  {:>8}  {}",
            truncate(&scope.to_string(), 16),
            stats.documents,
            stats.vocabulary,
            stats.postings,
            themed(GRAY, &[], &format!("{:016x}", collection.fingerprint()))
        ));
    }
    section_bot();
    Ok(())
}
