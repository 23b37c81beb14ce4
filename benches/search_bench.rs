//! Benchmarks for index construction and query ranking.
//!
//! Simulates catalogs of increasing size:
//! - small:  the bundled sample as shipped (~16 entries)
//! - medium: ~500 synthetic assemblies
//! - large:  ~5000 synthetic assemblies
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use refcat::testing::{make_assembly, SAMPLE_CATALOG};
use refcat::{
    Catalog, CatalogProvider, Collection, CollectionProvider, PrefixIndex, Scope, SearchOptions,
    Searcher,
};

// ============================================================================
// CATALOG SIMULATION
// ============================================================================

const VENDORS: &[&str] = &["Contoso", "Fabrikam", "Northwind", "Tailspin", "Wingtip"];
const AREAS: &[&str] = &["Json", "Logging", "Storage", "Geometry", "Http", "Ui"];

fn synthetic(size: usize) -> Collection {
    let docs = (0..size)
        .map(|i| {
            let vendor = VENDORS[i % VENDORS.len()];
            let area = AREAS[(i / VENDORS.len()) % AREAS.len()];
            make_assembly(
                &format!("pkg-{}", i),
                &format!("{}.{}.{}", vendor, area, i),
                &format!("{}.{}.0.0", i % 9, i % 13),
                &format!("{} helpers for {} add-ins, build {}", area, vendor, i),
            )
        })
        .collect();
    Collection::new(docs).expect("synthetic catalog is valid")
}

fn catalogs() -> Vec<(&'static str, Collection)> {
    let sample = CatalogProvider::new(Catalog::from_json(SAMPLE_CATALOG).expect("sample parses"))
        .expect("sample validates")
        .collection(&Scope::All)
        .expect("all scope");
    vec![
        ("small", sample),
        ("medium", synthetic(500)),
        ("large", synthetic(5000)),
    ]
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    for (name, collection) in catalogs() {
        group.throughput(Throughput::Elements(collection.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &collection, |b, col| {
            b.iter(|| PrefixIndex::build(black_box(col)))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let queries = ["json", "contoso.http", "13.0", "helpers for"];

    for (name, collection) in catalogs() {
        for (policy, options) in [
            ("full", SearchOptions::default()),
            ("capped", SearchOptions::index_capped()),
        ] {
            let mut searcher = Searcher::new(options);
            searcher.rebuild(&collection);
            group.bench_function(BenchmarkId::new(policy, name), |b| {
                b.iter(|| {
                    for query in queries {
                        black_box(searcher.search(black_box(query), &collection));
                    }
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_index_build, bench_search);
criterion_main!(benches);
