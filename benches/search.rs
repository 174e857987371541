//! Search benchmarks over random agree-set families.
//!
//! Run with:
//! ```bash
//! cargo bench --bench search
//! ```

use std::hint::black_box;

use armstrong_rs::attribute::AttributeSet;
use armstrong_rs::search::{find_min_agree_set_graph, SearchConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate a deterministic random family of `count` agree-sets over `width` attributes.
fn random_family(seed: u64, width: usize, count: usize) -> Vec<AttributeSet> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| AttributeSet::from_indices(width, (0..width).filter(|_| rng.random_bool(0.5))))
        .collect()
}

fn bench_random_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("search/random");
    group.sample_size(10);

    for count in [3, 4, 5, 6] {
        let family = random_family(42 + count as u64, 8, count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &family, |b, family| {
            b.iter(|| {
                let config = SearchConfig::default().with_max_steps(1_000_000);
                black_box(find_min_agree_set_graph(family, &config).map(|g| g.num_nodes()).ok())
            });
        });
    }

    group.finish();
}

fn bench_symmetry_pruning(c: &mut Criterion) {
    let mut group = c.benchmark_group("search/symmetry");
    group.sample_size(10);

    let family = random_family(7, 8, 5);
    for pruning in [true, false] {
        group.bench_with_input(BenchmarkId::from_parameter(pruning), &pruning, |b, &pruning| {
            b.iter(|| {
                let config = SearchConfig::default()
                    .with_max_steps(1_000_000)
                    .with_symmetry_pruning(pruning);
                black_box(find_min_agree_set_graph(&family, &config).map(|g| g.num_nodes()).ok())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_families, bench_symmetry_pruning);
criterion_main!(benches);
