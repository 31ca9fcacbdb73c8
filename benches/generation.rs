//! Performance measurement for tile-set generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use hexmatch::algorithm::generator::generate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

/// Measures the cost of drawing one rotation-unique seven-tile set
fn bench_generate_tile_set(c: &mut Criterion) {
    c.bench_function("generate_tile_set", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(generate(&mut rng)));
    });
}

criterion_group!(benches, bench_generate_tile_set);
criterion_main!(benches);
