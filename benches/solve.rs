//! Performance measurement for the backtracking search across generated sets

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use hexmatch::algorithm::generator::generate;
use hexmatch::algorithm::solver::is_solvable;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

/// Measures search cost over a fixed batch of seeded sets, mixing solvable
/// and unsolvable instances
fn bench_solve_generated_sets(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let Ok(sets) = (0..16)
        .map(|_| generate(&mut rng))
        .collect::<Result<Vec<_>, _>>()
    else {
        return;
    };

    c.bench_function("solve_generated_sets", |b| {
        b.iter(|| {
            for set in &sets {
                black_box(is_solvable(black_box(set)));
            }
        });
    });
}

criterion_group!(benches, bench_solve_generated_sets);
criterion_main!(benches);
