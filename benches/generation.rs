//! Performance measurement for tiling and paper generation across densities

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use trill::pattern::paper::generate_paper;
use trill::pattern::tiling::generate_tiling;
use trill::state::settings::{CanvasSpec, TilingParams};

/// Measures tiling generation cost as the dimension grows toward its bound
fn bench_generate_tiling(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_tiling");

    let canvas = CanvasSpec {
        width: 500.0,
        height: 500.0,
        padding: 120.0,
    };

    for dimension in &[4u32, 9, 18, 30] {
        group.bench_with_input(
            BenchmarkId::from_parameter(dimension),
            dimension,
            |b, &dimension| {
                let params = TilingParams {
                    dimension,
                    flip_chance: 50.0,
                };
                let mut rng = StdRng::seed_from_u64(42);

                b.iter(|| black_box(generate_tiling(black_box(&canvas), &params, &mut rng)));
            },
        );
    }

    group.finish();
}

/// Measures paper texture cost for full-bleed drawable areas
fn bench_generate_paper(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_paper");

    for side in &[260.0f64, 500.0, 1000.0] {
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, &side| {
            let canvas = CanvasSpec {
                width: side,
                height: side,
                padding: 0.0,
            };
            let mut rng = StdRng::seed_from_u64(42);

            b.iter(|| black_box(generate_paper(black_box(&canvas), 0.1, &mut rng)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_tiling, bench_generate_paper);
criterion_main!(benches);
