//! Galaxy generation throughput, serial against rayon.
//!
//! Run with: `cargo bench -p galaxy_generator`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use galaxy_generator::{GalaxyParameters, generate, generate_parallel};
use rand::{SeedableRng, rngs::StdRng};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for count in [500u32, 10_000, 50_000] {
        let params = GalaxyParameters {
            count,
            ..GalaxyParameters::default()
        };

        group.bench_with_input(BenchmarkId::new("serial", count), &params, |b, params| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| black_box(generate(params, &mut rng)))
        });

        group.bench_with_input(BenchmarkId::new("parallel", count), &params, |b, params| {
            b.iter(|| black_box(generate_parallel(params)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
