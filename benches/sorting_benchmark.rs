use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use keysort::data;
use keysort::prelude::*;
use std::hint::black_box;

fn bench_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("Keyed Record Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let codes = data::generate_codes(50, &mut rng);
    let population = data::generate_records(&codes, 10_000, &mut rng);

    // Bucket engine
    group.bench_function("keysort", |b| {
        b.iter(|| sort(black_box(&population)))
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort_by_key (stable)", |b| {
        b.iter_batched(
            || population.clone(),
            |mut data| data.sort_by_key(|r| r.code),
            BatchSize::SmallInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable_by_key", |b| {
        b.iter_batched(
            || population.clone(),
            |mut data| data.sort_unstable_by_key(|r| r.code),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_domain_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("Key Domain Width");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;

    for width in [2, 8, 50, 256, data::MAX_CODES] {
        let codes = data::generate_codes(width, &mut rng);
        let population = data::generate_records(&codes, count, &mut rng);

        group.bench_with_input(
            BenchmarkId::from_parameter(width),
            &population,
            |b, population| {
                b.iter(|| sort(black_box(population)))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_records, bench_domain_width);
criterion_main!(benches);
