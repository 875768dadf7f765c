use criterion::*;
use std::hint::black_box;

mod common;
use common::*;

fn relations_benchmark(c: &mut Criterion) {
    let candidates = signatures(CANDIDATES_SMALL, 12);
    let probe = signatures(1, 3)[0];

    let mut group = c.benchmark_group("relations");

    group.bench_function("is_superset_of_1K", |b| {
        b.iter(|| {
            candidates
                .iter()
                .filter(|signature| signature.is_superset_of(black_box(&probe)))
                .count()
        });
    });

    group.bench_function("is_disjoint_from_1K", |b| {
        b.iter(|| {
            candidates
                .iter()
                .filter(|signature| signature.is_disjoint_from(black_box(&probe)))
                .count()
        });
    });

    group.bench_function("test_every_bit", |b| {
        let signature = candidates[0];
        b.iter(|| {
            (0..archetype_mask::TOTAL_BITS)
                .filter(|&i| black_box(&signature).test(i).unwrap_or(false))
                .count()
        });
    });

    group.finish();
}

criterion_group!(benches, relations_benchmark);
criterion_main!(benches);
