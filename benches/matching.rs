use criterion::*;
use std::hint::black_box;

use archetype_mask::{ArchetypeIndex, MaskFilter};

mod common;
use common::*;

fn matching_benchmark(c: &mut Criterion) {
    let candidates = signatures(CANDIDATES_LARGE, 8);
    let filter = MaskFilter::new()
        .require(3).unwrap()
        .exclude(200).unwrap();

    let mut group = c.benchmark_group("matching");

    group.bench_function("matching_indices_1M", |b| {
        b.iter(|| black_box(filter.matching_indices(black_box(&candidates))).len());
    });

    group.bench_function("archetype_index_build_1K", |b| {
        b.iter_batched(
            || signatures(CANDIDATES_SMALL, 8),
            |batch| {
                let mut index = ArchetypeIndex::new();
                for signature in batch {
                    index.get_or_insert(signature).unwrap();
                }
                black_box(index.len())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, matching_benchmark);
criterion_main!(benches);
