//! Criterion benchmarks comparing element-loop and slice-copy block reorders.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scratchpad_bench::{reorder_copy, reorder_naive, ReorderProfile};

/// Smaller than `ReorderProfile::DEFAULT_ELEMS_PER_BLOCK` so a full run stays short.
const ELEMS_PER_BLOCK: u32 = 1024;

/// Largest block count benchmarked.
const MAX_BLOCKS: u32 = 1 << 10;

fn bench_blocked_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("blocked_reorder");
    for num_blocks in ReorderProfile::block_sweep(MAX_BLOCKS) {
        let profile = ReorderProfile {
            num_blocks,
            elems_per_block: ELEMS_PER_BLOCK,
            seed: 42,
        };
        let mut inputs = profile.build().unwrap();
        let bytes = profile.total_elements() * std::mem::size_of::<f32>() as u64;
        group.throughput(Throughput::Bytes(bytes));

        group.bench_with_input(BenchmarkId::new("naive", num_blocks), &num_blocks, |b, _| {
            b.iter(|| {
                reorder_naive(&inputs.src, &mut inputs.dst, &inputs.layout).unwrap();
                black_box(inputs.dst[0]);
            });
        });
        group.bench_with_input(BenchmarkId::new("copy", num_blocks), &num_blocks, |b, _| {
            b.iter(|| {
                reorder_copy(&inputs.src, &mut inputs.dst, &inputs.layout).unwrap();
                black_box(inputs.dst[0]);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_blocked_reorder);
criterion_main!(benches);
