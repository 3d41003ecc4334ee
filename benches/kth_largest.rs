//! Streams random values through the heap-based `KthLargest` and the `SimpleKthLargest` baseline
//! that re-sorts the whole history on every `add`.

use rand::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use simple_kth::SimpleKthLargest;

use sorted_collections::KthLargest;

/// Deterministically generates `len` values with plenty of duplicates
fn generate_stream(len: usize) -> Vec<i32> {
    // Use seed to make this deterministic
    let mut rng = StdRng::seed_from_u64(45930923092);
    (0..len).map(|_| rng.gen_range(-1000..=1000)).collect()
}

pub fn bench_stream_length(c: &mut Criterion) {
    const K: usize = 10;
    const LENGTHS: &[usize] = &[100, 500, 1000, 2000];

    let mut group = c.benchmark_group("kth largest stream length");
    for &len in LENGTHS {
        let stream = generate_stream(len);
        let (initial, rest) = stream.split_at(K);

        group.bench_with_input(BenchmarkId::new("SimpleKthLargest", len), &len, |b, _| {
            b.iter(|| {
                let mut tracker = SimpleKthLargest::new(K, initial.to_vec());
                for &value in rest {
                    black_box(tracker.add(value));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("KthLargest", len), &len, |b, _| {
            b.iter(|| {
                let mut tracker = KthLargest::new(K, initial.iter().copied());
                for &value in rest {
                    black_box(tracker.add(value));
                }
            })
        });
    }
    group.finish();
}

pub fn bench_rank(c: &mut Criterion) {
    const LEN: usize = 10_000;
    const RANKS: &[usize] = &[1, 10, 100, 1000];

    let stream = generate_stream(LEN);

    let mut group = c.benchmark_group("kth largest rank");
    for &k in RANKS {
        let (initial, rest) = stream.split_at(k);

        group.bench_with_input(BenchmarkId::new("KthLargest", k), &k, |b, &k| {
            b.iter(|| {
                let mut tracker = KthLargest::new(k, initial.iter().copied());
                for &value in rest {
                    black_box(tracker.add(value));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches,
    bench_stream_length,
    bench_rank,
);

criterion_main!(benches);
