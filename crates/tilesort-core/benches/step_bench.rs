//! Benchmarks for running sort machines to completion.
//!
//! Run with: cargo bench -p tilesort-core

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tilesort_core::{Algorithm, Sequence, SortState, Xorshift64};

fn shuffled(len: u32) -> Sequence {
    let mut seq = Sequence::from_keys(1..=len);
    Xorshift64::new(0xC0FFEE).shuffle(&mut seq);
    seq
}

fn bench_run_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("step/run_to_end");

    for len in [8u32, 64, 256] {
        let input = shuffled(len);
        group.throughput(Throughput::Elements(u64::from(len)));
        for alg in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(alg.slug(), len), &input, |b, input| {
                b.iter(|| {
                    let mut seq = input.clone();
                    let mut state = SortState::new(alg, &seq);
                    black_box(state.run_to_end(&mut seq))
                })
            });
        }
    }

    group.finish();
}

fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step/single");
    let input = shuffled(256);

    for alg in Algorithm::ALL {
        group.bench_function(alg.slug(), |b| {
            let mut seq = input.clone();
            let mut state = SortState::new(alg, &seq);
            b.iter(|| {
                if state.is_done() {
                    seq = input.clone();
                    state = SortState::new(alg, &seq);
                }
                black_box(state.step(&mut seq))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_run_to_end, bench_single_step);

criterion_main!(benches);
