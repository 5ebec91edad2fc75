//! Benchmarks for deferred output resolution.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tramar::Output;

fn bench_map_chain(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let mut group = c.benchmark_group("output_map_chain");
    for depth in [1usize, 16, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                rt.block_on(async {
                    let mut out = Output::ready(0u64);
                    for _ in 0..depth {
                        out = out.map(|v| v + 1);
                    }
                    out.resolve().await.unwrap()
                })
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_map_chain);
criterion_main!(benches);
