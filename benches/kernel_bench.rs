use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wsum_bench::config::{DEFAULT_RANGE1, DEFAULT_RANGE2, DEFAULT_WA, DEFAULT_WB};
use wsum_bench::inputs::{generate_array, rng_from_seed};
use wsum_bench::kernel::{weighted_add, KernelKind};

fn bench_weighted_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_add");
    // Lengths off the lane boundary exercise the scalar tail too.
    for &n in &[1_024i64, 65_537, 1_000_003] {
        let mut rng = rng_from_seed(0x1234_5678_9abc_def0);
        let a = generate_array(&mut rng, n, DEFAULT_RANGE1).unwrap();
        let b = generate_array(&mut rng, n, DEFAULT_RANGE2).unwrap();
        group.throughput(Throughput::Elements(n as u64));
        for kind in KernelKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.label(), n), &n, |ben, _| {
                ben.iter(|| {
                    let r = weighted_add(kind, black_box(&a), DEFAULT_WA, black_box(&b), DEFAULT_WB).unwrap();
                    black_box(r)
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_weighted_add);
criterion_main!(benches);
