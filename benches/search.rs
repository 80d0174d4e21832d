use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gpuplan::planner::{find_optimal_configuration, SearchBounds, WorkloadSpec};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("configuration_search");

    for items in [150u32, 1_500, 15_000].iter() {
        let workload = WorkloadSpec::new(7, *items);
        group.bench_with_input(BenchmarkId::new("find_optimal", items), items, |b, _| {
            b.iter(|| {
                find_optimal_configuration(black_box(30.0), SearchBounds::default(), &workload)
            })
        });
    }

    // An unreachable target defeats every early exit and walks the full grid.
    let workload = WorkloadSpec::new(7, 150);
    group.bench_function("full_grid_worst_case", |b| {
        b.iter(|| {
            find_optimal_configuration(black_box(0.0001), SearchBounds::default(), &workload)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
