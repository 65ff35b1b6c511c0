//! Criterion benchmarks for the hull and half-plane lessons.
//! Focus sizes: n in {12, 100, 1000} points.

use blackboard::api::{draw_point_cloud, graham_scan, CloudCfg, Region, ReplayToken};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom2");
    for &n in &[12usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("graham_scan", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    draw_point_cloud(
                        CloudCfg {
                            count: n,
                            radius: 5.0,
                        },
                        ReplayToken { seed: 43, index: 0 },
                    )
                },
                |points| {
                    let _trace = graham_scan(&points).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("region_shape", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let points = draw_point_cloud(
                        CloudCfg {
                            count: n,
                            radius: 5.0,
                        },
                        ReplayToken { seed: 44, index: 0 },
                    );
                    let trace = graham_scan(&points).unwrap();
                    let hull: Vec<_> = trace.hull.iter().map(|&i| points[i]).collect();
                    Region::from_convex_polygon(&hull).unwrap()
                },
                |region| {
                    let _shape = region.shape();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
