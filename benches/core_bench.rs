use bezier_spline_tool::shared::render_curve;
use bezier_spline_tool::Curve;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn build_synthetic_curve(node_count: usize) -> Curve {
    let mut curve = Curve::new();

    for index in 0..node_count {
        let column = (index % 100) as f32;
        let row = (index / 100) as f32;
        curve.append(Vec2::new(column * 25.0, row * 25.0), 50.0);
    }

    curve
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 100) as f32 * 25.0 + 3.7;
            let y = ((i * 7) % 100) as f32 * 25.0 + 6.3;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");

    for &node_count in &[10usize, 100usize, 1_000usize] {
        let curve = build_synthetic_curve(node_count);

        group.bench_with_input(
            BenchmarkId::new("render_curve_200", node_count),
            &curve,
            |b, curve| {
                b.iter(|| {
                    let strips = render_curve(black_box(curve), 200);
                    black_box(strips.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_hit_tests(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_tests");

    for &node_count in &[100usize, 1_000usize, 10_000usize] {
        let curve = build_synthetic_curve(node_count);
        let query_points = build_query_points(256);

        group.bench_with_input(
            BenchmarkId::new("closest_node_batch", node_count),
            &curve,
            |b, curve| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if curve.find_closest_node(black_box(*point)).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("slot_occupied_batch", node_count),
            &curve,
            |b, curve| {
                b.iter(|| {
                    let mut occupied = 0usize;
                    for point in &query_points {
                        if curve.is_slot_occupied(black_box(*point), 10.0) {
                            occupied += 1;
                        }
                    }
                    black_box(occupied)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_curve_sampling, bench_hit_tests);
criterion_main!(benches);
