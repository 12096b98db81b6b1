use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use swept_collide::core::math::Vector2;
use swept_collide::shapes::{Polygon, Pose};
use swept_collide::sweep::{circle_hits_polygon, polygons_collide, ray_hits_polygon};
mod test_polygons;
use test_polygons::*;

fn bench_contains(b: &mut Bencher, polygon: &Polygon<f64>, point: Vector2<f64>) {
    b.iter(|| {
        polygon.contains(point);
    })
}

fn bench_convex_contains(b: &mut Bencher, polygon: &Polygon<f64>, point: Vector2<f64>) {
    b.iter(|| {
        polygon.convex_contains(point);
    })
}

fn contains_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    let point = Vector2::new(0.25, 0.1);
    let vertex_counts = &[8, 64, 512];
    for &i in vertex_counts {
        group.bench_with_input(BenchmarkId::new("star_contains", i), &i, |b, i| {
            bench_contains(b, &create_star_polygon(*i, 10.0, 4.0), point)
        });
        group.bench_with_input(BenchmarkId::new("regular_contains", i), &i, |b, i| {
            bench_contains(b, &create_regular_polygon(*i, 10.0), point)
        });
        group.bench_with_input(BenchmarkId::new("regular_convex_contains", i), &i, |b, i| {
            bench_convex_contains(b, &create_regular_polygon(*i, 10.0), point)
        });
    }

    group.finish();
}

fn bench_ray_hits_polygon(b: &mut Bencher, polygon: &Polygon<f64>) {
    let start = Vector2::new(-25.0, 0.1);
    let delta = Vector2::new(50.0, 0.0);
    b.iter(|| {
        ray_hits_polygon(polygon, start, delta);
    })
}

fn ray_hits_polygon_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("ray_hits_polygon");
    let vertex_counts = &[8, 64, 512];
    for &i in vertex_counts {
        group.bench_with_input(BenchmarkId::new("star_ray", i), &i, |b, i| {
            bench_ray_hits_polygon(b, &create_star_polygon(*i, 10.0, 4.0))
        });
    }

    group.finish();
}

fn bench_circle_hits_polygon(b: &mut Bencher, polygon: &Polygon<f64>) {
    let start = Vector2::new(-25.0, 0.1);
    let delta = Vector2::new(50.0, 0.0);
    b.iter(|| {
        circle_hits_polygon(polygon, 1.0, start, delta);
    })
}

fn circle_hits_polygon_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_hits_polygon");
    let vertex_counts = &[8, 64, 512];
    for &i in vertex_counts {
        group.bench_with_input(BenchmarkId::new("star_circle", i), &i, |b, i| {
            bench_circle_hits_polygon(b, &create_star_polygon(*i, 10.0, 4.0))
        });
    }

    group.finish();
}

fn bench_polygons_collide(b: &mut Bencher, moving: &Polygon<f64>, stationary: &Polygon<f64>) {
    let moving_pose = Pose::new(Vector2::new(-25.0, 0.0), 0.3);
    let delta = Vector2::new(50.0, 0.0);
    b.iter(|| {
        polygons_collide(moving, moving_pose, stationary, Pose::identity(), delta);
    })
}

fn polygons_collide_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygons_collide");
    let vertex_counts = &[4, 16, 64];
    for &i in vertex_counts {
        group.bench_with_input(BenchmarkId::new("regular_pair", i), &i, |b, i| {
            let polygon = create_regular_polygon(*i, 10.0);
            bench_polygons_collide(b, &polygon, &polygon)
        });
    }

    group.finish();
}

criterion_group!(
    collision_benches,
    contains_group,
    ray_hits_polygon_group,
    circle_hits_polygon_group,
    polygons_collide_group,
);
criterion_main!(collision_benches);
