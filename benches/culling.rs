//! Benchmarks comparing SIMD vs scalar sphere culling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use intersectum::bounds::{Plane, Sphere};
use intersectum::intersection::{above_plane, intersects_plane_sphere};
use intersectum::simd::{spheres_above_plane, spheres_intersecting_plane};
use intersectum::{Point3, Vec3};

/// Generates random spheres for benchmarking.
fn generate_spheres(count: usize, seed: u64) -> Vec<Sphere<f32>> {
    let mut spheres = Vec::with_capacity(count);
    let mut state = seed;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state as f32 / u64::MAX as f32) * 100.0
    };

    for _ in 0..count {
        let center = Point3::new(next(), next(), next());
        let radius = next() * 0.05 + 0.01;
        spheres.push(Sphere::new(center, radius).unwrap());
    }

    spheres
}

fn bench_above_plane(c: &mut Criterion) {
    let mut group = c.benchmark_group("above_plane");
    let plane = Plane::new(Vec3::unit_y(), 50.0f32);

    for count in [100, 1000, 10000, 100000] {
        let spheres = generate_spheres(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        // Scalar implementation
        group.bench_with_input(BenchmarkId::new("scalar", count), &spheres, |b, ss| {
            b.iter(|| {
                (0..ss.len())
                    .filter(|&i| above_plane(black_box(&plane), &ss[i]))
                    .collect::<Vec<_>>()
            })
        });

        // SIMD implementation
        group.bench_with_input(BenchmarkId::new("simd", count), &spheres, |b, ss| {
            b.iter(|| spheres_above_plane(black_box(ss), black_box(&plane)))
        });
    }

    group.finish();
}

fn bench_intersecting_plane(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersecting_plane");
    let normal = Vec3::new(1.0f32, 2.0, 3.0).normalize().unwrap();
    let plane = Plane::new(normal, 100.0);

    for count in [100, 1000, 10000, 100000] {
        let spheres = generate_spheres(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("scalar", count), &spheres, |b, ss| {
            b.iter(|| {
                (0..ss.len())
                    .filter(|&i| intersects_plane_sphere(black_box(&plane), &ss[i]))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("simd", count), &spheres, |b, ss| {
            b.iter(|| spheres_intersecting_plane(black_box(ss), black_box(&plane)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_above_plane, bench_intersecting_plane);
criterion_main!(benches);
