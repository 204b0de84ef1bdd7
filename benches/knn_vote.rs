use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kdmap::{Point, SpatialMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const QUERIES: usize = 100;

fn build_map(rng: &mut StdRng, size: usize) -> SpatialMap<f64, u8, 4> {
    let mut map: SpatialMap<f64, u8, 4> = SpatialMap::with_capacity(size);
    for _ in 0..size {
        let point = Point::new(rng.random::<[f64; 4]>());
        map.insert(&point, rng.random_range(0..4u8));
    }
    map
}

pub fn insert_100_4d(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert 100 items into d4 map of increasing size");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(100));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(size as u64);
            let points_to_add: Vec<([f64; 4], u8)> =
                (0..100).map(|_| (rng.random(), rng.random_range(0..4u8))).collect();
            let map = build_map(&mut rng, size);

            b.iter_batched(
                || map.clone(),
                |mut map| {
                    points_to_add.iter().for_each(|(point, label)| {
                        black_box(map.insert(black_box(&Point::new(*point)), *label));
                    });
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
}

pub fn contains_4d(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact lookup in d4 map of increasing size");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(QUERIES as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(size as u64);
            let map = build_map(&mut rng, size);
            let queries: Vec<Point<f64, 4>> =
                (0..QUERIES).map(|_| Point::new(rng.random())).collect();

            b.iter(|| {
                queries
                    .iter()
                    .for_each(|query| {
                        black_box(map.contains(black_box(query)));
                    })
            });
        });
    }
}

pub fn knn_vote_4d(c: &mut Criterion) {
    let mut group = c.benchmark_group("knn_vote(10) on d4 map of increasing size");

    for size in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(QUERIES as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(size as u64);
            let map = build_map(&mut rng, size);
            let queries: Vec<Point<f64, 4>> =
                (0..QUERIES).map(|_| Point::new(rng.random())).collect();

            b.iter(|| {
                queries.iter().for_each(|query| {
                    let _ = black_box(map.knn_vote(black_box(query), 10));
                })
            });
        });
    }
}

criterion_group!(benches, insert_100_4d, contains_4d, knn_vote_4d);
criterion_main!(benches);
