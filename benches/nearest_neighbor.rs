use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nn_tour::constructive::nearest_neighbor;
use nn_tour::models::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_cities(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|id| {
            Point::new(
                id,
                rng.random_range(0.0..50_000.0),
                rng.random_range(0.0..50_000.0),
            )
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbor");
    for &n in &[100usize, 1_000, 2_000] {
        let cities = random_cities(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &cities, |b, cities| {
            b.iter(|| nearest_neighbor(black_box(cities), black_box(0)))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
