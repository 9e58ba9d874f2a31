use criterion::{criterion_group, criterion_main, Criterion};
use backrooms_maze::{generators, GridDimensions};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let dims = GridDimensions::new(32, 32).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(32);

    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::recursive_backtracker(dims, &mut rng).unwrap())
    });
}

fn bench_recursive_backtracker_maze_500(c: &mut Criterion) {
    let dims = GridDimensions::new(500, 500).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(500);

    c.bench_function("recursive_backtracker_maze_500", move |b| {
        b.iter(|| generators::recursive_backtracker(dims, &mut rng).unwrap())
    });
}

fn bench_seeded_maze_128(c: &mut Criterion) {
    c.bench_function("seeded_maze_128", |b| {
        b.iter(|| generators::generate_seeded(128, 128, 0xBAC).unwrap())
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_500,
    bench_seeded_maze_128
);
criterion_main!(benches);
