use boggle_solver::{optimize, Dictionary, Grid, TilePool};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

const WORDS: &[&str] = &[
    "ate", "east", "eat", "eats", "rate", "rates", "rats", "seat", "set", "setter", "sat",
    "star", "stare", "state", "street", "tar", "tea", "tear", "tears", "tease", "taste", "treat",
];

fn bench_optimize(c: &mut Criterion, name: &str, n: usize, iterations: usize) {
    let dictionary = Dictionary::from_words(WORDS).unwrap();
    let mut rng = StdRng::seed_from_u64(123);
    let grid = Grid::random(n, &TilePool::english(), &mut rng).unwrap();
    c.bench_function(&format!("climb.{}", name), |b| {
        b.iter(|| optimize(&grid, &dictionary, iterations, &mut rng))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_optimize(c, "4x4.100", 4, 100);
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_optimize(c, "5x5.1000", 5, 1000);
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
