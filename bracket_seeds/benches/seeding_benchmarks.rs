use bracket_seeds::{
    BracketFormat, Rank, SeedShuffler,
    seeding::{buckets, ranks_to_seeds},
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// Ranks for a field where every third participant is unranked
fn mixed_ranks(n: usize) -> Vec<Rank> {
    (0..n)
        .map(|i| {
            if i % 3 == 0 {
                Rank::Unknown
            } else {
                Rank::Known((n - i) as u32)
            }
        })
        .collect()
}

/// Benchmark bucket computation across field sizes
fn bench_buckets(c: &mut Criterion) {
    let mut group = c.benchmark_group("buckets");
    for n in [9, 64, 100, 1000, 4097] {
        group.bench_with_input(BenchmarkId::new("double", n), &n, |b, &n| {
            b.iter(|| buckets(n, BracketFormat::Double));
        });
        group.bench_with_input(BenchmarkId::new("single", n), &n, |b, &n| {
            b.iter(|| buckets(n, BracketFormat::Single));
        });
    }
    group.finish();
}

/// Benchmark placement-preserving shuffles
fn bench_shuffled_seeds(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffled_seeds");
    let mut shuffler = SeedShuffler::from_seed(42);
    for n in [9, 64, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| shuffler.shuffled_seeds(n, BracketFormat::Double));
        });
    }
    group.finish();
}

/// Benchmark rank reconciliation
fn bench_ranks_to_seeds(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranks_to_seeds");
    for n in [16, 256, 4096] {
        let ranks = mixed_ranks(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &ranks, |b, ranks| {
            b.iter(|| ranks_to_seeds(ranks));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_buckets,
    bench_shuffled_seeds,
    bench_ranks_to_seeds
);
criterion_main!(benches);
