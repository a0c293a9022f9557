use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use forward_list::ForwardList;
use forward_list::util::random_fill;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn random_list(len: usize, seed: u64) -> ForwardList {
    let mut list = ForwardList::new();
    random_fill(&mut list, len, &mut StdRng::seed_from_u64(seed));
    list
}

fn sorted_list(len: usize, seed: u64) -> ForwardList {
    let mut list = random_list(len, seed);
    list.sort();
    list
}

fn sort_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter_batched(
                || random_list(len, 1),
                |mut list| {
                    list.sort();
                    black_box(list)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn merge_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for len in SIZES {
        group.throughput(Throughput::Elements(2 * len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter_batched(
                || (sorted_list(len, 2), sorted_list(len, 3)),
                |(mut list, mut other)| {
                    list.merge(&mut other);
                    black_box(list)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn reverse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    for len in SIZES {
        let mut list = random_list(len, 4);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| black_box(&mut list).reverse());
        });
    }
    group.finish();
}

fn unique_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique");
    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter_batched(
                || sorted_list(len, 5),
                |mut list| black_box(list.unique()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    sort_benchmark,
    merge_benchmark,
    reverse_benchmark,
    unique_benchmark
);
criterion_main!(benches);
