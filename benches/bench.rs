use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use interval_index::{median, AugmentedIntervalTree, Interval, SortedIntervalIndex};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

struct IntervalGenerator {
    rng: StdRng,
    start: i32,
    end: i32,
}

impl IntervalGenerator {
    fn new() -> Self {
        Self {
            rng: StdRng::from_seed([0; 32]),
            start: 0,
            end: 0,
        }
    }

    // non-nesting: starts drift upward, ends strictly increase
    fn next(&mut self) -> Interval<i32> {
        self.start += self.rng.gen_range(0..4);
        self.end = self.end.max(self.start) + self.rng.gen_range(1..8);
        Interval::new(self.start, self.end)
    }

    fn next_query(&mut self, limit: i32) -> (i32, i32) {
        let start = self.rng.gen_range(0..limit);
        let end = self.rng.gen_range(start..limit);
        (start, end)
    }
}

fn sorted_index_add(count: usize, bench: &mut Bencher) {
    let mut gen = IntervalGenerator::new();
    let intervals: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        let mut index = SortedIntervalIndex::new();
        for i in intervals.clone() {
            black_box(index.add(i));
        }
    });
}

fn tree_build(count: usize, bench: &mut Bencher) {
    let mut gen = IntervalGenerator::new();
    let intervals: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    bench.iter(|| {
        black_box(AugmentedIntervalTree::new(
            intervals.clone(),
            median::i32_median,
        ));
    });
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("bench_sorted_index_add_1000", |b| sorted_index_add(1000, b));
    c.bench_function("bench_sorted_index_add_10,000", |b| {
        sorted_index_add(10_000, b)
    });
    c.bench_function("bench_tree_build_1000", |b| tree_build(1000, b));
    c.bench_function("bench_tree_build_10,000", |b| tree_build(10_000, b));
}

fn sorted_index_queries(count: usize, bench: &mut Bencher) {
    let mut gen = IntervalGenerator::new();
    let intervals: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let limit = gen.end + 1;
    let index = SortedIntervalIndex::from_unordered(intervals);
    let queries: Vec<_> = std::iter::repeat_with(|| gen.next_query(limit))
        .take(100)
        .collect();
    bench.iter(|| {
        for (start, end) in &queries {
            black_box(index.between(start, end));
            black_box(index.overlapping(start, end));
            black_box(index.enclosing(start, end));
        }
    });
}

fn tree_queries(count: usize, bench: &mut Bencher) {
    let mut gen = IntervalGenerator::new();
    let intervals: Vec<_> = std::iter::repeat_with(|| gen.next()).take(count).collect();
    let limit = gen.end + 1;
    let tree = AugmentedIntervalTree::new(intervals, median::i32_median);
    let queries: Vec<_> = std::iter::repeat_with(|| gen.next_query(limit))
        .take(100)
        .collect();
    bench.iter(|| {
        for (start, end) in &queries {
            black_box(tree.between(start, end));
            black_box(tree.overlapping(start, end));
            black_box(tree.enclosing(start, end));
        }
    });
}

fn bench_queries(c: &mut Criterion) {
    c.bench_function("bench_sorted_index_queries_1000", |b| {
        sorted_index_queries(1000, b)
    });
    c.bench_function("bench_sorted_index_queries_10,000", |b| {
        sorted_index_queries(10_000, b)
    });
    c.bench_function("bench_tree_queries_1000", |b| tree_queries(1000, b));
    c.bench_function("bench_tree_queries_10,000", |b| tree_queries(10_000, b));
}

fn criterion_config() -> Criterion {
    Criterion::default().configure_from_args().without_plots()
}

criterion_group! {
    name = benches_construction;
    config = criterion_config();
    targets = bench_construction,
}

criterion_group! {
    name = benches_queries;
    config = criterion_config();
    targets = bench_queries,
}

criterion_main!(benches_construction, benches_queries);
