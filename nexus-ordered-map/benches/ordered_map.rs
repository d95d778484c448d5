//! Benchmarks comparing OrderedMap against std maps.
//!
//! Run with: cargo bench
//!
//! All maps are pre-sized where the type allows it.

use std::collections::{BTreeMap, HashMap};
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nexus_ordered_map::OrderedMap;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const COUNT: usize = 10_000;
const SEED: u64 = 0xDEADBEEF;

fn shuffled_keys(n: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut keys: Vec<u64> = (0..n as u64).collect();
    keys.shuffle(&mut rng);
    keys
}

fn filled(keys: &[u64]) -> OrderedMap<u64, u64> {
    let mut map = OrderedMap::with_capacity(keys.len());
    for &k in keys {
        map.set(k, k);
    }
    map
}

// ============================================================================
// Insert
// ============================================================================

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    group.throughput(Throughput::Elements(COUNT as u64));
    let keys = shuffled_keys(COUNT);

    let mut ordered = OrderedMap::with_capacity(COUNT);
    group.bench_function("ordered-map", |b| {
        b.iter(|| {
            for &k in &keys {
                black_box(ordered.set(k, k));
            }
            ordered.clear();
        });
    });

    let mut btree = BTreeMap::new();
    group.bench_function("btree-map", |b| {
        b.iter(|| {
            for &k in &keys {
                black_box(btree.insert(k, k));
            }
            btree.clear();
        });
    });

    let mut hash = HashMap::with_capacity(COUNT);
    group.bench_function("hash-map", |b| {
        b.iter(|| {
            for &k in &keys {
                black_box(hash.insert(k, k));
            }
            hash.clear();
        });
    });

    group.finish();
}

// ============================================================================
// Lookup
// ============================================================================

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Elements(COUNT as u64));
    let keys = shuffled_keys(COUNT);
    let ordered = filled(&keys);
    let handles: Vec<_> = ordered.handles().collect();

    group.bench_function("by-key", |b| {
        b.iter(|| {
            for k in &keys {
                black_box(ordered.get(k));
            }
        });
    });

    group.bench_function("by-handle", |b| {
        b.iter(|| {
            for &h in &handles {
                black_box(ordered.resolve(h));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Churn: erase a random key, set it again
// ============================================================================

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    group.throughput(Throughput::Elements(COUNT as u64));
    let keys = shuffled_keys(COUNT);

    group.bench_function("erase-set", |b| {
        let mut map = filled(&keys);
        let mut rng = SmallRng::seed_from_u64(SEED);
        b.iter(|| {
            for _ in 0..COUNT {
                let k = keys[rng.gen_range(0..keys.len())];
                black_box(map.erase(&k));
                black_box(map.set(k, k));
            }
        });
    });

    group.bench_function("move-to-back", |b| {
        let mut map = filled(&keys);
        let handles: Vec<_> = map.handles().collect();
        let mut rng = SmallRng::seed_from_u64(SEED);
        b.iter(|| {
            for _ in 0..COUNT {
                let h = handles[rng.gen_range(0..handles.len())];
                black_box(map.move_to_back(h)).ok();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Whole-map operations
// ============================================================================

fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk");

    for n in [100, 1_000, 10_000] {
        let keys = shuffled_keys(n);
        let map = filled(&keys);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("sort_keys", n), &map, |b, map| {
            b.iter_batched(
                || map.clone(),
                |mut m| {
                    m.sort_keys();
                    m
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("iter", n), &map, |b, map| {
            b.iter(|| map.values().fold(0u64, |acc, v| acc.wrapping_add(*v)));
        });

        group.bench_with_input(BenchmarkId::new("at-middle", n), &map, |b, map| {
            b.iter(|| black_box(map.at(n / 2)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set, bench_find, bench_churn, bench_bulk);
criterion_main!(benches);
