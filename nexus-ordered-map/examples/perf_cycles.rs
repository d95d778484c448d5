//! Per-operation latency of OrderedMap against BTreeMap.
//!
//! Uses a random access pattern with a fixed seed for reproducibility.
//! Timings come from `Instant`, so absolute numbers include timer overhead;
//! compare the two columns, not the raw values.
//!
//! Run with:
//!   cargo build --release --example perf_cycles
//!   taskset -c 0 ./target/release/examples/perf_cycles

use std::collections::BTreeMap;
use std::hint::black_box;
use std::time::Instant;

use hdrhistogram::Histogram;
use nexus_ordered_map::OrderedMap;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const CAPACITY: usize = 100_000;
const OPS: usize = 1_000_000;
const SEED: u64 = 0xDEADBEEF;

fn print_stats(name: &str, hist: &Histogram<u64>) {
    println!("{}", name);
    println!("  min:  {:>6} ns", hist.min());
    println!("  p50:  {:>6} ns", hist.value_at_quantile(0.50));
    println!("  p99:  {:>6} ns", hist.value_at_quantile(0.99));
    println!("  p999: {:>6} ns", hist.value_at_quantile(0.999));
    println!("  max:  {:>6} ns", hist.max());
    println!("  avg:  {:>6.0} ns", hist.mean());
}

fn timed<F: FnMut()>(hist: &mut Histogram<u64>, mut f: F) {
    let start = Instant::now();
    f();
    let _ = hist.record(start.elapsed().as_nanos() as u64);
}

fn bench_ordered_map() -> (Histogram<u64>, Histogram<u64>) {
    let mut map = OrderedMap::with_capacity(CAPACITY);
    for i in 0..CAPACITY as u64 {
        map.set(i, i);
    }
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut get = Histogram::<u64>::new(3).unwrap();
    let mut churn = Histogram::<u64>::new(3).unwrap();

    for _ in 0..OPS {
        let k = rng.gen_range(0..CAPACITY as u64);
        timed(&mut get, || {
            black_box(map.get(&k));
        });
        timed(&mut churn, || {
            black_box(map.erase(&k));
            black_box(map.set(k, k));
        });
    }

    (get, churn)
}

fn bench_btree_map() -> (Histogram<u64>, Histogram<u64>) {
    let mut map = BTreeMap::new();
    for i in 0..CAPACITY as u64 {
        map.insert(i, i);
    }
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut get = Histogram::<u64>::new(3).unwrap();
    let mut churn = Histogram::<u64>::new(3).unwrap();

    for _ in 0..OPS {
        let k = rng.gen_range(0..CAPACITY as u64);
        timed(&mut get, || {
            black_box(map.get(&k));
        });
        timed(&mut churn, || {
            black_box(map.remove(&k));
            black_box(map.insert(k, k));
        });
    }

    (get, churn)
}

fn main() {
    println!("GET / CHURN latency ({} ops over {} keys)", OPS, CAPACITY);
    println!("========================================");
    println!();

    let (ordered_get, ordered_churn) = bench_ordered_map();
    let (btree_get, btree_churn) = bench_btree_map();

    print_stats("ordered-map get:", &ordered_get);
    println!();
    print_stats("btree-map get:", &btree_get);
    println!();
    print_stats("ordered-map erase+set:", &ordered_churn);
    println!();
    print_stats("btree-map remove+insert:", &btree_churn);
}
