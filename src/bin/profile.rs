//! Drives every counter over a seeded workload. Build with
//! `--features hotpath` to get a per-function timing report.

use bitcount::{active_strategy, count, count_bounded, cpu, Counter, Software};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::hint::black_box;

const NUM_BOARDS: usize = 1 << 16;
const ROUNDS: usize = 64;

fn workload(seed: u64) -> (Vec<u64>, Vec<u64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let dense: Vec<u64> = (0..NUM_BOARDS).map(|_| rng.next_u64()).collect();
    // AND-ing four words leaves about 4 bits set; the rare outlier is cut
    // down to 15 squares so every board suits the bounded counter.
    let sparse = dense
        .iter()
        .map(|&b| b & rng.next_u64() & rng.next_u64() & rng.next_u64())
        .map(|b| if b.count_ones() > 15 { b & 0x7FFF } else { b })
        .collect();
    (dense, sparse)
}

#[hotpath::measure]
fn run_free_functions(dense: &[u64], sparse: &[u64]) -> u64 {
    let mut total = 0u64;
    for _ in 0..ROUNDS {
        total += dense.iter().map(|&b| count(black_box(b)) as u64).sum::<u64>();
        total += sparse.iter().map(|&b| count_bounded(black_box(b)) as u64).sum::<u64>();
    }
    total
}

#[hotpath::measure]
fn run_counter(counter: &Counter, dense: &[u64], sparse: &[u64]) -> u64 {
    let mut total = 0u64;
    for _ in 0..ROUNDS {
        total += dense.iter().map(|&b| counter.count(black_box(b)) as u64).sum::<u64>();
        total += sparse.iter().map(|&b| counter.count_bounded(black_box(b)) as u64).sum::<u64>();
    }
    total
}

#[hotpath::main]
fn main() {
    println!("popcnt detected: {}", cpu::has_popcnt());
    println!("active strategy: {}", active_strategy());
    println!("software default: {}", Software::DEFAULT);

    let (dense, sparse) = workload(42);

    let expected = run_free_functions(&dense, &sparse);
    println!("{:>12}: {}", "free", expected);

    let mut counters = vec![Counter::detect()];
    counters.extend(Software::ALL.iter().map(|&algo| Counter::software(algo)));
    for counter in &counters {
        let total = run_counter(counter, &dense, &sparse);
        println!("{:>12}: {}", counter.strategy(), total);
        if total != expected {
            eprintln!("{} disagrees with the free functions", counter.strategy());
            std::process::exit(1);
        }
    }
}
