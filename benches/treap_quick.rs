// Quick treap benchmark - per-call timings for insert/exist/predecessor/delete

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use treap::Treap;

fn main() {
    let n: usize = 100_000;
    let mut rng = StdRng::seed_from_u64(7);

    let mut keys: Vec<u64> = (0..n as u64).collect();
    keys.shuffle(&mut rng);

    println!("Building treap with {} keys...", n);
    let mut treap = Treap::with_seed(7);

    let start = Instant::now();
    for &k in &keys {
        treap.insert(k);
    }
    let insert_time = start.elapsed();
    println!("\n=== insert benchmark ===");
    println!("  {} inserts: {:?}", n, insert_time);
    println!("  per call: {:?}", insert_time / n as u32);

    println!("\n=== exist benchmark ===");
    let probes: Vec<u64> = (0..n).map(|_| rng.gen_range(0..2 * n as u64)).collect();
    let start = Instant::now();
    let mut hits = 0usize;
    for probe in &probes {
        if treap.exist(probe) {
            hits += 1;
        }
    }
    let exist_time = start.elapsed();
    println!("  {} probes ({} hits): {:?}", n, hits, exist_time);
    println!("  per call: {:?}", exist_time / n as u32);

    println!("\n=== search_max_le benchmark ===");
    let start = Instant::now();
    let mut found = 0usize;
    for probe in &probes {
        if treap.search_max_le(probe).is_some() {
            found += 1;
        }
    }
    let pred_time = start.elapsed();
    println!("  {} probes ({} found): {:?}", n, found, pred_time);
    println!("  per call: {:?}", pred_time / n as u32);

    println!("\n=== delete benchmark ===");
    keys.shuffle(&mut rng);
    let start = Instant::now();
    for &k in &keys {
        treap.delete(&k);
    }
    let delete_time = start.elapsed();
    println!("  {} deletes: {:?}", n, delete_time);
    println!("  per call: {:?}", delete_time / n as u32);

    assert!(treap.is_empty());
}
