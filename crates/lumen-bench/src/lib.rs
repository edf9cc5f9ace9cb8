//! Benchmark workloads for the Lumen number boxing allocator.
//!
//! Provides deterministic input streams for benchmarking:
//!
//! - [`small_integers`]: every input hits the preload table
//! - [`fractional`]: every input misses and takes an arena slot
//! - [`mixed`]: interpreter-like mix of loop counters and real arithmetic

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `len` integers drawn from the preloaded range `-128..256`.
pub fn small_integers(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| (rng.next_u32() % 384) as f64 - 128.0)
        .collect()
}

/// `len` non-integral numbers, none of which can hit the preload table.
pub fn fractional(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| half_step(&mut rng)).collect()
}

/// `len` numbers where roughly `hit_percent`% are preloaded integers and
/// the rest are fractional.
pub fn mixed(len: usize, hit_percent: u32, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            if rng.next_u32() % 100 < hit_percent {
                (rng.next_u32() % 256) as f64
            } else {
                half_step(&mut rng)
            }
        })
        .collect()
}

/// A number of the form `k + 0.5` with `k` in `0..2^20`. Always exactly
/// representable, never integral.
fn half_step(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u32() >> 12) as f64 + 0.5
}
