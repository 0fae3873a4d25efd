//! Random key datasets.

use ahash::AHashSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `count` distinct keys drawn uniformly from the whole `u64` range
///
/// With `Some(seed)` the sequence is reproducible; with `None` the generator
/// is seeded from OS entropy.
pub fn generate_unique_keys(count: usize, seed: Option<u64>) -> Vec<u64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut seen = AHashSet::with_capacity(count);
    let mut keys = Vec::with_capacity(count);
    while keys.len() < count {
        let key: u64 = rng.gen();
        if seen.insert(key) {
            keys.push(key);
        }
    }
    log::debug!("generated {} unique keys (seed: {:?})", count, seed);
    keys
}
