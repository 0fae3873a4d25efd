//! Comparison harness for the two map designs
//!
//! The harness drives both maps through the same insert and lookup workloads
//! at increasing load factors and collects wall-clock timings into a
//! [`BenchReport`]. Four categories are measured:
//!
//! 1. inserts with equal capacity and bucket count
//! 2. lookups with equal capacity and bucket count
//! 3. inserts with few buckets (long chains) against the same capacity
//! 4. lookups with few buckets against the same capacity
//!
//! ```rust
//! use fixmap::bench::{generate_unique_keys, run_suite};
//! use fixmap::config::{BenchConfig, Config};
//!
//! let config = BenchConfig::quick_preset();
//! let keys = generate_unique_keys(config.dataset_size, config.seed);
//! let report = run_suite(&config, &keys).unwrap();
//! assert_eq!(report.categories.len(), 4);
//! ```

pub mod dataset;
pub mod report;
pub mod workload;

pub use dataset::generate_unique_keys;
pub use report::{BenchCategory, BenchReport, BenchResult};
pub use workload::{
    insert_keys, lookup_keys, lookup_keys_unchecked, measure, time_ms, Measurement, Point,
    Workload,
};

use crate::config::{BenchConfig, Config, HasherKind};
use crate::error::Result;
use crate::hash_map::IdentityState;
use std::hash::BuildHasher;

/// Title of the regular insert category
pub const INSERT_CATEGORY: &str = "Insertion with increasing load factors";
/// Title of the regular lookup category
pub const LOOKUP_CATEGORY: &str = "Look-up tests with increasing load factors";
/// Title of the low-bucket insert category
pub const LOW_BUCKET_INSERT_CATEGORY: &str =
    "Insertion tests low bucket counts and increasing load factor";
/// Title of the low-bucket lookup category
pub const LOW_BUCKET_LOOKUP_CATEGORY: &str =
    "Lookup tests low bucket counts and increasing load factor";

/// Run every category described by `config` over `keys`
///
/// The configuration is validated first; `keys` must hold at least
/// [`BenchConfig::max_step`] entries.
pub fn run_suite(config: &BenchConfig, keys: &[u64]) -> Result<BenchReport> {
    config.validate()?;
    match config.hasher {
        HasherKind::Ahash => run_with_hasher(config, keys, &ahash::RandomState::new()),
        HasherKind::Identity => run_with_hasher(config, keys, &IdentityState),
    }
}

fn run_with_hasher<S>(config: &BenchConfig, keys: &[u64], hasher: &S) -> Result<BenchReport>
where
    S: BuildHasher + Clone,
{
    let plan = [
        (INSERT_CATEGORY, Workload::Insert, config.num_buckets, &config.load_steps),
        (LOOKUP_CATEGORY, Workload::Lookup, config.num_buckets, &config.load_steps),
        (
            LOW_BUCKET_INSERT_CATEGORY,
            Workload::Insert,
            config.low_num_buckets,
            &config.low_bucket_steps,
        ),
        (
            LOW_BUCKET_LOOKUP_CATEGORY,
            Workload::Lookup,
            config.low_num_buckets,
            &config.low_bucket_steps,
        ),
    ];

    let mut report = BenchReport::default();
    for (title, workload, num_buckets, steps) in plan {
        log::info!("running '{}' over {} steps", title, steps.len());
        let mut category = BenchCategory::new(title);
        for &count in steps.iter() {
            let point = Point {
                keys,
                count,
                capacity: config.capacity,
                num_buckets,
            };
            let measurement = measure(point, workload, hasher, config.verify_lookups)?;
            category.results.push(measurement.into());
        }
        report.categories.push(category);
    }
    Ok(report)
}
