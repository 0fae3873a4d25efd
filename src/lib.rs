//! # Fixmap: Fixed-Capacity Hash Maps
//!
//! Two hash maps whose table size is fixed at construction, plus the tooling
//! to compare them.
//!
//! ## Key Features
//!
//! - **Chaining**: [`ChainedBucketMap`] keeps a fixed bucket array with owned
//!   overflow chains and never refuses an insert
//! - **Linear Probing**: [`OpenAddressingMap`] keeps a fixed slot array and
//!   reports [`FixmapError::MapFull`] for any insert once every slot is taken
//! - **Common Surface**: both implement [`FixedCapacityMap`]
//! - **Comparison Harness**: timed insert and lookup workloads at increasing
//!   load factors, reported as JSON
//! - **Conformance Runner**: ordered named checks with failure locations
//!
//! ## Quick Start
//!
//! ```rust
//! use fixmap::{ChainedBucketMap, FixmapError, OpenAddressingMap};
//!
//! let mut chained = ChainedBucketMap::<u64, u64>::with_buckets(2).unwrap();
//! for key in 0..10 {
//!     chained.insert(key, key * 2);
//! }
//! assert_eq!(chained.get(&7), Some(&14));
//!
//! let mut open = OpenAddressingMap::<u64, u64>::with_capacity(2).unwrap();
//! open.insert(1, 10).unwrap();
//! open.insert(2, 20).unwrap();
//! assert!(matches!(open.insert(3, 30), Err(FixmapError::MapFull { .. })));
//! ```

#![warn(missing_docs)]

pub mod bench;
pub mod config;
pub mod conformance;
pub mod error;
pub mod hash_map;

// Re-export core types
pub use error::{FixmapError, Result};
pub use hash_map::{ChainedBucketMap, FixedCapacityMap, MapStats, OpenAddressingMap};

pub use config::{BenchConfig, Config};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version at debug level
pub fn init() {
    log::debug!("Initializing fixmap v{}", VERSION);
}
