//! Fixed-capacity hash map implementations
//!
//! Two collision resolution designs with the same surface:
//! - `ChainedBucketMap`: fixed bucket array, owned overflow chains, no ceiling
//! - `OpenAddressingMap`: fixed slot array, linear probing, hard ceiling
//!
//! Both implement [`FixedCapacityMap`] so drivers can swap one for the other.

mod chained_bucket_map;
mod hash_functions;
mod open_addressing_map;
mod strategy_traits;

pub use chained_bucket_map::{ChainedBucketMap, DEFAULT_NUM_BUCKETS};
pub use open_addressing_map::{OpenAddressingMap, DEFAULT_CAPACITY};
pub use strategy_traits::{FixedCapacityMap, MapStats};

pub use hash_functions::{
    is_prime, next_prime, ConstantHasher, ConstantState, IdentityHasher, IdentityState,
};
