//! Common surface shared by the fixed-capacity maps
//!
//! Both collision resolution strategies implement [`FixedCapacityMap`] so that
//! workload drivers and conformance checks can run against either one without
//! caring which table layout sits underneath.

use crate::error::Result;

/// Operations every fixed-capacity map provides
pub trait FixedCapacityMap<K, V> {
    /// Short, stable identifier used in logs and reports
    fn name(&self) -> &'static str;

    /// Insert or replace; returns the previous value for an existing key
    fn insert(&mut self, key: K, value: V) -> Result<Option<V>>;

    /// Lookup without mutation
    fn get(&self, key: &K) -> Option<&V>;

    /// Number of stored entries
    fn len(&self) -> usize;

    /// Returns `true` if no entry has been stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fixed slot count: capacity for open addressing, bucket count for chaining
    fn slot_count(&self) -> usize;

    /// Stored entries over slot count, as a percentage
    fn load_factor(&self) -> f64 {
        self.len() as f64 * 100.0 / self.slot_count() as f64
    }

    /// Occupancy statistics for reports
    fn stats(&self) -> MapStats;
}

/// Occupancy statistics of a fixed-capacity map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapStats {
    /// Stored entries
    pub entries: usize,
    /// Slots (or buckets) in the table
    pub slots: usize,
    /// Slots holding at least one entry
    pub occupied_slots: usize,
    /// Longest chain (chaining) or longest probe distance plus one (open addressing)
    pub longest_run: usize,
}

impl MapStats {
    /// Fraction of slots holding at least one entry (0.0 to 1.0)
    pub fn slot_utilization(&self) -> f64 {
        if self.slots == 0 {
            0.0
        } else {
            self.occupied_slots as f64 / self.slots as f64
        }
    }
}
