//! Timed insert and lookup workloads.

use crate::error::{FixmapError, Result};
use crate::hash_map::{ChainedBucketMap, FixedCapacityMap, OpenAddressingMap};
use std::hash::BuildHasher;
use std::hint::black_box;
use std::time::Instant;

/// Which operation a measurement times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// Insert `count` keys into empty maps
    Insert,
    /// Look up `count` keys in maps pre-populated with them
    Lookup,
}

/// Table sizes and data for one measurement point
#[derive(Debug, Clone, Copy)]
pub struct Point<'a> {
    /// Dataset to draw keys from; the first `count` keys are used
    pub keys: &'a [u64],
    /// Number of keys to insert or look up
    pub count: usize,
    /// Open-addressing slot count
    pub capacity: usize,
    /// Chained bucket count
    pub num_buckets: usize,
}

/// Outcome of one measurement point for both designs
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Keys inserted or looked up
    pub data_count: usize,
    /// Chained load factor, percent
    pub chained_load_factor: f64,
    /// Open-addressing load factor, percent
    pub open_load_factor: f64,
    /// Chained wall-clock time, milliseconds
    pub chained_ms: f64,
    /// Open-addressing wall-clock time, milliseconds
    pub open_ms: f64,
    /// Longest chain in the chained map
    pub chained_longest_run: usize,
    /// Longest probe run in the open-addressing map
    pub open_longest_run: usize,
}

/// Run `f` and return its result with the elapsed wall-clock milliseconds
pub fn time_ms<T, F>(f: F) -> Result<(T, f64)>
where
    F: FnOnce() -> Result<T>,
{
    let start = Instant::now();
    let value = f()?;
    Ok((value, start.elapsed().as_secs_f64() * 1000.0))
}

/// Insert every key with itself as the value
pub fn insert_keys<M>(map: &mut M, keys: &[u64]) -> Result<()>
where
    M: FixedCapacityMap<u64, u64> + ?Sized,
{
    for &key in keys {
        map.insert(key, key)?;
    }
    Ok(())
}

/// Look up every key and check the value equals the key
pub fn lookup_keys<M>(map: &M, keys: &[u64]) -> Result<()>
where
    M: FixedCapacityMap<u64, u64> + ?Sized,
{
    for &key in keys {
        match map.get(&key) {
            Some(&value) if value == key => {}
            _ => return Err(FixmapError::lookup_mismatch(key)),
        }
    }
    Ok(())
}

/// Look up every key without checking results
pub fn lookup_keys_unchecked<M>(map: &M, keys: &[u64]) -> usize
where
    M: FixedCapacityMap<u64, u64> + ?Sized,
{
    keys.iter().filter(|&key| black_box(map.get(key)).is_some()).count()
}

fn timed_lookup<M>(map: &M, keys: &[u64], verify: bool) -> Result<f64>
where
    M: FixedCapacityMap<u64, u64> + ?Sized,
{
    if verify {
        let (_, ms) = time_ms(|| lookup_keys(map, keys))?;
        Ok(ms)
    } else {
        let (found, ms) = time_ms(|| Ok(lookup_keys_unchecked(map, keys)))?;
        if found != keys.len() {
            log::warn!("{}: {} of {} keys missing", map.name(), keys.len() - found, keys.len());
        }
        Ok(ms)
    }
}

/// Measure one point on fresh maps of both designs
pub fn measure<S>(point: Point<'_>, workload: Workload, hasher: &S, verify: bool) -> Result<Measurement>
where
    S: BuildHasher + Clone,
{
    let keys = point.keys.get(..point.count).ok_or_else(|| {
        FixmapError::configuration(format!(
            "requested {} keys from a dataset of {}",
            point.count,
            point.keys.len()
        ))
    })?;

    let mut chained =
        ChainedBucketMap::<u64, u64, S>::with_buckets_and_hasher(point.num_buckets, hasher.clone())?;
    let mut open =
        OpenAddressingMap::<u64, u64, S>::with_capacity_and_hasher(point.capacity, hasher.clone())?;

    let (chained_ms, open_ms) = match workload {
        Workload::Insert => {
            let (_, chained_ms) = time_ms(|| insert_keys(&mut chained, keys))?;
            let (_, open_ms) = time_ms(|| insert_keys(&mut open, keys))?;
            (chained_ms, open_ms)
        }
        Workload::Lookup => {
            insert_keys(&mut chained, keys)?;
            insert_keys(&mut open, keys)?;
            (timed_lookup(&chained, keys, verify)?, timed_lookup(&open, keys, verify)?)
        }
    };

    let measurement = Measurement {
        data_count: point.count,
        chained_load_factor: chained.load_factor(),
        open_load_factor: open.load_factor(),
        chained_ms,
        open_ms,
        chained_longest_run: chained.stats().longest_run,
        open_longest_run: open.stats().longest_run,
    };
    log::debug!("{:?} {:?}", workload, measurement);
    Ok(measurement)
}
