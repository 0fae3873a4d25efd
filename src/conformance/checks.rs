//! Built-in checks for both map designs.

use super::{CheckFailure, CheckResult, Suite};
use crate::ensure;
use crate::error::{FixmapError, Result};
use crate::hash_map::{
    ChainedBucketMap, ConstantState, FixedCapacityMap, IdentityState, OpenAddressingMap,
};
use std::panic::Location;

type DynMap = dyn FixedCapacityMap<u64, u64>;

/// Suite with the standard checks for `ChainedBucketMap` and `OpenAddressingMap`
pub fn builtin_suite() -> Suite {
    let mut suite = Suite::new();
    suite
        .register("chained::initial_state", chained_initial_state)
        .register("chained::insert_and_get_single_value", chained_single_value)
        .register("chained::insert_multiple_values", chained_multiple_values)
        .register("chained::update_values", chained_update_values)
        .register("chained::fewer_buckets_than_items", chained_fewer_buckets)
        .register("chained::hash_collisions", chained_hash_collisions)
        .register("open_addressing::initial_state", open_initial_state)
        .register("open_addressing::insert_and_get_single_value", open_single_value)
        .register("open_addressing::insert_multiple_values", open_multiple_values)
        .register("open_addressing::update_values", open_update_values)
        .register("open_addressing::hash_collisions", open_hash_collisions)
        .register("open_addressing::full_map_rejects_inserts", open_full_map);
    suite
}

/// Turn a construction error into a failure at the caller's line
#[track_caller]
fn built<T>(result: Result<T>) -> std::result::Result<T, CheckFailure> {
    let location = Location::caller();
    result.map_err(|e| CheckFailure::new(location.file(), location.line(), &e.to_string()))
}

fn has(map: &DynMap, key: u64, value: u64) -> bool {
    map.get(&key) == Some(&value)
}

fn initial_state(map: &DynMap) -> CheckResult {
    ensure!(map.len() == 0);
    ensure!(map.is_empty());
    ensure!(map.get(&1234).is_none());
    Ok(())
}

fn single_value(map: &mut DynMap) -> CheckResult {
    ensure!(map.insert(10000, 100).is_ok());
    ensure!(map.len() == 1);
    ensure!(!map.is_empty());
    ensure!(has(map, 10000, 100));
    Ok(())
}

fn multiple_values(map: &mut DynMap) -> CheckResult {
    for i in 1..=4u64 {
        ensure!(map.insert(i * 10000, i * 100).is_ok());
    }
    ensure!(map.len() == 4);
    ensure!(has(map, 10000, 100));
    ensure!(has(map, 20000, 200));
    ensure!(has(map, 30000, 300));
    ensure!(has(map, 40000, 400));
    Ok(())
}

/// Insert `count` keys, then overwrite 20000 and 30000
fn update_values(map: &mut DynMap, count: u64) -> CheckResult {
    for i in 1..=count {
        ensure!(map.insert(i * 10000, i * 100).is_ok());
    }
    ensure!(map.insert(20000, 2001).ok() == Some(Some(200)));
    ensure!(map.insert(30000, 3001).ok() == Some(Some(300)));

    ensure!(map.len() == count as usize);
    ensure!(has(map, 10000, 100));
    ensure!(has(map, 20000, 2001));
    ensure!(has(map, 30000, 3001));
    ensure!(has(map, 40000, 400));
    if count >= 5 {
        ensure!(has(map, 50000, 500));
    }
    Ok(())
}

fn chained_initial_state() -> CheckResult {
    let map = built(ChainedBucketMap::<u64, u64>::with_buckets(25013))?;
    ensure!(map.num_buckets() == 25013);
    initial_state(&map)
}

fn chained_single_value() -> CheckResult {
    single_value(&mut ChainedBucketMap::<u64, u64>::new())
}

fn chained_multiple_values() -> CheckResult {
    multiple_values(&mut ChainedBucketMap::<u64, u64>::new())
}

fn chained_update_values() -> CheckResult {
    update_values(&mut ChainedBucketMap::<u64, u64>::new(), 4)
}

fn chained_fewer_buckets() -> CheckResult {
    let mut map = built(ChainedBucketMap::<u64, u64>::with_buckets(2))?;
    update_values(&mut map, 5)
}

fn chained_hash_collisions() -> CheckResult {
    let mut map = built(ChainedBucketMap::<u64, u64, _>::with_buckets_and_hasher(
        13,
        ConstantState::new(2),
    ))?;
    update_values(&mut map, 5)?;
    ensure!(map.stats().longest_run == 5);
    ensure!(map.stats().occupied_slots == 1);
    Ok(())
}

fn open_initial_state() -> CheckResult {
    let map = built(OpenAddressingMap::<u64, u64>::with_capacity(25013))?;
    ensure!(map.capacity() == 25013);
    ensure!(!map.is_full());
    initial_state(&map)
}

fn open_single_value() -> CheckResult {
    single_value(&mut OpenAddressingMap::<u64, u64>::new())
}

fn open_multiple_values() -> CheckResult {
    multiple_values(&mut OpenAddressingMap::<u64, u64>::new())
}

fn open_update_values() -> CheckResult {
    update_values(&mut OpenAddressingMap::<u64, u64>::new(), 4)
}

fn open_hash_collisions() -> CheckResult {
    let mut map = built(OpenAddressingMap::<u64, u64, _>::with_capacity_and_hasher(
        13,
        ConstantState::new(2),
    ))?;
    update_values(&mut map, 5)?;
    ensure!(map.stats().longest_run == 5);
    Ok(())
}

fn open_full_map() -> CheckResult {
    let mut map = built(OpenAddressingMap::<u64, u64, _>::with_capacity_and_hasher(
        3,
        IdentityState,
    ))?;
    for key in [7u64, 8, 9] {
        ensure!(map.insert(key, key * 10).is_ok());
    }
    ensure!(map.is_full());
    ensure!(matches!(
        map.insert(10, 100),
        Err(FixmapError::MapFull { capacity: 3 })
    ));
    ensure!(map.len() == 3);
    ensure!(map.get(&10).is_none());
    ensure!(has(&map, 7, 70) && has(&map, 8, 80) && has(&map, 9, 90));
    ensure!(matches!(
        map.insert(8, 81),
        Err(FixmapError::MapFull { capacity: 3 })
    ));
    ensure!(has(&map, 8, 80));
    Ok(())
}
