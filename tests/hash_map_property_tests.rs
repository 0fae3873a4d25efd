//! Property-based testing for the fixed-capacity maps
//!
//! Random operation sequences are replayed against `std::collections::HashMap`
//! as a model.

use fixmap::hash_map::{ConstantState, IdentityState};
use fixmap::{ChainedBucketMap, FixedCapacityMap, FixmapError, OpenAddressingMap};
use proptest::prelude::*;
use std::collections::HashMap;

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

#[derive(Debug, Clone)]
enum MapOp {
    Insert(u64, u64),
    Get(u64),
}

/// Keys from a narrow range so updates and repeated lookups are common
fn map_ops_strategy(key_space: u64) -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..key_space, any::<u64>()).prop_map(|(k, v)| MapOp::Insert(k, v)),
            2 => (0..key_space).prop_map(MapOp::Get),
        ],
        0..400,
    )
}

/// Replay `ops`, allowing MapFull only once `slot_count` keys are stored
fn check_against_model(
    map: &mut dyn FixedCapacityMap<u64, u64>,
    ops: &[MapOp],
) -> Result<(), TestCaseError> {
    let mut model: HashMap<u64, u64> = HashMap::new();
    for op in ops {
        match *op {
            MapOp::Insert(k, v) => match map.insert(k, v) {
                Ok(previous) => {
                    prop_assert_eq!(previous, model.insert(k, v));
                }
                Err(FixmapError::MapFull { capacity }) => {
                    prop_assert_eq!(capacity, map.slot_count());
                    prop_assert_eq!(model.len(), map.slot_count());
                    prop_assert_eq!(map.get(&k), model.get(&k));
                }
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            },
            MapOp::Get(k) => {
                prop_assert_eq!(map.get(&k), model.get(&k));
            }
        }
        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.is_empty(), model.is_empty());
    }
    for (k, v) in &model {
        prop_assert_eq!(map.get(k), Some(v));
    }
    Ok(())
}

// =============================================================================
// CHAINED BUCKET MAP
// =============================================================================

proptest! {
    #[test]
    fn prop_chained_matches_model(
        ops in map_ops_strategy(200),
        buckets in 1usize..64,
    ) {
        let mut map = ChainedBucketMap::<u64, u64>::with_buckets(buckets).unwrap();
        check_against_model(&mut map, &ops)?;
    }

    #[test]
    fn prop_chained_constant_hash_matches_model(ops in map_ops_strategy(50)) {
        let mut map =
            ChainedBucketMap::<u64, u64, _>::with_buckets_and_hasher(5, ConstantState::new(7))
                .unwrap();
        check_against_model(&mut map, &ops)?;
        prop_assert!(map.stats().occupied_slots <= 1);
    }

    #[test]
    fn prop_chained_stats_account_for_every_entry(
        keys in prop::collection::hash_set(any::<u64>(), 0..300),
        buckets in 1usize..32,
    ) {
        let mut map = ChainedBucketMap::<u64, u64>::with_buckets(buckets).unwrap();
        for &k in &keys {
            prop_assert_eq!(map.insert(k, k), None);
        }
        let stats = map.stats();
        prop_assert_eq!(stats.entries, keys.len());
        prop_assert!(stats.occupied_slots <= buckets);
        prop_assert!(stats.longest_run * stats.occupied_slots >= keys.len());
    }
}

// =============================================================================
// OPEN ADDRESSING MAP
// =============================================================================

proptest! {
    #[test]
    fn prop_open_addressing_matches_model(
        ops in map_ops_strategy(200),
        capacity in 1usize..64,
    ) {
        let mut map = OpenAddressingMap::<u64, u64>::with_capacity(capacity).unwrap();
        check_against_model(&mut map, &ops)?;
    }

    #[test]
    fn prop_open_addressing_identity_matches_model(
        ops in map_ops_strategy(100),
        capacity in 1usize..32,
    ) {
        let mut map =
            OpenAddressingMap::<u64, u64, _>::with_capacity_and_hasher(capacity, IdentityState)
                .unwrap();
        check_against_model(&mut map, &ops)?;
    }

    #[test]
    fn prop_open_addressing_rejects_exactly_past_capacity(
        keys in prop::collection::hash_set(any::<u64>(), 1..100),
        capacity in 1usize..100,
    ) {
        let mut map = OpenAddressingMap::<u64, u64>::with_capacity(capacity).unwrap();
        for (i, &k) in keys.iter().enumerate() {
            let result = map.insert(k, i as u64);
            if i < capacity {
                prop_assert!(result.is_ok());
            } else {
                let is_full = matches!(result, Err(FixmapError::MapFull { .. }));
                prop_assert!(is_full);
            }
        }
        prop_assert_eq!(map.len(), keys.len().min(capacity));
        prop_assert_eq!(map.is_full(), keys.len() >= capacity);
        prop_assert!(map.stats().longest_run <= capacity);
    }
}
