//! OpenAddressingMap - flat slot array with linear probing
//!
//! Every slot is either empty or holds one key-value pair. A key lives at its
//! home slot (`hash % capacity`) or at the first free slot after it, scanning
//! forward with wraparound. There is no delete, so a slot never returns to
//! empty and probing needs no tombstones.
//!
//! The slot count is fixed at construction. Once every slot is taken, any
//! insert fails with [`FixmapError::MapFull`] and the map is left untouched,
//! updates of stored keys included. Keep the load factor
//! well below 100% (50-70% is a realistic ceiling) or probe runs grow long.
//!
//! # Examples
//!
//! ```rust
//! use fixmap::hash_map::OpenAddressingMap;
//! use fixmap::FixmapError;
//!
//! let mut map = OpenAddressingMap::<u64, u64>::with_capacity(2).unwrap();
//! map.insert(1, 10).unwrap();
//! map.insert(2, 20).unwrap();
//! assert!(matches!(map.insert(3, 30), Err(FixmapError::MapFull { capacity: 2 })));
//! assert_eq!(map.get(&1), Some(&10));
//! ```

use crate::error::{check_slot_count, FixmapError, Result};
use crate::hash_map::strategy_traits::{FixedCapacityMap, MapStats};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;

/// Default slot count (prime)
pub const DEFAULT_CAPACITY: usize = 54917;

enum Slot<K, V> {
    Empty,
    Occupied { key: K, value: V },
}

/// Hash map resolving collisions by linear probing over a fixed slot array
pub struct OpenAddressingMap<K, V, S = ahash::RandomState> {
    table: Box<[Slot<K, V>]>,
    len: usize,
    hash_builder: S,
}

impl<K, V> OpenAddressingMap<K, V, ahash::RandomState> {
    /// Create an empty map with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::alloc(DEFAULT_CAPACITY, ahash::RandomState::new())
    }

    /// Create an empty map with `capacity` slots
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_hasher(capacity, ahash::RandomState::new())
    }
}

impl<K, V, S> OpenAddressingMap<K, V, S> {
    /// Create an empty map with `capacity` slots and the given hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Result<Self> {
        check_slot_count(capacity)?;
        Ok(Self::alloc(capacity, hash_builder))
    }

    fn alloc(capacity: usize, hash_builder: S) -> Self {
        let table = std::iter::repeat_with(|| Slot::Empty)
            .take(capacity)
            .collect();
        Self {
            table,
            len: 0,
            hash_builder,
        }
    }

    /// Number of key-value pairs in the map
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of key-value pairs the map can hold
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no empty slot is left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.table.len()
    }

    /// Stored keys over capacity, as a percentage
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 * 100.0 / self.table.len() as f64
    }

    /// Returns a reference to the hasher
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }
}

impl<K, V, S> OpenAddressingMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn home_slot<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hash_builder.hash_one(key) % self.table.len() as u64) as usize
    }

    /// Walk the probe sequence for `key`.
    ///
    /// Returns the index of the slot holding `key` or of the first empty slot
    /// on the way, or `None` after a full wraparound back to the home slot.
    fn probe<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let capacity = self.table.len();
        let home = self.home_slot(key);
        let mut idx = home;
        loop {
            match &self.table[idx] {
                Slot::Occupied { key: stored, .. } if stored.borrow() != key => {
                    idx += 1;
                    if idx == capacity {
                        idx = 0;
                    }
                    if idx == home {
                        return None;
                    }
                }
                _ => return Some(idx),
            }
        }
    }

    /// Insert a key-value pair, or replace the value of an existing key
    ///
    /// Returns the previous value when the key was already present. Once
    /// every slot is occupied any insert, including an update, returns
    /// [`FixmapError::MapFull`]; so does a new key with no empty slot on its
    /// probe sequence. A rejected insert changes nothing.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let capacity = self.table.len();
        if self.len == capacity {
            log::debug!("open addressing map rejected insert: map is full ({} slots)", capacity);
            return Err(FixmapError::map_full(capacity));
        }
        let idx = match self.probe(&key) {
            Some(idx) => idx,
            None => {
                log::debug!("open addressing map rejected insert: all {} slots taken", capacity);
                return Err(FixmapError::map_full(capacity));
            }
        };

        let slot = &mut self.table[idx];
        if let Slot::Occupied { value: current, .. } = slot {
            return Ok(Some(mem::replace(current, value)));
        }
        *slot = Slot::Occupied { key, value };
        self.len += 1;
        debug_assert!(self.len <= capacity);
        Ok(None)
    }

    /// Returns a reference to the value stored for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &self.table[self.probe(key)?] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty => None,
        }
    }

    /// Returns `true` if the map contains `key`
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Slot occupancy and probe distance statistics
    pub fn stats(&self) -> MapStats {
        let capacity = self.table.len();
        let mut stats = MapStats {
            entries: self.len,
            slots: capacity,
            ..MapStats::default()
        };
        for (idx, slot) in self.table.iter().enumerate() {
            if let Slot::Occupied { key, .. } = slot {
                let home = self.home_slot(key);
                let distance = (idx + capacity - home) % capacity;
                stats.occupied_slots += 1;
                stats.longest_run = stats.longest_run.max(distance + 1);
            }
        }
        stats
    }
}

impl<K, V> Default for OpenAddressingMap<K, V, ahash::RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for OpenAddressingMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAddressingMap")
            .field("len", &self.len)
            .field("capacity", &self.table.len())
            .finish()
    }
}

impl<K, V, S> FixedCapacityMap<K, V> for OpenAddressingMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn name(&self) -> &'static str {
        "open_addressing"
    }

    fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        OpenAddressingMap::insert(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        OpenAddressingMap::get(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn slot_count(&self) -> usize {
        self.table.len()
    }

    fn stats(&self) -> MapStats {
        OpenAddressingMap::stats(self)
    }
}
