//! ChainedBucketMap - fixed bucket array with singly-linked overflow chains
//!
//! The bucket count is chosen at construction and never changes. Keys that
//! hash to the same bucket are kept in an owned linked chain, so the map has
//! no capacity ceiling: under high load it degrades to chain scans instead of
//! refusing inserts.
//!
//! # Examples
//!
//! ```rust
//! use fixmap::hash_map::ChainedBucketMap;
//!
//! let mut map = ChainedBucketMap::<u64, u64>::with_buckets(2).unwrap();
//! for key in [10000, 20000, 30000, 40000, 50000] {
//!     map.insert(key, key / 100);
//! }
//! assert_eq!(map.len(), 5);
//! assert_eq!(map.get(&30000), Some(&300));
//! ```

use crate::error::{check_slot_count, Result};
use crate::hash_map::strategy_traits::{FixedCapacityMap, MapStats};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Default bucket count (prime)
pub const DEFAULT_NUM_BUCKETS: usize = 54917;

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    next: Link<K, V>,
}

/// Hash map resolving collisions by chaining within a fixed set of buckets
pub struct ChainedBucketMap<K, V, S = ahash::RandomState> {
    table: Box<[Link<K, V>]>,
    len: usize,
    hash_builder: S,
}

impl<K, V> ChainedBucketMap<K, V, ahash::RandomState> {
    /// Create an empty map with [`DEFAULT_NUM_BUCKETS`] buckets
    pub fn new() -> Self {
        Self::alloc(DEFAULT_NUM_BUCKETS, ahash::RandomState::new())
    }

    /// Create an empty map with `num_buckets` buckets
    pub fn with_buckets(num_buckets: usize) -> Result<Self> {
        Self::with_buckets_and_hasher(num_buckets, ahash::RandomState::new())
    }
}

impl<K, V, S> ChainedBucketMap<K, V, S> {
    /// Create an empty map with `num_buckets` buckets and the given hasher
    pub fn with_buckets_and_hasher(num_buckets: usize, hash_builder: S) -> Result<Self> {
        check_slot_count(num_buckets)?;
        Ok(Self::alloc(num_buckets, hash_builder))
    }

    fn alloc(num_buckets: usize, hash_builder: S) -> Self {
        let table = std::iter::repeat_with(|| None).take(num_buckets).collect();
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

    /// Fixed number of buckets, not the number of non-empty ones
    #[inline]
    pub fn num_buckets(&self) -> usize {
        self.table.len()
    }

    /// Stored keys per bucket, as a percentage
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 * 100.0 / self.table.len() as f64
    }

    /// Returns a reference to the hasher
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Chain occupancy statistics
    pub fn stats(&self) -> MapStats {
        let mut stats = MapStats {
            entries: self.len,
            slots: self.table.len(),
            ..MapStats::default()
        };
        for head in self.table.iter() {
            let mut chain = 0;
            let mut link = head;
            while let Some(node) = link {
                chain += 1;
                link = &node.next;
            }
            if chain > 0 {
                stats.occupied_slots += 1;
            }
            stats.longest_run = stats.longest_run.max(chain);
        }
        stats
    }
}

impl<K, V, S> ChainedBucketMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hash_builder.hash_one(key) % self.table.len() as u64) as usize
    }

    /// Insert a key-value pair, or replace the value of an existing key
    ///
    /// Returns the previous value when the key was already present. A new key
    /// is appended at the tail of its bucket's chain.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        let mut link = &mut self.table[idx];
        while let Some(node) = link {
            if node.key == key {
                return Some(std::mem::replace(&mut node.value, value));
            }
            link = &mut node.next;
        }
        *link = Some(Box::new(Node {
            key,
            value,
            next: None,
        }));
        self.len += 1;
        None
    }

    /// Returns a reference to the value stored for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut link = &self.table[self.bucket_index(key)];
        while let Some(node) = link {
            if node.key.borrow() == key {
                return Some(&node.value);
            }
            link = &node.next;
        }
        None
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
}

impl<K, V, S> Drop for ChainedBucketMap<K, V, S> {
    fn drop(&mut self) {
        // Unlink nodes one at a time; recursive Box drops would walk the
        // whole chain on the stack.
        for head in self.table.iter_mut() {
            let mut link = head.take();
            while let Some(mut node) = link {
                link = node.next.take();
            }
        }
    }
}

impl<K, V> Default for ChainedBucketMap<K, V, ahash::RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for ChainedBucketMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedBucketMap")
            .field("len", &self.len)
            .field("num_buckets", &self.table.len())
            .finish()
    }
}

impl<K, V, S> FixedCapacityMap<K, V> for ChainedBucketMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn name(&self) -> &'static str {
        "chained_bucket"
    }

    fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        Ok(ChainedBucketMap::insert(self, key, value))
    }

    fn get(&self, key: &K) -> Option<&V> {
        ChainedBucketMap::get(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn slot_count(&self) -> usize {
        self.table.len()
    }

    fn stats(&self) -> MapStats {
        ChainedBucketMap::stats(self)
    }
}
