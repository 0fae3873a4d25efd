//! Hasher capabilities and table sizing helpers
//!
//! The maps take any [`BuildHasher`]. Besides the default `ahash::RandomState`
//! this module offers two deterministic builders:
//!
//! - [`IdentityState`]: integer keys hash to themselves, useful for
//!   reproducible slot placement.
//! - [`ConstantState`]: every key hashes to the same value, the worst case for
//!   both collision strategies.
//!
//! # Usage
//!
//! ```rust
//! use fixmap::hash_map::{next_prime, IdentityState, OpenAddressingMap};
//!
//! let capacity = next_prime(1000);
//! assert_eq!(capacity, 1009);
//! let mut map = OpenAddressingMap::<u64, u64, _>::with_capacity_and_hasher(
//!     capacity,
//!     IdentityState,
//! ).unwrap();
//! map.insert(7, 70).unwrap();
//! ```

use std::hash::{BuildHasher, Hasher};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hasher returning a lone `u32`/`u64`/`usize` unchanged
///
/// A key that writes a single integer hashes to that integer. Any other
/// write sequence (strings, tuples, slices) is folded FNV-1a style, every
/// write contributing to the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityHasher {
    hash: u64,
    written: bool,
}

impl IdentityHasher {
    #[inline]
    fn write_integer(&mut self, i: u64) {
        self.hash = if self.written {
            self.hash.wrapping_mul(FNV_PRIME) ^ i
        } else {
            i
        };
        self.written = true;
    }
}

impl Hasher for IdentityHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut hash = if self.written { self.hash } else { FNV_OFFSET };
        for &b in bytes {
            hash ^= b as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        self.hash = hash;
        self.written = true;
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.write_integer(i as u64);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.write_integer(i);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_integer(i as u64);
    }
}

/// Builder for [`IdentityHasher`]
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityState;

impl BuildHasher for IdentityState {
    type Hasher = IdentityHasher;

    #[inline]
    fn build_hasher(&self) -> IdentityHasher {
        IdentityHasher::default()
    }
}

/// Hasher that ignores its input
#[derive(Debug, Clone, Copy)]
pub struct ConstantHasher(u64);

impl Hasher for ConstantHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline]
    fn write(&mut self, _bytes: &[u8]) {}
}

/// Builder hashing every key to the same value
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantState {
    value: u64,
}

impl ConstantState {
    /// Hash every key to `value`
    pub const fn new(value: u64) -> Self {
        Self { value }
    }
}

impl BuildHasher for ConstantState {
    type Hasher = ConstantHasher;

    #[inline]
    fn build_hasher(&self) -> ConstantHasher {
        ConstantHasher(self.value)
    }
}

/// Returns `true` if `n` is prime
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest prime greater than or equal to `n`
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_hash_of_integers() {
        let state = IdentityState;
        assert_eq!(state.hash_one(42u64), 42);
        assert_eq!(state.hash_one(7u32), 7);
        assert_eq!(state.hash_one(0u64), 0);
    }

    #[test]
    fn test_identity_hash_of_strings_is_stable() {
        let state = IdentityState;
        assert_eq!(state.hash_one("abc"), state.hash_one("abc"));
        assert_ne!(state.hash_one("abc"), state.hash_one("abd"));
    }

    #[test]
    fn test_identity_hash_of_composite_keys() {
        let state = IdentityState;
        let hashes = [
            state.hash_one(("a", 5u64)),
            state.hash_one(("b", 5u64)),
            state.hash_one((1u64, 5u64)),
            state.hash_one((2u64, 5u64)),
        ];
        for (i, a) in hashes.iter().enumerate() {
            assert_ne!(*a, 5);
            for b in &hashes[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(state.hash_one((1u64, 5u64)), state.hash_one((1u64, 5u64)));
        assert_ne!(state.hash_one((1u64, 5u64)), state.hash_one((5u64, 1u64)));
    }

    #[test]
    fn test_constant_hash() {
        let state = ConstantState::new(2);
        assert_eq!(state.hash_one(10000u64), 2);
        assert_eq!(state.hash_one("anything"), 2);
    }

    #[test]
    fn test_primes() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(13));
        assert!(is_prime(503));
        assert!(is_prime(54917));
        assert!(!is_prime(54916));
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(14), 17);
        assert_eq!(next_prime(54917), 54917);
    }
}
