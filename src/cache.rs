//! # Bounded, synchronized cache container
//!
//! [`BoundedCache`] composes a backing key-value store with one
//! [`EvictionPolicy`] instance behind a single exclusive lock. The policy
//! does the frequency bookkeeping and nominates victims; the container owns
//! the values and enforces the capacity bound.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────────────────────┐
//!   │                 BoundedCache<K, V, P>                   │
//!   │                                                         │
//!   │   capacity: usize          (fixed at construction)      │
//!   │                                                         │
//!   │   ┌── parking_lot::Mutex ─────────────────────────────┐ │
//!   │   │                                                   │ │
//!   │   │   entries: FxHashMap<K, V>   (canonical store)    │ │
//!   │   │   policy:  P                 (owned, not shared)  │ │
//!   │   │                                                   │ │
//!   │   └───────────────────────────────────────────────────┘ │
//!   └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Store and policy are guarded jointly as one atomic unit: every public
//! operation acquires the lock for its entire duration, so concurrent
//! callers observe a total order of operations (linearizability). The guard
//! is released on all exit paths, errors included. There is no I/O or other
//! suspension point inside the critical section; hold times are bounded by
//! O(log n) policy work, or O(n log n) when an access lands on a decay pass.
//!
//! ## Invariants
//!
//! - `len() <= capacity()` after every operation.
//! - The policy's tracked key set equals the store's key set. [`delete`]
//!   upholds this by deregistering the key from the policy as well; leaving
//!   deleted keys tracked would let ghost victims defeat the capacity bound
//!   (see `DESIGN.md`).
//!
//! ## Write at capacity
//!
//! A write that finds the store full evicts exactly one victim before
//! inserting, even when the written key is already present. The victim can
//! then be the written key itself (lowest frequency, earliest registration),
//! in which case the overwrite lands with a fresh frequency of 1. Routing
//! overwrites through the policy's insert keeps "store a value" and "count a
//! use" as one operation; the edge case is the price and it is deliberate.
//!
//! [`delete`]: BoundedCache::delete
//!
//! ## Example
//!
//! ```
//! use freqcache::builder::CacheBuilder;
//!
//! let cache = CacheBuilder::new()
//!     .capacity(2)
//!     .try_build::<&str, i32>()
//!     .unwrap();
//!
//! cache.write("a", 1);
//! cache.write("b", 2);
//! cache.read(&"a").unwrap(); // "a" now has frequency 2
//!
//! cache.write("c", 3); // evicts "b" (frequency 1)
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! assert!(cache.contains(&"c"));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{ConfigError, EmptyCacheError, NotTrackedError};
use crate::policy::lfu::LfuPolicy;
use crate::traits::EvictionPolicy;

/// Entries held when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 50;

/// A size-bounded cache with the decaying-LFU policy wired in.
pub type LfuCache<K, V> = BoundedCache<K, V, LfuPolicy<K>>;

/// State guarded by the cache's single lock. Store and policy mutate
/// together or not at all.
#[derive(Debug)]
struct Inner<K, V, P> {
    entries: FxHashMap<K, V>,
    policy: P,
}

/// Thread-safe, size-bounded key-value cache with a pluggable eviction
/// policy.
///
/// All methods take `&self`; share the cache across threads with `Arc`.
/// See the module documentation for locking and invariant details.
#[derive(Debug)]
pub struct BoundedCache<K, V, P> {
    inner: Mutex<Inner<K, V, P>>,
    capacity: usize,
}

impl<K, V, P> BoundedCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    /// Creates a cache owning `policy`, bounded to `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero: a zero-capacity cache
    /// could never satisfy a write and would ask an empty policy for
    /// victims.
    pub fn try_new(policy: P, capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("cache capacity must be > 0"));
        }
        Ok(BoundedCache {
            inner: Mutex::new(Inner {
                entries: FxHashMap::default(),
                policy,
            }),
            capacity,
        })
    }

    /// Stores `value` under `key`, evicting at most one other entry if the
    /// cache is full.
    ///
    /// The written key counts as touched once, whether it is new or an
    /// overwrite. See the module documentation for the at-capacity edge
    /// case.
    pub fn write(&self, key: K, value: V) {
        let mut inner = self.inner.lock();
        if inner.entries.len() >= self.capacity {
            // Capacity was validated > 0, the policy tracks every stored
            // key, and the store is full here, so a victim must exist.
            let victim = inner
                .policy
                .select_victim()
                .expect("eviction requested from an empty policy")
                .clone();
            inner
                .policy
                .remove(&victim)
                .expect("nominated victim missing from the policy");
            inner.entries.remove(&victim);
            debug!("evicted cache entry");
        }
        inner.policy.insert(key.clone());
        inner.entries.insert(key, value);
    }

    /// Returns a copy of the value stored under `key`, counting the access.
    ///
    /// # Errors
    ///
    /// Returns [`NotTrackedError`] if the key is not present. Callers that
    /// cannot guarantee presence should check [`contains`](Self::contains)
    /// first or handle the error.
    pub fn read(&self, key: &K) -> Result<V, NotTrackedError>
    where
        V: Clone,
    {
        let mut inner = self.inner.lock();
        inner.policy.increment(key)?;
        let value = inner
            .entries
            .get(key)
            .cloned()
            .expect("tracked key missing from the store");
        Ok(value)
    }

    /// Returns `true` if `key` is present. Does not count as an access.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().entries.contains_key(key)
    }

    /// Returns a snapshot of every entry, counting one access per key.
    ///
    /// A full enumeration is treated as one use of every entry, so it shifts
    /// eviction order the same way individual reads would.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCacheError`] when the cache holds no entries.
    pub fn items(&self) -> Result<HashMap<K, V>, EmptyCacheError>
    where
        V: Clone,
    {
        let mut inner = self.inner.lock();
        if inner.entries.is_empty() {
            return Err(EmptyCacheError);
        }
        let Inner { entries, policy } = &mut *inner;
        for key in entries.keys() {
            policy
                .increment(key)
                .expect("stored key missing from the policy");
        }
        Ok(entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    /// Removes `key` if present; silently does nothing otherwise.
    ///
    /// Also deregisters the key from the eviction policy, so a later write
    /// of the same key starts over at frequency 1.
    pub fn delete(&self, key: &K) {
        let mut inner = self.inner.lock();
        if inner.entries.remove(key).is_some() {
            inner
                .policy
                .remove(key)
                .expect("stored key missing from the policy");
        }
    }

    /// Removes every entry and resets the policy's tracking state.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        let Inner { entries, policy } = &mut *inner;
        for key in entries.keys() {
            policy
                .remove(key)
                .expect("stored key missing from the policy");
        }
        entries.clear();
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Returns the tracked frequency of `key`, or `None` if absent.
    /// Read-only: does not count as an access.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.inner.lock().policy.frequency(key)
    }
}
