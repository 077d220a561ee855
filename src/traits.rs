//! # Eviction Policy Contract
//!
//! This module defines the capability every eviction strategy must satisfy:
//! tracking candidate keys and nominating a victim when the cache needs room.
//!
//! ## Architecture
//!
//! ```text
//!                  ┌─────────────────────────────────────────┐
//!                  │          EvictionPolicy<K>              │
//!                  │                                         │
//!                  │  insert(&mut, K)                        │
//!                  │  remove(&mut, &K) → Result<()>          │
//!                  │  increment(&mut, &K) → Result<u64>      │
//!                  │  select_victim(&) → Result<&K>          │
//!                  │  len(&) → usize                         │
//!                  │  is_empty(&) → bool                     │
//!                  └──────────────────┬──────────────────────┘
//!                                     │
//!                                     ▼
//!                  ┌─────────────────────────────────────────┐
//!                  │           LfuPolicy<K>                  │
//!                  │                                         │
//!                  │  frequency-ordered index + per-key      │
//!                  │  location handles + periodic decay      │
//!                  └─────────────────────────────────────────┘
//! ```
//!
//! The policy is a compile-time parameter of
//! [`BoundedCache`](crate::cache::BoundedCache), not a trait object: only one
//! strategy ships with the crate, so there is no reason to pay for dynamic
//! dispatch to keep the algorithm pluggable.
//!
//! ## Contract
//!
//! | Method          | Precondition       | Failure                  |
//! |-----------------|--------------------|--------------------------|
//! | `insert`        | none               | infallible               |
//! | `remove`        | key is tracked     | [`NotTrackedError`]      |
//! | `increment`     | key is tracked     | [`NotTrackedError`]      |
//! | `select_victim` | at least one key   | [`EmptyPolicyError`]     |
//!
//! A policy knows nothing about the cache that owns it; it sees keys only.
//! `select_victim` nominates without removing, so the caller decides when
//! the victim actually leaves the tracked set.

use crate::error::{EmptyPolicyError, NotTrackedError};

/// Capability contract for eviction strategies.
///
/// After `insert(key)` the key is a tracked candidate until `remove(&key)` is
/// called for it. Implementations choose their own bookkeeping; the only
/// shared obligation is that `select_victim` nominates a tracked key without
/// removing it.
pub trait EvictionPolicy<K> {
    /// Registers a key as an eviction candidate.
    ///
    /// Re-inserting an already-tracked key is safe. Concrete strategies may
    /// attach extra semantics to it: [`LfuPolicy`](crate::policy::lfu::LfuPolicy)
    /// treats every call as a touch and raises the key's frequency, so a
    /// host cache that routes overwrites through `insert` keeps frequency
    /// bookkeeping intact.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuPolicy;
    /// use freqcache::traits::EvictionPolicy;
    ///
    /// let mut policy = LfuPolicy::new(100);
    /// policy.insert("a");
    /// assert_eq!(policy.frequency(&"a"), Some(1));
    ///
    /// // Re-insert bumps the frequency
    /// policy.insert("a");
    /// assert_eq!(policy.frequency(&"a"), Some(2));
    /// ```
    fn insert(&mut self, key: K);

    /// Deregisters a tracked key.
    ///
    /// # Errors
    ///
    /// Returns [`NotTrackedError`] if the key is not currently tracked —
    /// a caller invariant violation.
    fn remove(&mut self, key: &K) -> Result<(), NotTrackedError>;

    /// Records one more use of a tracked key, returning its new frequency.
    ///
    /// # Errors
    ///
    /// Returns [`NotTrackedError`] if the key is not currently tracked.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuPolicy;
    /// use freqcache::traits::EvictionPolicy;
    ///
    /// let mut policy = LfuPolicy::new(100);
    /// policy.insert(7u64);
    /// assert_eq!(policy.increment(&7), Ok(2));
    /// assert!(policy.increment(&8).is_err());
    /// ```
    fn increment(&mut self, key: &K) -> Result<u64, NotTrackedError>;

    /// Nominates the key the policy would evict next, without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyPolicyError`] when no keys are tracked.
    ///
    /// # Example
    ///
    /// ```
    /// use freqcache::policy::lfu::LfuPolicy;
    /// use freqcache::traits::EvictionPolicy;
    ///
    /// let mut policy = LfuPolicy::new(100);
    /// assert!(policy.select_victim().is_err());
    ///
    /// policy.insert("cold");
    /// policy.insert("hot");
    /// policy.increment(&"hot").unwrap();
    ///
    /// assert_eq!(policy.select_victim(), Ok(&"cold"));
    /// // Nomination does not remove the key
    /// assert_eq!(policy.len(), 2);
    /// ```
    fn select_victim(&self) -> Result<&K, EmptyPolicyError>;

    /// Returns the number of tracked keys.
    fn len(&self) -> usize;

    /// Returns `true` if no keys are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
