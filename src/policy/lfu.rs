//! # LFU policy with periodic frequency decay
//!
//! Tracks an access count per key and nominates the least-frequently-used key
//! for eviction. Counts are periodically halved so they cannot grow without
//! bound and so formerly-hot keys that went cold lose their advantage over
//! time.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                        LfuPolicy<K>                              │
//!   │                                                                  │
//!   │   freq_index: BTreeMap<(freq, tick), K>                          │
//!   │   ┌──────────────┬───────┐                                       │
//!   │   │ (1, 4)       │ "d"   │  ← front: smallest (freq, tick),     │
//!   │   │ (2, 0)       │ "a"   │     always the victim candidate      │
//!   │   │ (2, 2)       │ "c"   │                                       │
//!   │   │ (7, 1)       │ "b"   │  ← hot                                │
//!   │   └──────────────┴───────┘                                       │
//!   │                                                                  │
//!   │   key_location: FxHashMap<K, (freq, tick)>                       │
//!   │   ┌───────┬──────────────┐                                       │
//!   │   │ "a"   │ (2, 0)       │  ← stable handle into freq_index,    │
//!   │   │ "b"   │ (7, 1)       │     no scan needed to relocate       │
//!   │   │ ...   │ ...          │                                       │
//!   │   └───────┴──────────────┘                                       │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two structures are kept mutually consistent under every mutation:
//! each tracked key has exactly one `freq_index` entry, addressed by the
//! `(frequency, tick)` handle stored in `key_location`, and vice versa.
//!
//! ## Tie-breaking
//!
//! `tick` is a monotonic counter assigned once at registration and never
//! reassigned. Among keys with equal frequency the smallest tick — the key
//! registered earliest — is nominated first. Ticks survive decay, so the
//! relative order inside a frequency class is stable across halving.
//!
//! ## Decay
//!
//! `decay_counter` counts mutating operations (`increment`, `remove`). When
//! an `increment` pushes it to `decay_threshold`, every tracked frequency is
//! halved in place (integer division) and the counter resets. The pass is
//! O(n log n) but runs at most once per `decay_threshold` mutations, so the
//! amortized cost per operation stays O(log n).
//!
//! ## Operations
//!
//! | Method          | Complexity | Notes                                 |
//! |-----------------|------------|---------------------------------------|
//! | `insert`        | O(log n)   | register (if new) + unconditional touch |
//! | `remove`        | O(log n)   | drops both entries                    |
//! | `increment`     | O(log n)   | relocate entry, may trigger decay     |
//! | `select_victim` | O(log n)   | first entry of `freq_index`           |
//! | `decay`         | O(n log n) | amortized over `decay_threshold` ops  |
//!
//! ## Insert-also-increments
//!
//! `insert` on an already-tracked key does not reset anything; it bumps the
//! frequency exactly like `increment`. The host cache routes overwrites of
//! existing keys through `insert`, so an overwrite counts as one more use of
//! the key. A fresh key is registered at frequency 0 and immediately touched,
//! ending at frequency 1.

use std::collections::BTreeMap;
use std::hash::Hash;
use std::mem;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::{EmptyPolicyError, NotTrackedError};
use crate::traits::EvictionPolicy;

/// Mutating operations between decay passes when not configured otherwise.
pub const DEFAULT_DECAY_THRESHOLD: usize = 100;

/// Position of a key in the frequency index: `(frequency, registration tick)`.
type Handle = (u64, u64);

/// Least-Frequently-Used eviction policy with periodic frequency decay.
///
/// See the module documentation for the data layout and decay semantics.
#[derive(Debug)]
pub struct LfuPolicy<K> {
    /// Ordered multi-map from `(frequency, tick)` to key. The first entry is
    /// always the eviction candidate.
    freq_index: BTreeMap<Handle, K>,
    /// Per-key handle into `freq_index`.
    key_location: FxHashMap<K, Handle>,
    /// Next registration tick. Monotonic, never reused.
    next_tick: u64,
    /// Mutating operations since the last decay pass.
    decay_counter: usize,
    decay_threshold: usize,
}

impl<K> LfuPolicy<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a policy that decays after `decay_threshold` mutating
    /// operations.
    ///
    /// A threshold of zero makes every increment trigger a decay pass;
    /// [`CacheBuilder`](crate::builder::CacheBuilder) rejects it at
    /// construction.
    pub fn new(decay_threshold: usize) -> Self {
        trace!(decay_threshold, "lfu policy created");
        LfuPolicy {
            freq_index: BTreeMap::new(),
            key_location: FxHashMap::default(),
            next_tick: 0,
            decay_counter: 0,
            decay_threshold,
        }
    }

    /// Returns the configured decay threshold.
    #[inline]
    pub fn decay_threshold(&self) -> usize {
        self.decay_threshold
    }

    /// Returns the current frequency of a tracked key, or `None` if the key
    /// is untracked. Read-only: does not count as a use.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.key_location.get(key).map(|&(freq, _)| freq)
    }

    /// Halves every tracked frequency (integer division) and resets the
    /// decay counter. Ticks are preserved, so ordering within a frequency
    /// class is unchanged.
    fn decay(&mut self) {
        let old_index = mem::take(&mut self.freq_index);
        for ((freq, tick), key) in old_index {
            let halved = freq / 2;
            if let Some(location) = self.key_location.get_mut(&key) {
                *location = (halved, tick);
            }
            self.freq_index.insert((halved, tick), key);
        }
        self.decay_counter = 0;
        trace!(tracked = self.freq_index.len(), "decayed all frequencies");
    }
}

impl<K> Default for LfuPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_DECAY_THRESHOLD)
    }
}

impl<K> EvictionPolicy<K> for LfuPolicy<K>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K) {
        if !self.key_location.contains_key(&key) {
            let tick = self.next_tick;
            self.next_tick += 1;
            self.freq_index.insert((0, tick), key.clone());
            self.key_location.insert(key.clone(), (0, tick));
            trace!(tick, "key registered");
        }
        // The key is tracked at this point, so the touch cannot fail. A fresh
        // registration goes 0 -> 1 here; a re-insert bumps the existing count.
        self.increment(&key)
            .expect("freshly registered key missing from location map");
    }

    fn remove(&mut self, key: &K) -> Result<(), NotTrackedError> {
        let handle = self.key_location.remove(key).ok_or(NotTrackedError)?;
        self.freq_index
            .remove(&handle)
            .expect("tracked key missing from frequency index");
        self.decay_counter += 1;
        trace!(decay_counter = self.decay_counter, "key removed");
        Ok(())
    }

    fn increment(&mut self, key: &K) -> Result<u64, NotTrackedError> {
        let handle = *self.key_location.get(key).ok_or(NotTrackedError)?;
        let (freq, tick) = handle;
        let new_freq = freq.saturating_add(1);

        let owned_key = self
            .freq_index
            .remove(&handle)
            .expect("tracked key missing from frequency index");
        self.freq_index.insert((new_freq, tick), owned_key);
        if let Some(location) = self.key_location.get_mut(key) {
            *location = (new_freq, tick);
        }

        self.decay_counter += 1;
        trace!(
            frequency = new_freq,
            decay_counter = self.decay_counter,
            "key touched"
        );
        if self.decay_counter >= self.decay_threshold {
            self.decay();
        }
        Ok(new_freq)
    }

    fn select_victim(&self) -> Result<&K, EmptyPolicyError> {
        self.freq_index
            .values()
            .next()
            .ok_or(EmptyPolicyError)
    }

    fn len(&self) -> usize {
        self.key_location.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============================================
    // Frequency Tracking
    // ==============================================

    mod frequency_tracking {
        use super::*;

        #[test]
        fn fresh_insert_starts_at_one() {
            let mut policy = LfuPolicy::new(100);
            policy.insert("a");
            assert_eq!(policy.frequency(&"a"), Some(1));
            assert_eq!(policy.len(), 1);
        }

        #[test]
        fn reinsert_bumps_frequency() {
            let mut policy = LfuPolicy::new(100);
            policy.insert("a");
            policy.insert("a");
            policy.insert("a");
            assert_eq!(policy.frequency(&"a"), Some(3));
            assert_eq!(policy.len(), 1);
        }

        #[test]
        fn increment_adds_one_per_call() {
            let mut policy = LfuPolicy::new(100);
            policy.insert(42u64);
            for expected in 2..=10 {
                assert_eq!(policy.increment(&42), Ok(expected));
            }
            assert_eq!(policy.frequency(&42), Some(10));
        }

        #[test]
        fn increment_untracked_key_fails() {
            let mut policy: LfuPolicy<&str> = LfuPolicy::new(100);
            assert_eq!(policy.increment(&"ghost"), Err(NotTrackedError));
        }

        #[test]
        fn remove_untracked_key_fails() {
            let mut policy: LfuPolicy<&str> = LfuPolicy::new(100);
            assert_eq!(policy.remove(&"ghost"), Err(NotTrackedError));
        }

        #[test]
        fn remove_forgets_the_key() {
            let mut policy = LfuPolicy::new(100);
            policy.insert("a");
            assert_eq!(policy.remove(&"a"), Ok(()));
            assert_eq!(policy.frequency(&"a"), None);
            assert!(policy.is_empty());
            // A later insert starts over at frequency 1
            policy.insert("a");
            assert_eq!(policy.frequency(&"a"), Some(1));
        }
    }

    // ==============================================
    // Victim Selection
    // ==============================================

    mod victim_selection {
        use super::*;

        #[test]
        fn empty_policy_has_no_victim() {
            let policy: LfuPolicy<u32> = LfuPolicy::new(100);
            assert_eq!(policy.select_victim(), Err(EmptyPolicyError));
        }

        #[test]
        fn lowest_frequency_wins() {
            let mut policy = LfuPolicy::new(100);
            policy.insert("a");
            policy.insert("b");
            policy.insert("c");
            policy.increment(&"a").unwrap();
            policy.increment(&"a").unwrap();
            policy.increment(&"c").unwrap();

            assert_eq!(policy.select_victim(), Ok(&"b"));
        }

        #[test]
        fn nomination_does_not_remove() {
            let mut policy = LfuPolicy::new(100);
            policy.insert("a");
            policy.insert("b");
            policy.select_victim().unwrap();
            assert_eq!(policy.len(), 2);
        }

        #[test]
        fn ties_break_toward_earliest_registered() {
            let mut policy = LfuPolicy::new(100);
            policy.insert("first");
            policy.insert("second");
            policy.insert("third");
            // All at frequency 1; the earliest registration is nominated.
            assert_eq!(policy.select_victim(), Ok(&"first"));

            policy.increment(&"first").unwrap();
            assert_eq!(policy.select_victim(), Ok(&"second"));
        }

        #[test]
        fn tie_break_survives_relocation() {
            let mut policy = LfuPolicy::new(100);
            policy.insert("a");
            policy.insert("b");
            // Raise both to frequency 3; "a" keeps its earlier tick even
            // though "b" was touched last.
            policy.increment(&"a").unwrap();
            policy.increment(&"a").unwrap();
            policy.increment(&"b").unwrap();
            policy.increment(&"b").unwrap();
            assert_eq!(policy.frequency(&"a"), policy.frequency(&"b"));
            assert_eq!(policy.select_victim(), Ok(&"a"));
        }
    }

    // ==============================================
    // Decay
    // ==============================================

    mod decay {
        use super::*;

        #[test]
        fn threshold_reached_halves_all_frequencies() {
            let mut policy = LfuPolicy::new(8);
            policy.insert("a"); // counter 1, a=1
            policy.insert("b"); // counter 2, b=1
            for _ in 0..5 {
                policy.increment(&"a").unwrap(); // counters 3..=7, a=6
            }
            assert_eq!(policy.frequency(&"a"), Some(6));
            assert_eq!(policy.frequency(&"b"), Some(1));

            // Eighth mutation: b goes to 2, then the pass halves everything.
            policy.increment(&"b").unwrap();
            assert_eq!(policy.frequency(&"a"), Some(3));
            assert_eq!(policy.frequency(&"b"), Some(1));
        }

        #[test]
        fn increment_applies_before_decay_check() {
            // threshold 2: the second mutation triggers the pass, so the
            // result is floor((f + 1) / 2).
            let mut policy = LfuPolicy::new(2);
            policy.insert("x"); // counter 1, x=1
            policy.increment(&"x").unwrap(); // x=2, counter 2 -> decay
            assert_eq!(policy.frequency(&"x"), Some(1));
        }

        #[test]
        fn counter_resets_after_decay() {
            let mut policy = LfuPolicy::new(3);
            policy.insert("a");
            policy.insert("b");
            policy.increment(&"a").unwrap(); // third mutation, decays
            assert_eq!(policy.frequency(&"a"), Some(1));
            assert_eq!(policy.frequency(&"b"), Some(0));

            // A full threshold of further mutations is needed for the next pass.
            policy.increment(&"b").unwrap();
            policy.increment(&"b").unwrap();
            assert_eq!(policy.frequency(&"b"), Some(2));
            policy.increment(&"b").unwrap(); // decays again
            assert_eq!(policy.frequency(&"b"), Some(1));
            assert_eq!(policy.frequency(&"a"), Some(0));
        }

        #[test]
        fn remove_counts_toward_threshold_but_does_not_trigger() {
            let mut policy = LfuPolicy::new(3);
            policy.insert("a"); // counter 1
            policy.insert("b"); // counter 2
            policy.remove(&"b").unwrap(); // counter 3, no pass on remove
            assert_eq!(policy.frequency(&"a"), Some(1));

            // The next increment sees the counter at threshold and decays.
            policy.increment(&"a").unwrap();
            assert_eq!(policy.frequency(&"a"), Some(1)); // floor(2 / 2)
        }

        #[test]
        fn decayed_to_zero_is_first_victim() {
            let mut policy = LfuPolicy::new(3);
            policy.insert("a");
            policy.insert("b");
            policy.increment(&"a").unwrap(); // decays: a=1, b=0
            assert_eq!(policy.frequency(&"b"), Some(0));
            assert_eq!(policy.select_victim(), Ok(&"b"));
        }

        #[test]
        fn tie_order_preserved_across_decay() {
            let mut policy = LfuPolicy::new(100);
            policy.insert("early");
            policy.insert("late");
            for _ in 0..3 {
                policy.increment(&"early").unwrap();
                policy.increment(&"late").unwrap();
            }
            // Force a pass well below the threshold path by exhausting it.
            for _ in 0..92 {
                policy.increment(&"early").unwrap();
            }
            assert_eq!(policy.decay_counter, 0);
            // "late" halved from 4, "early" from 96.
            assert_eq!(policy.frequency(&"late"), Some(2));
            assert_eq!(policy.select_victim(), Ok(&"late"));
        }
    }
}
