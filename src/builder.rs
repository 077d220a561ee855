//! Builder for the shipped decaying-LFU cache.
//!
//! Both tunables are construction-time only; there is no runtime
//! reconfiguration API.
//!
//! ## Example
//!
//! ```rust
//! use freqcache::builder::CacheBuilder;
//!
//! let cache = CacheBuilder::new()
//!     .capacity(1_000)
//!     .decay_threshold(500)
//!     .try_build::<u64, String>()
//!     .unwrap();
//!
//! cache.write(1, "hello".to_string());
//! assert_eq!(cache.read(&1), Ok("hello".to_string()));
//! ```

use std::hash::Hash;

use crate::cache::{LfuCache, DEFAULT_CAPACITY};
use crate::error::ConfigError;
use crate::policy::lfu::{LfuPolicy, DEFAULT_DECAY_THRESHOLD};

/// Builder for [`LfuCache`] instances.
///
/// Defaults: capacity 50, decay threshold 100.
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: usize,
    decay_threshold: usize,
}

impl CacheBuilder {
    /// Creates a builder with the default tunables.
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            decay_threshold: DEFAULT_DECAY_THRESHOLD,
        }
    }

    /// Sets the maximum number of entries. Must be positive.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets how many mutating policy operations elapse between decay
    /// passes. Must be positive.
    pub fn decay_threshold(mut self, decay_threshold: usize) -> Self {
        self.decay_threshold = decay_threshold;
        self
    }

    /// Builds the cache, validating the configured tunables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` or `decay_threshold` is zero.
    pub fn try_build<K, V>(self) -> Result<LfuCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        if self.decay_threshold == 0 {
            return Err(ConfigError::new("decay threshold must be > 0"));
        }
        LfuCache::try_new(LfuPolicy::new(self.decay_threshold), self.capacity)
    }
}

impl Default for CacheBuilder {
    fn default() -> Self {
        Self::new()
    }
}
