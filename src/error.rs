//! Error types for the freqcache library.
//!
//! ## Key Components
//!
//! - [`NotTrackedError`]: Returned when a policy operation targets a key the
//!   policy does not currently track (e.g. reading a key that was never
//!   written).
//! - [`EmptyPolicyError`]: Returned by victim selection when the policy
//!   tracks no keys.
//! - [`EmptyCacheError`]: Returned by [`BoundedCache::items`](crate::cache::BoundedCache::items)
//!   when the backing store is empty.
//! - [`ConfigError`]: Returned when construction-time parameters are invalid
//!   (e.g. zero capacity, zero decay threshold).
//!
//! All of these are caller-facing contract violations. Nothing in the core
//! retries or recovers from them internally; they propagate synchronously to
//! the caller.
//!
//! ## Example Usage
//!
//! ```
//! use freqcache::builder::CacheBuilder;
//! use freqcache::error::ConfigError;
//! use freqcache::cache::LfuCache;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<LfuCache<String, i32>, ConfigError> =
//!     CacheBuilder::new().capacity(100).try_build();
//! assert!(cache.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad: Result<LfuCache<String, i32>, ConfigError> =
//!     CacheBuilder::new().capacity(0).try_build();
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// NotTrackedError
// ---------------------------------------------------------------------------

/// Error returned when a policy operation targets an untracked key.
///
/// Produced by [`EvictionPolicy::remove`](crate::traits::EvictionPolicy::remove),
/// [`EvictionPolicy::increment`](crate::traits::EvictionPolicy::increment) and
/// [`BoundedCache::read`](crate::cache::BoundedCache::read). Indicates a
/// caller invariant violation: the key was never inserted, or was already
/// removed. Guard with [`BoundedCache::contains`](crate::cache::BoundedCache::contains)
/// when the key's presence is uncertain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotTrackedError;

impl fmt::Display for NotTrackedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key is not tracked by the eviction policy")
    }
}

impl std::error::Error for NotTrackedError {}

// ---------------------------------------------------------------------------
// EmptyPolicyError
// ---------------------------------------------------------------------------

/// Error returned when victim selection runs against an empty policy.
///
/// Produced by [`EvictionPolicy::select_victim`](crate::traits::EvictionPolicy::select_victim)
/// when zero keys are tracked. The cache's write path always ensures the
/// policy is non-empty before asking for a victim, so callers only see this
/// when driving a policy directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPolicyError;

impl fmt::Display for EmptyPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no keys registered with the eviction policy")
    }
}

impl std::error::Error for EmptyPolicyError {}

// ---------------------------------------------------------------------------
// EmptyCacheError
// ---------------------------------------------------------------------------

/// Error returned when enumerating an empty cache.
///
/// Produced by [`BoundedCache::items`](crate::cache::BoundedCache::items)
/// when the backing store holds zero entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCacheError;

impl fmt::Display for EmptyCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cache is empty")
    }
}

impl std::error::Error for EmptyCacheError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build) and
/// [`BoundedCache::try_new`](crate::cache::BoundedCache::try_new). Carries a
/// human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use freqcache::builder::CacheBuilder;
/// use freqcache::cache::LfuCache;
///
/// let err = CacheBuilder::new()
///     .capacity(0)
///     .try_build::<u64, u64>()
///     .unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
