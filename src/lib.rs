//! freqcache: a thread-safe, size-bounded key-value cache with a pluggable
//! eviction algorithm.
//!
//! The shipped algorithm is least-frequently-used with periodic frequency
//! decay, so counters cannot grow without bound and formerly-hot keys that
//! went cold become evictable again.
//!
//! Diagnostic tracing goes through the [`tracing`] facade; with no
//! subscriber installed the trace points are no-ops and behavior is
//! unchanged.
//!
//! ```
//! use freqcache::builder::CacheBuilder;
//!
//! let cache = CacheBuilder::new()
//!     .capacity(100)
//!     .try_build::<String, Vec<u8>>()
//!     .unwrap();
//!
//! cache.write("page".into(), vec![0u8; 16]);
//! assert!(cache.contains(&"page".into()));
//! ```

pub mod builder;
pub mod cache;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;
