//! Convenience re-exports for the common use of the crate.

pub use crate::builder::CacheBuilder;
pub use crate::cache::{BoundedCache, LfuCache, DEFAULT_CAPACITY};
pub use crate::error::{ConfigError, EmptyCacheError, EmptyPolicyError, NotTrackedError};
pub use crate::policy::lfu::{LfuPolicy, DEFAULT_DECAY_THRESHOLD};
pub use crate::traits::EvictionPolicy;
