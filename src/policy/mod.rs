//! Eviction policy implementations.
//!
//! One strategy ships with the crate: [`lfu::LfuPolicy`], a decaying
//! least-frequently-used policy. Anything implementing
//! [`EvictionPolicy`](crate::traits::EvictionPolicy) can be plugged into
//! [`BoundedCache`](crate::cache::BoundedCache) in its place.

pub mod lfu;

pub use lfu::{LfuPolicy, DEFAULT_DECAY_THRESHOLD};
