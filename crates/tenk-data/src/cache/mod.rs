//! Caching layer for upstream payloads.

pub mod memory;

pub use memory::{
    CacheConfig, CacheEntry, CacheKey, CacheStats, DEFAULT_KEY_SEPARATOR, DEFAULT_TTL,
    UpstreamCache,
};
