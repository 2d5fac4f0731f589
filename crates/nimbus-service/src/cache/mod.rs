//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with a Redis implementation.
//! Weather lookups are cached read-through; override writes invalidate the
//! matching forecast entry instead of writing through.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use redis_cache::{RedisCacheService, RedisCacheServiceParameters};
