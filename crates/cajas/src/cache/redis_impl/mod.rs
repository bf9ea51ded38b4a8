//! Redis cache backend implementation.
//!
//! Provides a shared cache using Redis for multi-instance deployments.
//! Supports connection pooling and TTL.

mod cache;
mod error;

pub use cache::RedisCache;
