//! Redis cache implementation.
//!
//! Each entity collection is a single Redis string value. `SETEX` is used
//! when an expiration is configured, plain `SET` otherwise.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use cajas_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Shared collection cache stored in Redis.
///
/// Cloning the inner `ConnectionManager` is cheap; every operation works on
/// its own clone so `&self` is enough.
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    /// Connects to the Redis server at `url`, e.g. `redis://localhost:6379`.
    ///
    /// Fails with `CacheError::ConnectionFailed` when the server is
    /// unreachable and `CacheError::OperationFailed` for a malformed URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = ConnectionManager::new(client).await.map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

/// Seconds for `SETEX`, which rejects 0.
fn expire_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(map_redis_error)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn.clone();
        let result = match ttl {
            Some(ttl) => conn.set_ex::<_, _, ()>(key, value, expire_seconds(ttl)).await,
            None => conn.set::<_, _, ()>(key, value).await,
        };
        result.map_err(map_redis_error)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(map_redis_error)
    }
}
