use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for basic key-value cache operations.
///
/// Values are replaced wholesale; there is no enumeration or partial update.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key. `Ok(None)` means the key is absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<()>;
}
