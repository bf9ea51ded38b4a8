//! Generic single-key read-through repository decorator.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use cajas_core::cache::{deserialize_collection, serialize_collection, Cache};
use cajas_core::catalog::{filter_cajas_by_sucursal, find_by_id, Caja, Sucursal};
use cajas_core::storage::{
    CajaRepository, Entity, Repository, RepositoryError, Result, SucursalRepository,
};

/// Read-through cache in front of a repository, one cache key per entity type.
///
/// The whole collection of `E` lives under [`Entity::CACHE_KEY`]:
/// - `get_all` returns the cached collection, or loads it from the
///   repository and caches it with the configured TTL.
/// - `get_one` and `get_all_by_sucursal` scan the result of `get_all`.
///   They never call the repository's own point or filtered queries.
/// - `add` persists, then deletes the key.
///
/// Cache read and populate failures are logged and degrade to the
/// repository. A failed invalidation is returned as
/// [`RepositoryError::CacheInvalidation`] because later reads could serve
/// stale data.
///
/// # Known race
///
/// A reader that misses the cache can load the collection before a
/// concurrent writer persists, then store it after that writer has
/// invalidated. The key then holds a collection without the new record until
/// the next write or until the TTL expires. This decorator does not close
/// that window.
///
/// # Type Parameters
///
/// * `E` - The cached entity type
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedRepository<E, R, C>
where
    E: Entity,
    R: Repository<E>,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Option<Duration>,
    _entity: PhantomData<fn() -> E>,
}

/// Cached register repository.
pub type CachedCajaRepository<R, C> = CachedRepository<Caja, R, C>;

/// Cached branch repository.
pub type CachedSucursalRepository<R, C> = CachedRepository<Sucursal, R, C>;

impl<E, R, C> CachedRepository<E, R, C>
where
    E: Entity,
    R: Repository<E>,
    C: Cache,
{
    /// Creates a new cached repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Expiration for the cached collection, `None` to keep it until invalidated
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Option<Duration>) -> Self {
        Self {
            repository,
            cache,
            ttl,
            _entity: PhantomData,
        }
    }

    /// Removes the cached collection so the next read reloads it.
    ///
    /// Useful after writes that bypass this decorator.
    pub async fn invalidate(&self) -> Result<()> {
        self.cache.delete(E::CACHE_KEY).await.map_err(|err| {
            tracing::error!(
                entity = E::ENTITY_TYPE,
                cache_key = E::CACHE_KEY,
                error = %err,
                "Failed to invalidate cached collection"
            );
            RepositoryError::CacheInvalidation {
                key: E::CACHE_KEY,
                source: err,
            }
        })
    }

    /// Returns the cached collection, or `None` when absent or unreadable.
    async fn read_cache(&self) -> Option<Vec<E>> {
        let bytes = match self.cache.get(E::CACHE_KEY).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(
                    entity = E::ENTITY_TYPE,
                    cache_key = E::CACHE_KEY,
                    error = %err,
                    "Cache read failed, falling back to repository"
                );
                return None;
            }
        };

        match deserialize_collection(&bytes) {
            Ok(entities) => Some(entities),
            Err(err) => {
                // Treated as a miss; the next populate overwrites it.
                tracing::warn!(
                    entity = E::ENTITY_TYPE,
                    cache_key = E::CACHE_KEY,
                    error = %err,
                    "Cached collection deserialization failed"
                );
                None
            }
        }
    }

    /// Stores the full collection under the entity's key.
    async fn populate_cache(&self, entities: &[E]) {
        let bytes = match serialize_collection(entities) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(
                    entity = E::ENTITY_TYPE,
                    error = %err,
                    "Failed to serialize collection for cache"
                );
                return;
            }
        };

        if let Err(err) = self.cache.set(E::CACHE_KEY, &bytes, self.ttl).await {
            tracing::warn!(
                entity = E::ENTITY_TYPE,
                cache_key = E::CACHE_KEY,
                error = %err,
                "Failed to cache collection"
            );
        }
    }
}

#[async_trait]
impl<E, R, C> Repository<E> for CachedRepository<E, R, C>
where
    E: Entity,
    R: Repository<E> + 'static,
    C: Cache + 'static,
{
    async fn get_all(&self) -> Result<Vec<E>> {
        if let Some(entities) = self.read_cache().await {
            tracing::trace!(
                entity = E::ENTITY_TYPE,
                count = entities.len(),
                "Cache hit for collection"
            );
            return Ok(entities);
        }

        tracing::trace!(entity = E::ENTITY_TYPE, "Cache miss for collection");
        let entities = self.repository.get_all().await?;
        self.populate_cache(&entities).await;

        Ok(entities)
    }

    async fn get_one(&self, id: E::Id) -> Result<Option<E>> {
        let entities = self.get_all().await?;
        Ok(find_by_id(&entities, id).cloned())
    }

    async fn add(&self, entity: &E) -> Result<()> {
        // 1. Persist to storage
        self.repository.add(entity).await?;

        // 2. Invalidate cache (will be repopulated on next read)
        self.invalidate().await?;

        tracing::debug!(entity = E::ENTITY_TYPE, id = %entity.id(), "Entity added");
        Ok(())
    }
}

#[async_trait]
impl<R, C> CajaRepository for CachedRepository<Caja, R, C>
where
    R: Repository<Caja> + 'static,
    C: Cache + 'static,
{
    async fn get_all_by_sucursal(&self, sucursal_id: i32) -> Result<Vec<Caja>> {
        let cajas = self.get_all().await?;
        Ok(filter_cajas_by_sucursal(&cajas, sucursal_id)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl<R, C> SucursalRepository for CachedRepository<Sucursal, R, C>
where
    R: Repository<Sucursal> + 'static,
    C: Cache + 'static,
{
}
