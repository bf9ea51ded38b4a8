use std::fmt;
use std::hash::Hash;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::{Caja, Sucursal};

use super::Result;

/// A record identified by an ID of a type chosen by the implementor.
///
/// Each entity type owns exactly one cache key: its whole collection is
/// cached as a single value under [`Entity::CACHE_KEY`].
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Identifier type (e.g. `Uuid` for registers, `i32` for branches).
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Human readable entity name used in errors and logs.
    const ENTITY_TYPE: &'static str;

    /// The single cache key under which the whole collection is stored.
    const CACHE_KEY: &'static str;

    fn id(&self) -> Self::Id;
}

/// Generic repository over an entity type.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Gets every entity, in store order.
    async fn get_all(&self) -> Result<Vec<E>>;

    /// Gets an entity by its ID. Returns `Ok(None)` when absent.
    async fn get_one(&self, id: E::Id) -> Result<Option<E>>;

    /// Adds a new entity.
    async fn add(&self, entity: &E) -> Result<()>;
}

/// Repository for cash register operations.
#[async_trait]
pub trait CajaRepository: Repository<Caja> {
    /// Gets all registers that belong to a branch.
    async fn get_all_by_sucursal(&self, sucursal_id: i32) -> Result<Vec<Caja>>;
}

/// Repository for branch operations.
pub trait SucursalRepository: Repository<Sucursal> {}
