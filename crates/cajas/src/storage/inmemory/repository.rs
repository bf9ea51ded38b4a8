//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use cajas_core::catalog::{filter_cajas_by_sucursal, find_by_id, Caja, Sucursal};
use cajas_core::storage::{
    CajaRepository, Entity, Repository, RepositoryError, Result, SucursalRepository,
};

/// In-memory storage backend for testing.
///
/// Uses `Vec`s wrapped in `Arc<RwLock<_>>` for thread-safe access so that
/// `get_all` returns records in insertion order, like the SQLite backend.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    cajas: Arc<RwLock<Vec<Caja>>>,
    sucursales: Arc<RwLock<Vec<Sucursal>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Appends an entity, rejecting duplicate IDs.
async fn insert_unique<E: Entity>(rows: &RwLock<Vec<E>>, entity: &E) -> Result<()> {
    let mut rows = rows.write().await;
    if find_by_id(&rows, entity.id()).is_some() {
        return Err(RepositoryError::AlreadyExists {
            entity_type: E::ENTITY_TYPE,
            id: entity.id().to_string(),
        });
    }
    rows.push(entity.clone());
    Ok(())
}

#[async_trait]
impl Repository<Caja> for InMemoryRepository {
    async fn get_all(&self) -> Result<Vec<Caja>> {
        Ok(self.cajas.read().await.clone())
    }

    async fn get_one(&self, id: Uuid) -> Result<Option<Caja>> {
        let cajas = self.cajas.read().await;
        Ok(find_by_id(&cajas, id).cloned())
    }

    async fn add(&self, caja: &Caja) -> Result<()> {
        insert_unique(&self.cajas, caja).await
    }
}

#[async_trait]
impl CajaRepository for InMemoryRepository {
    async fn get_all_by_sucursal(&self, sucursal_id: i32) -> Result<Vec<Caja>> {
        let cajas = self.cajas.read().await;
        Ok(filter_cajas_by_sucursal(&cajas, sucursal_id)
            .into_iter()
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Repository<Sucursal> for InMemoryRepository {
    async fn get_all(&self) -> Result<Vec<Sucursal>> {
        Ok(self.sucursales.read().await.clone())
    }

    async fn get_one(&self, id: i32) -> Result<Option<Sucursal>> {
        let sucursales = self.sucursales.read().await;
        Ok(find_by_id(&sucursales, id).cloned())
    }

    async fn add(&self, sucursal: &Sucursal) -> Result<()> {
        insert_unique(&self.sucursales, sucursal).await
    }
}

impl SucursalRepository for InMemoryRepository {}
