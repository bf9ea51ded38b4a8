use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::Entity;

/// A cash register belonging to a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caja {
    pub id: Uuid,
    /// The branch this register belongs to.
    pub sucursal_id: i32,
    pub descripcion: String,
    /// Register type identifier.
    pub tipo_caja_id: i32,
}

impl Caja {
    /// Creates a new register with a random ID.
    pub fn new(sucursal_id: i32, descripcion: impl Into<String>, tipo_caja_id: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            sucursal_id,
            descripcion: descripcion.into(),
            tipo_caja_id,
        }
    }

    /// Sets a specific ID for this register (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

impl Entity for Caja {
    type Id = Uuid;

    const ENTITY_TYPE: &'static str = "Caja";
    const CACHE_KEY: &'static str = crate::cache::CAJA_CACHE_KEY;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// A company branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sucursal {
    pub id: i32,
    pub direccion: String,
    pub telefono: String,
}

impl Sucursal {
    pub fn new(id: i32, direccion: impl Into<String>, telefono: impl Into<String>) -> Self {
        Self {
            id,
            direccion: direccion.into(),
            telefono: telefono.into(),
        }
    }
}

impl Entity for Sucursal {
    type Id = i32;

    const ENTITY_TYPE: &'static str = "Sucursal";
    const CACHE_KEY: &'static str = crate::cache::SUCURSAL_CACHE_KEY;

    fn id(&self) -> i32 {
        self.id
    }
}
