//! Cached repository decorator.
//!
//! This module provides a decorator that wraps a repository with a
//! read-through cache restricted to a single key per entity type:
//!
//! - **Reads**: Check the entity's one key first; on miss load the whole
//!   collection from the repository and populate the key. Filtered and point
//!   reads are derived from that collection, never queried separately.
//! - **Writes**: Persist to repository, then invalidate the key. The next read
//!   repopulates it.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("cajas.db").await?);
//! let cache = Arc::new(MemoryCache::new(1_000));
//!
//! let cajas = CachedRepository::<Caja, _, _>::new(repo, cache, Some(Duration::from_secs(600)));
//! let branch_one = cajas.get_all_by_sucursal(1).await?;
//! ```

mod repository;

pub use repository::{CachedCajaRepository, CachedRepository, CachedSucursalRepository};
