//! SQLite repository implementation.
//!
//! Implements the repository traits from `cajas_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use cajas_core::catalog::{Caja, Sucursal};
use cajas_core::storage::{
    CajaRepository, Repository, RepositoryError, Result, SucursalRepository,
};

use super::conversions::{row_to_caja, row_to_sucursal};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for all entity types. Foreign
/// keys are enforced, so a branch must exist before its registers.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.pragma_update(None, "foreign_keys", "ON")
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// Caja implementation
// ============================================================================

#[async_trait]
impl Repository<Caja> for SqliteRepository {
    async fn get_all(&self) -> Result<Vec<Caja>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_CAJAS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_caja).map_err(wrap_err)?;

                let mut cajas = Vec::new();
                for row_result in rows {
                    cajas.push(row_result.map_err(wrap_err)?);
                }
                Ok(cajas)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Caja", "*"))
    }

    async fn get_one(&self, id: Uuid) -> Result<Option<Caja>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_CAJA_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_caja) {
                    Ok(caja) => Ok(Some(caja)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Caja", id.to_string()))
    }

    async fn add(&self, caja: &Caja) -> Result<()> {
        let id = caja.id.to_string();
        let sucursal_id = caja.sucursal_id;
        let descripcion = caja.descripcion.clone();
        let tipo_caja_id = caja.tipo_caja_id;
        let caja_id = caja.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CAJA,
                    rusqlite::params![id, sucursal_id, descripcion, tipo_caja_id],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Caja", caja_id))
    }
}

#[async_trait]
impl CajaRepository for SqliteRepository {
    async fn get_all_by_sucursal(&self, sucursal_id: i32) -> Result<Vec<Caja>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CAJAS_BY_SUCURSAL)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([sucursal_id], row_to_caja)
                    .map_err(wrap_err)?;

                let mut cajas = Vec::new();
                for row_result in rows {
                    cajas.push(row_result.map_err(wrap_err)?);
                }
                Ok(cajas)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Caja", "*"))
    }
}

// ============================================================================
// Sucursal implementation
// ============================================================================

#[async_trait]
impl Repository<Sucursal> for SqliteRepository {
    async fn get_all(&self) -> Result<Vec<Sucursal>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_SUCURSALES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_sucursal).map_err(wrap_err)?;

                let mut sucursales = Vec::new();
                for row_result in rows {
                    sucursales.push(row_result.map_err(wrap_err)?);
                }
                Ok(sucursales)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Sucursal", "*"))
    }

    async fn get_one(&self, id: i32) -> Result<Option<Sucursal>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_SUCURSAL_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_sucursal) {
                    Ok(sucursal) => Ok(Some(sucursal)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Sucursal", id.to_string()))
    }

    async fn add(&self, sucursal: &Sucursal) -> Result<()> {
        let id = sucursal.id;
        let direccion = sucursal.direccion.clone();
        let telefono = sucursal.telefono.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_SUCURSAL,
                    rusqlite::params![id, direccion, telefono],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Sucursal", id.to_string()))
    }
}

impl SucursalRepository for SqliteRepository {}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo_with_sucursales(ids: &[i32]) -> SqliteRepository {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        for id in ids {
            let sucursal = Sucursal::new(*id, format!("Direccion {id}"), "2900 0000");
            repo.add(&sucursal).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_empty_database_returns_empty_collections() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let cajas = Repository::<Caja>::get_all(&repo).await.unwrap();
        let sucursales = Repository::<Sucursal>::get_all(&repo).await.unwrap();

        assert!(cajas.is_empty());
        assert!(sucursales.is_empty());
    }

    #[tokio::test]
    async fn test_add_and_get_all_cajas_in_insertion_order() {
        let repo = repo_with_sucursales(&[1, 2]).await;
        let cajas = vec![
            Caja::new(2, "Caja B", 1),
            Caja::new(1, "Caja A", 1),
            Caja::new(2, "Caja C", 3),
        ];
        for caja in &cajas {
            repo.add(caja).await.unwrap();
        }

        let stored = Repository::<Caja>::get_all(&repo).await.unwrap();

        assert_eq!(stored, cajas);
    }

    #[tokio::test]
    async fn test_get_one_caja() {
        let repo = repo_with_sucursales(&[1]).await;
        let caja = Caja::new(1, "Caja 1", 1);
        repo.add(&caja).await.unwrap();

        let found = Repository::<Caja>::get_one(&repo, caja.id).await.unwrap();
        let missing = Repository::<Caja>::get_one(&repo, Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(found, Some(caja));
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_get_all_by_sucursal() {
        let repo = repo_with_sucursales(&[1, 2, 3]).await;
        let r1 = Caja::new(1, "R1", 1);
        let r2 = Caja::new(2, "R2", 1);
        let r3 = Caja::new(1, "R3", 2);
        for caja in [&r1, &r2, &r3] {
            repo.add(caja).await.unwrap();
        }

        assert_eq!(repo.get_all_by_sucursal(1).await.unwrap(), vec![r1, r3]);
        assert_eq!(repo.get_all_by_sucursal(2).await.unwrap(), vec![r2]);
        assert!(repo.get_all_by_sucursal(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_duplicate_caja_maps_to_already_exists() {
        let repo = repo_with_sucursales(&[1]).await;
        let caja = Caja::new(1, "Caja 1", 1);
        repo.add(&caja).await.unwrap();

        let result = repo.add(&caja).await;

        assert_eq!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Caja",
                id: caja.id.to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_add_caja_with_unknown_sucursal_is_invalid() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let result = repo.add(&Caja::new(42, "Huérfana", 1)).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_sucursal_roundtrip() {
        let repo = repo_with_sucursales(&[3, 1]).await;

        let all = Repository::<Sucursal>::get_all(&repo).await.unwrap();
        let one = Repository::<Sucursal>::get_one(&repo, 1).await.unwrap();
        let missing = Repository::<Sucursal>::get_one(&repo, 99).await.unwrap();

        assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(one.map(|s| s.direccion), Some("Direccion 1".to_string()));
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_sucursales_come_back_in_insertion_order_not_id_order() {
        let repo = repo_with_sucursales(&[20, 5, 12]).await;
        repo.add(&Caja::new(5, "Caja 1", 1)).await.unwrap();

        let all = Repository::<Sucursal>::get_all(&repo).await.unwrap();

        assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), vec![20, 5, 12]);
        assert_eq!(repo.get_all_by_sucursal(5).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_duplicate_sucursal_maps_to_already_exists() {
        let repo = repo_with_sucursales(&[1]).await;

        let result = repo.add(&Sucursal::new(1, "Otra", "0")).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Sucursal",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_file_database_persists_across_connections() {
        let path = std::env::temp_dir().join(format!("cajas-test-{}.db", Uuid::new_v4()));
        let path_str = path.to_string_lossy().to_string();
        let caja = Caja::new(1, "Persistente", 1);

        {
            let repo = SqliteRepository::new(&path_str).await.unwrap();
            repo.add(&Sucursal::new(1, "Centro", "1")).await.unwrap();
            repo.add(&caja).await.unwrap();
        }

        let reopened = SqliteRepository::new(&path_str).await.unwrap();
        let cajas = Repository::<Caja>::get_all(&reopened).await.unwrap();
        assert_eq!(cajas, vec![caja]);

        drop(reopened);
        let _ = std::fs::remove_file(&path);
    }
}
