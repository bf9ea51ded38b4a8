//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use cajas_core::catalog::{Caja, Sucursal};
use rusqlite::Row;
use uuid::Uuid;

/// Convert a SQLite row to a Sucursal.
///
/// Expected columns: id, direccion, telefono
pub fn row_to_sucursal(row: &Row) -> rusqlite::Result<Sucursal> {
    Ok(Sucursal {
        id: row.get(0)?,
        direccion: row.get(1)?,
        telefono: row.get(2)?,
    })
}

/// Convert a SQLite row to a Caja.
///
/// Expected columns: id, sucursal_id, descripcion, tipo_caja_id
pub fn row_to_caja(row: &Row) -> rusqlite::Result<Caja> {
    let id: String = row.get(0)?;

    Ok(Caja {
        id: parse_uuid(&id)?,
        sucursal_id: row.get(1)?,
        descripcion: row.get(2)?,
        tipo_caja_id: row.get(3)?,
    })
}

/// Parse a UUID from string.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_parse_uuid_valid() {
        let uuid = parse_uuid("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(uuid.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_parse_uuid_invalid() {
        assert!(parse_uuid("not-a-uuid").is_err());
    }

    #[test]
    fn test_row_to_caja() {
        let conn = Connection::open_in_memory().unwrap();
        let caja = conn
            .query_row(
                "SELECT '550e8400-e29b-41d4-a716-446655440000', 3, 'Caja 3', 2",
                [],
                row_to_caja,
            )
            .unwrap();

        assert_eq!(caja.id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(caja.sucursal_id, 3);
        assert_eq!(caja.descripcion, "Caja 3");
        assert_eq!(caja.tipo_caja_id, 2);
    }

    #[test]
    fn test_row_to_caja_invalid_uuid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.query_row("SELECT 'garbage', 1, 'x', 1", [], row_to_caja);

        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(..))
        ));
    }

    #[test]
    fn test_row_to_sucursal() {
        let conn = Connection::open_in_memory().unwrap();
        let sucursal = conn
            .query_row(
                "SELECT 5, 'Rambla 500', '2400 5555'",
                [],
                row_to_sucursal,
            )
            .unwrap();

        assert_eq!(sucursal, Sucursal::new(5, "Rambla 500", "2400 5555"));
    }
}
