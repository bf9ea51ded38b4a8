//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Branches table. `id` is caller-assigned; `seq` records insertion order.
CREATE TABLE IF NOT EXISTS sucursales (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id INTEGER NOT NULL UNIQUE,
    direccion TEXT NOT NULL,
    telefono TEXT NOT NULL
);

-- Cash registers table
CREATE TABLE IF NOT EXISTS cajas (
    id TEXT PRIMARY KEY,
    sucursal_id INTEGER NOT NULL,
    descripcion TEXT NOT NULL,
    tipo_caja_id INTEGER NOT NULL,
    FOREIGN KEY (sucursal_id) REFERENCES sucursales(id)
);

CREATE INDEX IF NOT EXISTS idx_cajas_sucursal_id ON cajas(sucursal_id);
"#;

// Branch queries
pub const INSERT_SUCURSAL: &str = r#"
INSERT INTO sucursales (id, direccion, telefono)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_SUCURSALES: &str = r#"
SELECT id, direccion, telefono
FROM sucursales
ORDER BY seq ASC
"#;

pub const SELECT_SUCURSAL_BY_ID: &str = r#"
SELECT id, direccion, telefono
FROM sucursales
WHERE id = ?1
"#;

// Cash register queries
pub const INSERT_CAJA: &str = r#"
INSERT INTO cajas (id, sucursal_id, descripcion, tipo_caja_id)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_CAJAS: &str = r#"
SELECT id, sucursal_id, descripcion, tipo_caja_id
FROM cajas
ORDER BY rowid ASC
"#;

pub const SELECT_CAJA_BY_ID: &str = r#"
SELECT id, sucursal_id, descripcion, tipo_caja_id
FROM cajas
WHERE id = ?1
"#;

pub const SELECT_CAJAS_BY_SUCURSAL: &str = r#"
SELECT id, sucursal_id, descripcion, tipo_caja_id
FROM cajas
WHERE sucursal_id = ?1
ORDER BY rowid ASC
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS sucursales"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS cajas"));
        assert!(CREATE_TABLES.contains("seq INTEGER PRIMARY KEY AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_SUCURSAL.contains("INSERT"));
        assert!(SELECT_SUCURSALES.contains("ORDER BY seq"));
        assert!(SELECT_SUCURSAL_BY_ID.contains("WHERE id"));

        assert!(INSERT_CAJA.contains("INSERT"));
        assert!(SELECT_CAJAS.contains("ORDER BY rowid"));
        assert!(SELECT_CAJA_BY_ID.contains("WHERE id"));
        assert!(SELECT_CAJAS_BY_SUCURSAL.contains("sucursal_id = ?1"));
    }
}
