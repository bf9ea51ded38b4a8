//! Pure functions for serializing/deserializing entity collections to/from cache bytes.
//!
//! These functions use JSON serialization for cache storage, providing human-readable
//! cache values that are easy to debug and inspect.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a slice of entities to JSON bytes.
///
/// An empty slice encodes to `[]`, which is a present (not absent) value.
pub fn serialize_collection<T: Serialize>(items: &[T]) -> Result<Vec<u8>> {
    serde_json::to_vec(items).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of entities.
pub fn deserialize_collection<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Caja, Sucursal};
    use uuid::Uuid;

    fn test_caja_id() -> Uuid {
        Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap()
    }

    #[test]
    fn test_roundtrip_cajas_preserves_order() {
        let cajas = vec![
            Caja::new(2, "Caja 2", 1).with_id(test_caja_id()),
            Caja::new(1, "Caja 1", 3)
                .with_id(Uuid::parse_str("7ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap()),
        ];

        let bytes = serialize_collection(&cajas).expect("serialize should succeed");
        let deserialized: Vec<Caja> =
            deserialize_collection(&bytes).expect("deserialize should succeed");

        assert_eq!(cajas, deserialized);
    }

    #[test]
    fn test_roundtrip_sucursales() {
        let sucursales = vec![Sucursal::new(1, "18 de Julio 1000", "2900 0001")];

        let bytes = serialize_collection(&sucursales).expect("serialize should succeed");
        let deserialized: Vec<Sucursal> =
            deserialize_collection(&bytes).expect("deserialize should succeed");

        assert_eq!(sucursales, deserialized);
    }

    #[test]
    fn test_serialize_empty_collection() {
        let cajas: Vec<Caja> = vec![];

        let bytes = serialize_collection(&cajas).expect("serialize should succeed");
        let deserialized: Vec<Caja> =
            deserialize_collection(&bytes).expect("deserialize should succeed");

        assert!(deserialized.is_empty());
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn test_deserialize_malformed_bytes() {
        let result: Result<Vec<Caja>> = deserialize_collection(b"not valid json");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_deserialize_wrong_shape() {
        // A single object is not a collection
        let result: Result<Vec<Sucursal>> =
            deserialize_collection(br#"{"id": 1, "direccion": "x", "telefono": "y"}"#);

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }
}
