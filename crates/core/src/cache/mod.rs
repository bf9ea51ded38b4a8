mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{CAJA_CACHE_KEY, SUCURSAL_CACHE_KEY};
pub use serialization::{deserialize_collection, serialize_collection, SerializationError};
pub use traits::Cache;
