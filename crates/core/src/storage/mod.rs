mod error;
mod traits;

pub use error::{RepositoryError, Result};
pub use traits::{CajaRepository, Entity, Repository, SucursalRepository};
