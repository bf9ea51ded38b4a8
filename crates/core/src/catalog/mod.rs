mod operations;
mod types;

pub use operations::{filter_cajas_by_sucursal, find_by_id, group_cajas_by_sucursal};
pub use types::{Caja, Sucursal};
