use std::collections::BTreeMap;

use crate::storage::Entity;

use super::types::Caja;

/// Returns the first entity whose ID matches.
pub fn find_by_id<E: Entity>(entities: &[E], id: E::Id) -> Option<&E> {
    entities.iter().find(|entity| entity.id() == id)
}

/// Filters registers by branch ID, preserving collection order.
pub fn filter_cajas_by_sucursal(cajas: &[Caja], sucursal_id: i32) -> Vec<&Caja> {
    cajas
        .iter()
        .filter(|caja| caja.sucursal_id == sucursal_id)
        .collect()
}

/// Groups registers by branch ID. Branches without registers are absent.
pub fn group_cajas_by_sucursal(cajas: &[Caja]) -> BTreeMap<i32, Vec<&Caja>> {
    let mut groups: BTreeMap<i32, Vec<&Caja>> = BTreeMap::new();
    for caja in cajas {
        groups.entry(caja.sucursal_id).or_default().push(caja);
    }
    groups
}
