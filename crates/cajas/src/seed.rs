//! Demo data for local development.

use cajas_core::catalog::{Caja, Sucursal};

/// Number of branches the company operates.
pub const SUCURSAL_COUNT: i32 = 20;

/// Upper bound on registers across all branches.
pub const MAX_CAJAS: usize = 100;

const CALLES: [&str; 5] = [
    "18 de Julio",
    "Av. Italia",
    "Bulevar Artigas",
    "Av. Brasil",
    "Rambla Wilson",
];

/// Generates the company branches, numbered from 1.
pub fn generate_sucursales() -> Vec<Sucursal> {
    (1..=SUCURSAL_COUNT)
        .map(|id| {
            let calle = CALLES[(id as usize - 1) % CALLES.len()];
            Sucursal::new(
                id,
                format!("{} {}", calle, 1000 + id * 37),
                format!("2900 {:04}", id * 11),
            )
        })
        .collect()
}

/// Generates registers for the given branches.
///
/// Branch `n` gets `1 + n % 5` registers, alternating between the regular
/// (1) and express (2) register types. Stops at [`MAX_CAJAS`].
pub fn generate_cajas(sucursales: &[Sucursal]) -> Vec<Caja> {
    sucursales
        .iter()
        .flat_map(|sucursal| {
            let count = 1 + sucursal.id % 5;
            (1..=count).map(move |n| {
                let tipo = if n % 2 == 0 { 2 } else { 1 };
                Caja::new(sucursal.id, format!("Caja {n} - Sucursal {}", sucursal.id), tipo)
            })
        })
        .take(MAX_CAJAS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_sucursales() {
        let sucursales = generate_sucursales();

        assert_eq!(sucursales.len(), SUCURSAL_COUNT as usize);
        assert_eq!(sucursales[0].id, 1);
        assert_eq!(sucursales[19].id, 20);
        assert_eq!(sucursales[0].direccion, "18 de Julio 1037");
    }

    #[test]
    fn test_generate_cajas_respects_bounds() {
        let sucursales = generate_sucursales();
        let cajas = generate_cajas(&sucursales);

        assert!(!cajas.is_empty());
        assert!(cajas.len() <= MAX_CAJAS);

        let ids: HashSet<_> = cajas.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), cajas.len());

        let known: HashSet<_> = sucursales.iter().map(|s| s.id).collect();
        assert!(cajas.iter().all(|c| known.contains(&c.sucursal_id)));
    }

    #[test]
    fn test_generate_cajas_per_branch() {
        let sucursales = vec![Sucursal::new(4, "x", "y")];
        let cajas = generate_cajas(&sucursales);

        assert_eq!(cajas.len(), 5);
        assert_eq!(cajas[0].tipo_caja_id, 1);
        assert_eq!(cajas[1].tipo_caja_id, 2);
        assert_eq!(cajas[1].descripcion, "Caja 2 - Sucursal 4");
    }

    #[test]
    fn test_generate_cajas_empty() {
        assert!(generate_cajas(&[]).is_empty());
    }
}
