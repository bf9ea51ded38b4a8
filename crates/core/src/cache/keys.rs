//! Cache keys.
//!
//! Every entity collection lives under exactly one fixed key. There are no
//! per-record or per-filter keys: filtered and point reads are derived from
//! the cached collection.

/// Cache key for the whole register collection.
pub const CAJA_CACHE_KEY: &str = "Caja";

/// Cache key for the whole branch collection.
pub const SUCURSAL_CACHE_KEY: &str = "Sucursal";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct() {
        assert_ne!(CAJA_CACHE_KEY, SUCURSAL_CACHE_KEY);
    }

    #[test]
    fn test_caja_key_value() {
        assert_eq!(CAJA_CACHE_KEY, "Caja");
    }
}
