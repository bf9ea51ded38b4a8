//! Functional core for the cajas project.
//!
//! Holds the domain types, the repository and cache traits, cache key
//! constants and the pure functions that derive filtered or point reads from
//! a whole collection. Nothing in this crate performs I/O.

pub mod cache;
pub mod catalog;
pub mod storage;
