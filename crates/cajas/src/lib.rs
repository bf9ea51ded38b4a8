//! Read-through cached repositories for cash registers (`Caja`) and
//! branches (`Sucursal`).
//!
//! The domain types and traits live in `cajas_core`. This crate provides the
//! concrete cache and storage backends plus the [`storage::cached`] decorator
//! that keeps each entity collection under a single cache key.

pub mod cache;
pub mod config;
pub mod seed;
pub mod storage;
