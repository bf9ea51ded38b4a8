//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `cajas_core::storage`, plus the [`cached`] decorator that puts
//! a single-key read-through cache in front of any of them.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory` (default): insertion-ordered in-memory backend for tests
//!
//! At least one storage backend must be enabled.

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p cajas --features sqlite"
);

pub mod cached;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
