//! # Hyperlocal Infrastructure
//!
//! Concrete implementations of the ports defined in `hyperlocal-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL gateway via SeaORM
//!
//! The in-memory gateway is always available and needs no flags.

pub mod database;

// Re-exports - In-Memory
pub use database::{InMemoryPostRepository, InMemoryUserRepository};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresUserRepository};
