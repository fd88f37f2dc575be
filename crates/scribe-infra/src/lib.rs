//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`.
//! This crate contains the PostgreSQL post store and its in-memory fallback.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `postgres` - PostgreSQL post store via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};
