//! # tautan-database
//!
//! PostgreSQL persistence layer: connection pool, embedded migrations, and
//! repositories. `ChatRepository` implements the `ChatStore` gateway trait
//! consumed by the real-time engine.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
