//! Storage layer - SQLite-backed persistence
//!
//! Owns the table definitions and the single long-lived connection shared
//! by all repositories for the process lifetime.

pub mod schema;
pub mod sqlite;

pub use sqlite::{FlightStore, StoreStats};
