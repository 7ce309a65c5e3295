//! # Flightops - Flight Operations Tracker
//!
//! Menu-driven tracker for airlines, destinations, pilots, flights and crew
//! assignments, backed by an embedded SQLite store.
//!
//! Flightops provides:
//! - A relational data model with uniqueness, enum and foreign-key constraints
//! - Per-entity repositories enforcing business rules before writes
//! - A report engine for cross-entity rollups (traffic, workload, routes)
//! - A seed module with realistic fixture data for fresh databases

pub mod airline;
pub mod assignment;
pub mod config;
pub mod destination;
pub mod flight;
pub mod menu;
pub mod pilot;
pub mod repo;
pub mod report;
pub mod seed;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use airline::Airline;
pub use assignment::{Assignment, AssignmentStatus, CrewRole};
pub use destination::Destination;
pub use flight::{Flight, FlightStatus};
pub use pilot::{Pilot, PilotStatus};
pub use storage::FlightStore;

/// Result type alias for Flightops operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Flightops operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A UNIQUE/CHECK/foreign-key constraint rejected a write at the store
    /// boundary. `field` names the offending column where SQLite reports it.
    #[error("constraint violation on {field}")]
    Constraint { field: String },

    /// A business rule failed before any write was attempted.
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid date/time: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    #[error("invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("storage error: {0}")]
    Storage(rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for Error {
    /// Classify SQLite failures: constraint violations become
    /// [`Error::Constraint`] with the column pulled from the message
    /// (e.g. "UNIQUE constraint failed: Destinations.airport_code"),
    /// everything else stays a storage error.
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(ref e, Some(ref msg)) = err {
            if e.code == rusqlite::ErrorCode::ConstraintViolation {
                let field = msg.rsplit(": ").next().unwrap_or(msg).to_string();
                return Error::Constraint { field };
            }
        }
        Error::Storage(err)
    }
}
