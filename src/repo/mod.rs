//! Entity repositories
//!
//! One repository per table. Each borrows the shared [`FlightStore`] handle
//! (no global connection state) and enforces the entity's business rules
//! before any write reaches SQLite.

pub mod airlines;
pub mod assignments;
pub mod destinations;
pub mod flights;
pub mod pilots;

pub use airlines::AirlineRepo;
pub use assignments::AssignmentRepo;
pub use destinations::DestinationRepo;
pub use flights::{FlightListing, FlightRepo};
pub use pilots::{PilotRepo, ScheduleEntry};

use chrono::NaiveDateTime;

/// Timestamp column format shared with the historical database files.
/// rusqlite's chrono integration writes a `T` separator, so writes go
/// through this formatter; reads accept either form.
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn fmt_datetime(t: &NaiveDateTime) -> String {
    t.format(DATETIME_FORMAT).to_string()
}
