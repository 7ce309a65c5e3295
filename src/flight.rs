//! Flight entity and status lifecycle
//!
//! A flight references one airline and two destinations (origin and
//! destination roles over the same table). Origin and destination must
//! differ; the repository enforces that before any insert is attempted.
//! After creation only departure time, arrival time and status may change.

use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Operational status of a flight. Stored as the CHECK-constrained text
/// values of the `Flights.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightStatus {
    Scheduled,
    Delayed,
    Cancelled,
    Completed,
    InFlight,
}

impl FlightStatus {
    /// Get the stored string representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Completed => "Completed",
            FlightStatus::InFlight => "In-Flight",
        }
    }

    /// Get all flight statuses
    pub fn all() -> &'static [FlightStatus] {
        &[
            FlightStatus::Scheduled,
            FlightStatus::Delayed,
            FlightStatus::Cancelled,
            FlightStatus::Completed,
            FlightStatus::InFlight,
        ]
    }
}

impl FromStr for FlightStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(FlightStatus::Scheduled),
            "delayed" => Ok(FlightStatus::Delayed),
            "cancelled" | "canceled" => Ok(FlightStatus::Cancelled),
            "completed" => Ok(FlightStatus::Completed),
            "in-flight" | "in flight" | "inflight" => Ok(FlightStatus::InFlight),
            _ => Err(Error::Validation(format!("unknown flight status: {}", s))),
        }
    }
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduled flight between two destinations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    /// Surrogate id, assigned by the store on insert
    pub flight_id: i64,
    /// Flight number, e.g. "BA2000" (unique, stored uppercase)
    pub flight_number: String,
    pub airline_id: i64,
    /// Origin airport (Destinations row)
    pub origin_id: i64,
    /// Destination airport (Destinations row); must differ from origin
    pub destination_id: i64,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub status: FlightStatus,
    pub aircraft_type: String,
    /// Seat capacity of the assigned aircraft
    pub capacity: u32,
}

impl Flight {
    /// Create a new flight for insertion (id will be set by the store,
    /// status defaults to Scheduled)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_number: impl Into<String>,
        airline_id: i64,
        origin_id: i64,
        destination_id: i64,
        departure_time: NaiveDateTime,
        arrival_time: NaiveDateTime,
        aircraft_type: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            flight_id: 0,
            flight_number: flight_number.into(),
            airline_id,
            origin_id,
            destination_id,
            departure_time,
            arrival_time,
            status: FlightStatus::Scheduled,
            aircraft_type: aircraft_type.into(),
            capacity,
        }
    }

    pub fn with_status(mut self, status: FlightStatus) -> Self {
        self.status = status;
        self
    }
}
