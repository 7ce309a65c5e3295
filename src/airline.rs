//! Airline entity
//!
//! Airlines are seeded once and act as the owning carrier for pilots and
//! flights. There is no update path: name and IATA-style code are unique
//! and immutable after creation.

use serde::{Deserialize, Serialize};

/// A carrier operating flights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airline {
    /// Surrogate id, assigned by the store on insert
    pub airline_id: i64,
    /// Full carrier name (unique)
    pub name: String,
    /// IATA-style two-letter code (unique)
    pub code: String,
    pub country: String,
    pub headquarters: Option<String>,
    pub fleet_size: u32,
    pub established_year: Option<i32>,
}

impl Airline {
    /// Create a new airline for insertion (id will be set by the store)
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            airline_id: 0,
            name: name.into(),
            code: code.into(),
            country: country.into(),
            headquarters: None,
            fleet_size: 0,
            established_year: None,
        }
    }

    pub fn with_details(
        mut self,
        headquarters: impl Into<String>,
        fleet_size: u32,
        established_year: i32,
    ) -> Self {
        self.headquarters = Some(headquarters.into());
        self.fleet_size = fleet_size;
        self.established_year = Some(established_year);
        self
    }

    /// Display label used by menu pickers, e.g. "British Airways (BA)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}
