//! Destination entity
//!
//! Airports/destinations are referenced twice by every flight (origin and
//! destination roles). Airport codes are canonicalized to uppercase on every
//! write so lookups and uniqueness are case-insensitive in practice.

use serde::{Deserialize, Serialize};

/// An airport a flight can depart from or arrive at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    /// Surrogate id, assigned by the store on insert
    pub destination_id: i64,
    /// Airport name (unique)
    pub name: String,
    pub country: String,
    /// IATA-style airport code (unique, stored uppercase)
    pub airport_code: String,
    /// Timezone label, e.g. "GMT" or "CET"
    pub timezone: String,
}

impl Destination {
    /// Create a new destination for insertion (id will be set by the store)
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        airport_code: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            destination_id: 0,
            name: name.into(),
            country: country.into(),
            airport_code: airport_code.into(),
            timezone: timezone.into(),
        }
    }

    /// Display label used by menu pickers, e.g. "London Heathrow (LHR)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.airport_code)
    }
}
