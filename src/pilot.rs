//! Pilot entity and status lifecycle
//!
//! Pilots are created once; only their status changes afterwards
//! (Active ⇄ Inactive ⇄ On Leave). Only Active pilots are offered for
//! flight assignment.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Employment status of a pilot. Stored as the CHECK-constrained text
/// values of the `Pilots.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PilotStatus {
    Active,
    Inactive,
    OnLeave,
}

impl PilotStatus {
    /// Get the stored string representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            PilotStatus::Active => "Active",
            PilotStatus::Inactive => "Inactive",
            PilotStatus::OnLeave => "On Leave",
        }
    }

    /// Get all pilot statuses
    pub fn all() -> &'static [PilotStatus] {
        &[
            PilotStatus::Active,
            PilotStatus::Inactive,
            PilotStatus::OnLeave,
        ]
    }
}

impl FromStr for PilotStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PilotStatus::Active),
            "inactive" => Ok(PilotStatus::Inactive),
            "on leave" | "on-leave" | "leave" => Ok(PilotStatus::OnLeave),
            _ => Err(Error::Validation(format!("unknown pilot status: {}", s))),
        }
    }
}

impl std::fmt::Display for PilotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A flight crew member holding a license.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pilot {
    /// Surrogate id, assigned by the store on insert
    pub pilot_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// License number (unique)
    pub license_number: String,
    pub experience_years: u32,
    pub hire_date: NaiveDate,
    /// Owning airline, if any
    pub airline_id: Option<i64>,
    pub status: PilotStatus,
}

impl Pilot {
    /// Create a new pilot for insertion (id will be set by the store,
    /// status defaults to Active)
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        license_number: impl Into<String>,
        experience_years: u32,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            pilot_id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            license_number: license_number.into(),
            experience_years,
            hire_date,
            airline_id: None,
            status: PilotStatus::Active,
        }
    }

    pub fn with_airline(mut self, airline_id: i64) -> Self {
        self.airline_id = Some(airline_id);
        self
    }

    /// "First Last", as shown in crew rollups and schedules
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in PilotStatus::all() {
            let s = status.as_str();
            let parsed: PilotStatus = s.parse().unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("Retired".parse::<PilotStatus>().is_err());
    }

    #[test]
    fn test_full_name() {
        let date = NaiveDate::from_ymd_opt(2003, 3, 15).unwrap();
        let pilot = Pilot::new("John", "Smith", "PIL001", 20, date);
        assert_eq!(pilot.full_name(), "John Smith");
        assert_eq!(pilot.status, PilotStatus::Active);
    }
}
