//! Crew assignment entity - the flight ↔ pilot join
//!
//! Assignments carry a role (Captain, First Officer, Relief Pilot) and a
//! status. Rows are never updated in place: cancelling crew means inserting
//! a replacement row, so uniqueness of (flight, pilot, role) is scoped to
//! Active rows only. A pilot may regain a role on a flight once their prior
//! assignment in that role is Cancelled or Completed.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Crew role on a flight. Stored as the CHECK-constrained text values of
/// the `Flight_assignments.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrewRole {
    Captain,
    FirstOfficer,
    ReliefPilot,
}

impl CrewRole {
    /// Get the stored string representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            CrewRole::Captain => "Captain",
            CrewRole::FirstOfficer => "First Officer",
            CrewRole::ReliefPilot => "Relief Pilot",
        }
    }

    /// Get all crew roles
    pub fn all() -> &'static [CrewRole] {
        &[CrewRole::Captain, CrewRole::FirstOfficer, CrewRole::ReliefPilot]
    }
}

impl FromStr for CrewRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "captain" => Ok(CrewRole::Captain),
            "first officer" | "first-officer" => Ok(CrewRole::FirstOfficer),
            "relief pilot" | "relief-pilot" | "relief" => Ok(CrewRole::ReliefPilot),
            _ => Err(Error::Validation(format!("unknown crew role: {}", s))),
        }
    }
}

impl std::fmt::Display for CrewRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Active,
    Cancelled,
    Completed,
}

impl AssignmentStatus {
    /// Get the stored string representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Active => "Active",
            AssignmentStatus::Cancelled => "Cancelled",
            AssignmentStatus::Completed => "Completed",
        }
    }

    /// Get all assignment statuses
    pub fn all() -> &'static [AssignmentStatus] {
        &[
            AssignmentStatus::Active,
            AssignmentStatus::Cancelled,
            AssignmentStatus::Completed,
        ]
    }
}

impl FromStr for AssignmentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "active" => Ok(AssignmentStatus::Active),
            "cancelled" | "canceled" => Ok(AssignmentStatus::Cancelled),
            "completed" => Ok(AssignmentStatus::Completed),
            _ => Err(Error::Validation(format!(
                "unknown assignment status: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A crew member assigned to a flight in a specific role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Surrogate id, assigned by the store on insert
    pub assignment_id: i64,
    pub flight_id: i64,
    pub pilot_id: i64,
    pub assignment_date: NaiveDate,
    pub role: CrewRole,
    pub status: AssignmentStatus,
    pub notes: Option<String>,
}

impl Assignment {
    /// Create a new assignment for insertion (id will be set by the store,
    /// role defaults to Captain, status to Active)
    pub fn new(flight_id: i64, pilot_id: i64, assignment_date: NaiveDate) -> Self {
        Self {
            assignment_id: 0,
            flight_id,
            pilot_id,
            assignment_date,
            role: CrewRole::Captain,
            status: AssignmentStatus::Active,
            notes: None,
        }
    }

    pub fn with_role(mut self, role: CrewRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_status(mut self, status: AssignmentStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in CrewRole::all() {
            let s = role.as_str();
            let parsed: CrewRole = s.parse().unwrap();
            assert_eq!(*role, parsed);
        }
    }

    #[test]
    fn test_status_roundtrip() {
        for status in AssignmentStatus::all() {
            let s = status.as_str();
            let parsed: AssignmentStatus = s.parse().unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_defaults() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let assignment = Assignment::new(1, 2, date);
        assert_eq!(assignment.role, CrewRole::Captain);
        assert_eq!(assignment.status, AssignmentStatus::Active);
        assert!(assignment.notes.is_none());
    }
}
