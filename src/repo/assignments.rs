//! Crew assignment repository
//!
//! The duplicate guard runs before every insert: an Active assignment for
//! the same (flight, pilot, role) tuple rejects the new row with a
//! validation error instead of letting the partial unique index fire.

use rusqlite::params;

use crate::assignment::{Assignment, AssignmentStatus, CrewRole};
use crate::storage::FlightStore;
use crate::{Error, Result};

use super::pilots::parse_column;

/// Repository for the Flight_assignments table
pub struct AssignmentRepo<'a> {
    store: &'a FlightStore,
}

impl<'a> AssignmentRepo<'a> {
    pub fn new(store: &'a FlightStore) -> Self {
        Self { store }
    }

    /// Insert an assignment and return its assigned id.
    ///
    /// Rejects a duplicate Active assignment for the same
    /// (flight, pilot, role) tuple before anything is written. History rows
    /// (Cancelled/Completed) do not block re-assignment.
    pub fn create(&self, assignment: &Assignment) -> Result<i64> {
        if assignment.status == AssignmentStatus::Active
            && self.has_active(assignment.flight_id, assignment.pilot_id, assignment.role)?
        {
            return Err(Error::Validation(format!(
                "pilot {} is already assigned to flight {} as {}",
                assignment.pilot_id, assignment.flight_id, assignment.role
            )));
        }

        self.store.conn().execute(
            r#"
            INSERT INTO Flight_assignments (flight_id, pilot_id, assignment_date, role, status, notes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                assignment.flight_id,
                assignment.pilot_id,
                assignment.assignment_date,
                assignment.role.as_str(),
                assignment.status.as_str(),
                assignment.notes,
            ],
        )?;
        Ok(self.store.conn().last_insert_rowid())
    }

    /// Whether an Active assignment exists for the tuple
    pub fn has_active(&self, flight_id: i64, pilot_id: i64, role: CrewRole) -> Result<bool> {
        let count: i64 = self.store.conn().query_row(
            "SELECT COUNT(*) FROM Flight_assignments
             WHERE flight_id = ?1 AND pilot_id = ?2 AND role = ?3 AND status = 'Active'",
            params![flight_id, pilot_id, role.as_str()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// All assignments for a flight, Active and historical
    pub fn list_for_flight(&self, flight_id: i64) -> Result<Vec<Assignment>> {
        let mut stmt = self.store.conn().prepare(
            "SELECT assignment_id, flight_id, pilot_id, assignment_date, role, status, notes
             FROM Flight_assignments WHERE flight_id = ?1 ORDER BY assignment_id",
        )?;

        let assignments = stmt
            .query_map([flight_id], Self::row_to_assignment)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(assignments)
    }

    /// Number of Active assignment rows across all flights
    pub fn count_active(&self) -> Result<usize> {
        let count: i64 = self.store.conn().query_row(
            "SELECT COUNT(*) FROM Flight_assignments WHERE status = 'Active'",
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn row_to_assignment(row: &rusqlite::Row) -> rusqlite::Result<Assignment> {
        let role_str: String = row.get(4)?;
        let status_str: String = row.get(5)?;
        Ok(Assignment {
            assignment_id: row.get(0)?,
            flight_id: row.get(1)?,
            pilot_id: row.get(2)?,
            assignment_date: row.get(3)?,
            role: parse_column(4, &role_str)?,
            status: parse_column(5, &status_str)?,
            notes: row.get(6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airline::Airline;
    use crate::destination::Destination;
    use crate::flight::Flight;
    use crate::pilot::Pilot;
    use crate::repo::{AirlineRepo, DestinationRepo, FlightRepo, PilotRepo};
    use chrono::{NaiveDate, NaiveDateTime};

    /// One airline, two destinations, one flight (id 1), one pilot (id 1)
    fn store_with_flight() -> FlightStore {
        let store = FlightStore::open_in_memory().unwrap();
        AirlineRepo::new(&store)
            .create(&Airline::new("Emirates", "EK", "UAE"))
            .unwrap();
        let destinations = DestinationRepo::new(&store);
        destinations
            .create(&Destination::new("Dubai International", "UAE", "DXB", "GST"))
            .unwrap();
        destinations
            .create(&Destination::new("Singapore Changi", "Singapore", "SIN", "SGT"))
            .unwrap();

        let dt = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        FlightRepo::new(&store)
            .create(&Flight::new(
                "EK6000",
                1,
                1,
                2,
                dt("2026-08-12 10:00:00"),
                dt("2026-08-12 17:00:00"),
                "Airbus A380",
                525,
            ))
            .unwrap();

        let hire = NaiveDate::from_ymd_opt(2009, 9, 5).unwrap();
        PilotRepo::new(&store)
            .create(&Pilot::new("Emily", "Davis", "PIL009", 14, hire))
            .unwrap();
        store
    }

    fn assignment_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_duplicate_active_assignment_rejected_before_write() {
        let store = store_with_flight();
        let repo = AssignmentRepo::new(&store);

        repo.create(&Assignment::new(1, 1, assignment_date())).unwrap();
        let err = repo
            .create(&Assignment::new(1, 1, assignment_date()))
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(repo.list_for_flight(1).unwrap().len(), 1);
    }

    #[test]
    fn test_same_pilot_in_different_role_allowed() {
        let store = store_with_flight();
        let repo = AssignmentRepo::new(&store);

        repo.create(&Assignment::new(1, 1, assignment_date())).unwrap();
        repo.create(
            &Assignment::new(1, 1, assignment_date()).with_role(CrewRole::ReliefPilot),
        )
        .unwrap();

        assert_eq!(repo.list_for_flight(1).unwrap().len(), 2);
    }

    #[test]
    fn test_reassignment_after_cancellation_allowed() {
        let store = store_with_flight();
        let repo = AssignmentRepo::new(&store);

        repo.create(
            &Assignment::new(1, 1, assignment_date())
                .with_status(AssignmentStatus::Cancelled),
        )
        .unwrap();

        // the cancelled row is history, not a block
        repo.create(&Assignment::new(1, 1, assignment_date())).unwrap();

        let rows = repo.list_for_flight(1).unwrap();
        assert_eq!(rows.len(), 2);
        let active: Vec<_> = rows
            .iter()
            .filter(|a| a.status == AssignmentStatus::Active)
            .collect();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_schema_backstop_on_direct_insert() {
        let store = store_with_flight();

        let insert = "INSERT INTO Flight_assignments (flight_id, pilot_id, role, status)
                      VALUES (1, 1, 'Captain', 'Active')";
        store.conn().execute(insert, []).unwrap();
        let err = store.conn().execute(insert, []).unwrap_err();
        let err: Error = err.into();
        assert!(matches!(err, Error::Constraint { .. }));
    }

    #[test]
    fn test_unknown_flight_rejected_by_foreign_key() {
        let store = store_with_flight();
        let repo = AssignmentRepo::new(&store);

        let err = repo
            .create(&Assignment::new(99, 1, assignment_date()))
            .unwrap_err();
        assert!(matches!(err, Error::Constraint { .. }));
    }
}
