//! Pilot repository
//!
//! Besides CRUD this carries the pilot schedule view: a pilot's Active
//! assignments joined out to flight, airline and both destination roles.

use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension};

use crate::assignment::CrewRole;
use crate::flight::FlightStatus;
use crate::pilot::{Pilot, PilotStatus};
use crate::storage::FlightStore;
use crate::{Error, Result};

/// Repository for the Pilots table
pub struct PilotRepo<'a> {
    store: &'a FlightStore,
}

/// One row of a pilot's schedule
#[derive(Debug, Clone)]
pub struct ScheduleEntry {
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub flight_status: FlightStatus,
    pub role: CrewRole,
}

impl ScheduleEntry {
    /// "Origin → Destination" label
    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

impl<'a> PilotRepo<'a> {
    pub fn new(store: &'a FlightStore) -> Self {
        Self { store }
    }

    /// Insert a pilot and return their assigned id
    pub fn create(&self, pilot: &Pilot) -> Result<i64> {
        if pilot.first_name.trim().is_empty()
            || pilot.last_name.trim().is_empty()
            || pilot.license_number.trim().is_empty()
        {
            return Err(Error::Validation(
                "pilot name and license number are required".to_string(),
            ));
        }

        self.store.conn().execute(
            r#"
            INSERT INTO Pilots (first_name, last_name, license_number, experience_years, hire_date, airline_id, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                pilot.first_name,
                pilot.last_name,
                pilot.license_number,
                pilot.experience_years,
                pilot.hire_date,
                pilot.airline_id,
                pilot.status.as_str(),
            ],
        )?;
        Ok(self.store.conn().last_insert_rowid())
    }

    /// All pilots in identity order
    pub fn list(&self) -> Result<Vec<Pilot>> {
        self.query_pilots("ORDER BY pilot_id", &[])
    }

    /// Pilots with Active status, offered for flight assignment
    pub fn list_active(&self) -> Result<Vec<Pilot>> {
        self.query_pilots("WHERE status = ?1 ORDER BY pilot_id", &[&PilotStatus::Active.as_str()])
    }

    /// Look up a pilot by id
    pub fn get(&self, pilot_id: i64) -> Result<Option<Pilot>> {
        self.store
            .conn()
            .query_row(
                "SELECT pilot_id, first_name, last_name, license_number, experience_years, hire_date, airline_id, status
                 FROM Pilots WHERE pilot_id = ?1",
                [pilot_id],
                Self::row_to_pilot,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Change a pilot's employment status
    pub fn set_status(&self, pilot_id: i64, status: PilotStatus) -> Result<()> {
        let updated = self.store.conn().execute(
            "UPDATE Pilots SET status = ?1 WHERE pilot_id = ?2",
            params![status.as_str(), pilot_id],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("pilot {}", pilot_id)));
        }
        Ok(())
    }

    /// A pilot's Active assignments with route and timing, ordered by
    /// departure
    pub fn schedule(&self, pilot_id: i64) -> Result<Vec<ScheduleEntry>> {
        let mut stmt = self.store.conn().prepare(
            r#"
            SELECT f.flight_number, a.airline_name, o.destination_name, d.destination_name,
                   f.departure_time, f.arrival_time, f.status, fa.role
            FROM Flight_assignments fa
            JOIN Flights f ON fa.flight_id = f.flight_id
            JOIN Airlines a ON f.airline_id = a.airline_id
            JOIN Destinations o ON f.origin_id = o.destination_id
            JOIN Destinations d ON f.destination_id = d.destination_id
            WHERE fa.pilot_id = ?1 AND fa.status = 'Active'
            ORDER BY f.departure_time
            "#,
        )?;

        let entries = stmt
            .query_map([pilot_id], |row| {
                let status_str: String = row.get(6)?;
                let role_str: String = row.get(7)?;
                Ok(ScheduleEntry {
                    flight_number: row.get(0)?,
                    airline: row.get(1)?,
                    origin: row.get(2)?,
                    destination: row.get(3)?,
                    departure_time: row.get(4)?,
                    arrival_time: row.get(5)?,
                    flight_status: parse_column(6, &status_str)?,
                    role: parse_column(7, &role_str)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }

    fn query_pilots(&self, tail: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<Pilot>> {
        let mut stmt = self.store.conn().prepare(&format!(
            "SELECT pilot_id, first_name, last_name, license_number, experience_years, hire_date, airline_id, status
             FROM Pilots {}",
            tail
        ))?;

        let pilots = stmt
            .query_map(params, Self::row_to_pilot)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(pilots)
    }

    fn row_to_pilot(row: &rusqlite::Row) -> rusqlite::Result<Pilot> {
        let status_str: String = row.get(7)?;
        Ok(Pilot {
            pilot_id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            license_number: row.get(3)?,
            experience_years: row.get(4)?,
            hire_date: row.get(5)?,
            airline_id: row.get(6)?,
            status: parse_column(7, &status_str)?,
        })
    }
}

/// Convert a stored enum string, mapping parse failures into rusqlite's
/// column conversion error so they surface through the usual channel.
pub(crate) fn parse_column<T: std::str::FromStr<Err = Error>>(
    index: usize,
    value: &str,
) -> rusqlite::Result<T> {
    value.parse().map_err(|e: Error| {
        rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_pilot(license: &str) -> Pilot {
        let date = NaiveDate::from_ymd_opt(2011, 1, 10).unwrap();
        Pilot::new("Michael", "Brown", license, 12, date)
    }

    #[test]
    fn test_create_and_get() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = PilotRepo::new(&store);

        let id = repo.create(&sample_pilot("PIL008")).unwrap();
        let pilot = repo.get(id).unwrap().unwrap();

        assert_eq!(pilot.license_number, "PIL008");
        assert_eq!(pilot.status, PilotStatus::Active);
        assert_eq!(pilot.hire_date, NaiveDate::from_ymd_opt(2011, 1, 10).unwrap());
    }

    #[test]
    fn test_duplicate_license_rejected() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = PilotRepo::new(&store);

        repo.create(&sample_pilot("PIL001")).unwrap();
        let err = repo.create(&sample_pilot("PIL001")).unwrap_err();

        match err {
            Error::Constraint { field } => assert!(field.contains("license_number")),
            other => panic!("expected constraint error, got {other:?}"),
        }
    }

    #[test]
    fn test_list_active_excludes_on_leave() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = PilotRepo::new(&store);

        let id_a = repo.create(&sample_pilot("PIL001")).unwrap();
        let id_b = repo.create(&sample_pilot("PIL002")).unwrap();
        repo.set_status(id_b, PilotStatus::OnLeave).unwrap();

        let active = repo.list_active().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].pilot_id, id_a);

        assert_eq!(repo.list().unwrap().len(), 2);
    }

    #[test]
    fn test_set_status_missing_pilot_is_not_found() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = PilotRepo::new(&store);

        assert!(matches!(
            repo.set_status(42, PilotStatus::Inactive),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_schedule_joins_route_and_skips_cancelled() {
        use crate::airline::Airline;
        use crate::assignment::{Assignment, AssignmentStatus};
        use crate::destination::Destination;
        use crate::flight::Flight;
        use crate::repo::{AirlineRepo, AssignmentRepo, DestinationRepo, FlightRepo};
        use chrono::NaiveDateTime;

        let store = FlightStore::open_in_memory().unwrap();
        AirlineRepo::new(&store)
            .create(&Airline::new("KLM", "KL", "Netherlands"))
            .unwrap();
        let destinations = DestinationRepo::new(&store);
        destinations
            .create(&Destination::new("Amsterdam Schiphol", "Netherlands", "AMS", "CET"))
            .unwrap();
        destinations
            .create(&Destination::new("Frankfurt am Main", "Germany", "FRA", "CET"))
            .unwrap();

        let dt = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        let flights = FlightRepo::new(&store);
        let with_crew = flights
            .create(&Flight::new(
                "KL1000", 1, 1, 2,
                dt("2026-08-09 09:00:00"),
                dt("2026-08-09 10:15:00"),
                "Embraer E190",
                114,
            ))
            .unwrap();
        let cancelled_only = flights
            .create(&Flight::new(
                "KL1001", 1, 2, 1,
                dt("2026-08-09 12:00:00"),
                dt("2026-08-09 13:15:00"),
                "Embraer E190",
                114,
            ))
            .unwrap();

        let repo = PilotRepo::new(&store);
        let pilot = repo.create(&sample_pilot("PIL008")).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let assignments = AssignmentRepo::new(&store);
        assignments
            .create(&Assignment::new(with_crew, pilot, date).with_role(CrewRole::FirstOfficer))
            .unwrap();
        assignments
            .create(
                &Assignment::new(cancelled_only, pilot, date)
                    .with_status(AssignmentStatus::Cancelled),
            )
            .unwrap();

        let schedule = repo.schedule(pilot).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].flight_number, "KL1000");
        assert_eq!(schedule[0].route(), "Amsterdam Schiphol → Frankfurt am Main");
        assert_eq!(schedule[0].role, CrewRole::FirstOfficer);
    }
}
