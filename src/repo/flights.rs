//! Flight repository
//!
//! Carries the filtered flight listing used by the view menu: every filter
//! variant returns the same crew-rollup view, where the Active crew of each
//! flight is concatenated into one display string.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, OptionalExtension, ToSql};

use super::fmt_datetime;
use super::pilots::parse_column;
use crate::flight::{Flight, FlightStatus};
use crate::storage::FlightStore;
use crate::{Error, Result};

/// Repository for the Flights table
pub struct FlightRepo<'a> {
    store: &'a FlightStore,
}

/// A flight joined out to airline, both destination roles and its Active
/// crew, as presented by the view menu
#[derive(Debug, Clone)]
pub struct FlightListing {
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    /// Concatenated "First Last (Role)" pairs; None when no Active crew
    pub crew: Option<String>,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub status: FlightStatus,
}

impl FlightListing {
    /// Crew cell with the explicit placeholder for crewless flights
    pub fn crew_display(&self) -> &str {
        self.crew.as_deref().unwrap_or("No crew assigned")
    }
}

/// Shared SELECT for every listing variant. Active assignments only, so
/// cancelled crew never shows up in the rollup; the LEFT JOINs keep
/// crewless flights in the result.
const LISTING_SELECT: &str = r#"
SELECT f.flight_number, a.airline_name, o.destination_name, d.destination_name,
       GROUP_CONCAT(p.first_name || ' ' || p.last_name || ' (' || fa.role || ')', ', '),
       f.departure_time, f.arrival_time, f.status
FROM Flights f
JOIN Airlines a ON f.airline_id = a.airline_id
JOIN Destinations o ON f.origin_id = o.destination_id
JOIN Destinations d ON f.destination_id = d.destination_id
LEFT JOIN Flight_assignments fa ON f.flight_id = fa.flight_id AND fa.status = 'Active'
LEFT JOIN Pilots p ON fa.pilot_id = p.pilot_id
"#;

const LISTING_TAIL: &str = "GROUP BY f.flight_id ORDER BY f.departure_time";

impl<'a> FlightRepo<'a> {
    pub fn new(store: &'a FlightStore) -> Self {
        Self { store }
    }

    /// Insert a flight and return its assigned id.
    ///
    /// The origin ≠ destination rule is checked here, before the insert is
    /// attempted; on violation nothing is written.
    pub fn create(&self, flight: &Flight) -> Result<i64> {
        if flight.flight_number.trim().is_empty() || flight.aircraft_type.trim().is_empty() {
            return Err(Error::Validation(
                "flight number and aircraft type are required".to_string(),
            ));
        }
        if flight.origin_id == flight.destination_id {
            return Err(Error::Validation(
                "origin and destination cannot be the same".to_string(),
            ));
        }

        self.store.conn().execute(
            r#"
            INSERT INTO Flights (flight_number, airline_id, origin_id, destination_id,
                                 departure_time, arrival_time, status, aircraft_type, capacity)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                flight.flight_number.to_uppercase(),
                flight.airline_id,
                flight.origin_id,
                flight.destination_id,
                fmt_datetime(&flight.departure_time),
                fmt_datetime(&flight.arrival_time),
                flight.status.as_str(),
                flight.aircraft_type,
                flight.capacity,
            ],
        )?;
        Ok(self.store.conn().last_insert_rowid())
    }

    /// Look up a flight by its flight number (case-insensitive)
    pub fn get_by_number(&self, flight_number: &str) -> Result<Option<Flight>> {
        self.store
            .conn()
            .query_row(
                "SELECT flight_id, flight_number, airline_id, origin_id, destination_id,
                        departure_time, arrival_time, status, aircraft_type, capacity
                 FROM Flights WHERE flight_number = ?1",
                [flight_number.trim().to_uppercase()],
                Self::row_to_flight,
            )
            .optional()
            .map_err(Into::into)
    }

    /// All flights as entities, by departure time
    pub fn list(&self) -> Result<Vec<Flight>> {
        let mut stmt = self.store.conn().prepare(
            "SELECT flight_id, flight_number, airline_id, origin_id, destination_id,
                    departure_time, arrival_time, status, aircraft_type, capacity
             FROM Flights ORDER BY departure_time",
        )?;

        let flights = stmt
            .query_map([], Self::row_to_flight)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(flights)
    }

    /// All flights with crew rollup
    pub fn list_all(&self) -> Result<Vec<FlightListing>> {
        self.listing("", &[])
    }

    /// Flights arriving at the given destination
    pub fn by_destination(&self, destination_id: i64) -> Result<Vec<FlightListing>> {
        self.listing("WHERE f.destination_id = ?1", &[&destination_id])
    }

    /// Flights in the given status
    pub fn by_status(&self, status: FlightStatus) -> Result<Vec<FlightListing>> {
        self.listing("WHERE f.status = ?1", &[&status.as_str()])
    }

    /// Flights departing between the two dates, inclusive on both ends and
    /// compared at date granularity
    pub fn by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<FlightListing>> {
        self.listing(
            "WHERE DATE(f.departure_time) BETWEEN ?1 AND ?2",
            &[&start, &end],
        )
    }

    /// Flights the given pilot is actively assigned to
    pub fn by_pilot(&self, pilot_id: i64) -> Result<Vec<FlightListing>> {
        self.listing("WHERE fa.pilot_id = ?1", &[&pilot_id])
    }

    /// Move the departure time of the flight with the given number
    pub fn set_departure(&self, flight_number: &str, departure: NaiveDateTime) -> Result<()> {
        self.update_column(flight_number, "departure_time", &fmt_datetime(&departure))
    }

    /// Move the arrival time of the flight with the given number
    pub fn set_arrival(&self, flight_number: &str, arrival: NaiveDateTime) -> Result<()> {
        self.update_column(flight_number, "arrival_time", &fmt_datetime(&arrival))
    }

    /// Change the status of the flight with the given number
    pub fn set_status(&self, flight_number: &str, status: FlightStatus) -> Result<()> {
        self.update_column(flight_number, "status", status.as_str())
    }

    fn update_column(&self, flight_number: &str, column: &str, value: &str) -> Result<()> {
        let flight_number = flight_number.trim().to_uppercase();
        let updated = self.store.conn().execute(
            &format!("UPDATE Flights SET {} = ?1 WHERE flight_number = ?2", column),
            params![value, flight_number],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("flight {}", flight_number)));
        }
        Ok(())
    }

    fn listing(&self, filter: &str, params: &[&dyn ToSql]) -> Result<Vec<FlightListing>> {
        let sql = format!("{} {} {}", LISTING_SELECT, filter, LISTING_TAIL);
        let mut stmt = self.store.conn().prepare(&sql)?;

        let listings = stmt
            .query_map(params, |row| {
                let status_str: String = row.get(7)?;
                Ok(FlightListing {
                    flight_number: row.get(0)?,
                    airline: row.get(1)?,
                    origin: row.get(2)?,
                    destination: row.get(3)?,
                    crew: row.get(4)?,
                    departure_time: row.get(5)?,
                    arrival_time: row.get(6)?,
                    status: parse_column(7, &status_str)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(listings)
    }

    fn row_to_flight(row: &rusqlite::Row) -> rusqlite::Result<Flight> {
        let status_str: String = row.get(7)?;
        Ok(Flight {
            flight_id: row.get(0)?,
            flight_number: row.get(1)?,
            airline_id: row.get(2)?,
            origin_id: row.get(3)?,
            destination_id: row.get(4)?,
            departure_time: row.get(5)?,
            arrival_time: row.get(6)?,
            status: parse_column(7, &status_str)?,
            aircraft_type: row.get(8)?,
            capacity: row.get(9)?,
        })
    }
}
