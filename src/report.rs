//! Report engine
//!
//! Four fixed aggregate views over the store, all read-only and computed on
//! demand. The zero-inclusive rollups LEFT JOIN from the dimension table so
//! destinations and pilots without flights still appear with count 0.
//! Every view orders by count descending with the label as tie-breaker, so
//! repeated runs return identical row order.

use crate::flight::FlightStatus;
use crate::repo::pilots::parse_column;
use crate::storage::FlightStore;
use crate::Result;

/// Flight count per destination (zero-inclusive)
#[derive(Debug, Clone)]
pub struct DestinationTraffic {
    pub destination: String,
    pub flights: usize,
}

/// Active-assignment count per pilot (zero-inclusive)
#[derive(Debug, Clone)]
pub struct PilotWorkload {
    pub pilot: String,
    pub flights: usize,
}

/// Flight count per status
#[derive(Debug, Clone)]
pub struct StatusBreakdown {
    pub status: FlightStatus,
    pub flights: usize,
}

/// Flight count per "Origin → Destination" route
#[derive(Debug, Clone)]
pub struct RouteTraffic {
    pub route: String,
    pub flights: usize,
}

/// Aggregate reporting over the flight operations store
pub struct ReportEngine<'a> {
    store: &'a FlightStore,
}

impl<'a> ReportEngine<'a> {
    pub fn new(store: &'a FlightStore) -> Self {
        Self { store }
    }

    /// How many flights arrive at each destination. Destinations with no
    /// flights appear with count 0, so the counts sum to the total flight
    /// count.
    pub fn flights_per_destination(&self) -> Result<Vec<DestinationTraffic>> {
        let mut stmt = self.store.conn().prepare(
            r#"
            SELECT d.destination_name, COUNT(f.flight_id) AS flight_count
            FROM Destinations d
            LEFT JOIN Flights f ON d.destination_id = f.destination_id
            GROUP BY d.destination_id
            ORDER BY flight_count DESC, d.destination_name
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(DestinationTraffic {
                    destination: row.get(0)?,
                    flights: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// How many flights each pilot is actively assigned to. Pilots with no
    /// Active assignments appear with count 0.
    pub fn flights_per_pilot(&self) -> Result<Vec<PilotWorkload>> {
        let mut stmt = self.store.conn().prepare(
            r#"
            SELECT p.first_name || ' ' || p.last_name AS pilot_name, COUNT(fa.flight_id) AS flight_count
            FROM Pilots p
            LEFT JOIN Flight_assignments fa ON p.pilot_id = fa.pilot_id AND fa.status = 'Active'
            GROUP BY p.pilot_id
            ORDER BY flight_count DESC, pilot_name
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(PilotWorkload {
                    pilot: row.get(0)?,
                    flights: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Flight counts grouped by status
    pub fn flight_status_summary(&self) -> Result<Vec<StatusBreakdown>> {
        let mut stmt = self.store.conn().prepare(
            r#"
            SELECT status, COUNT(*) AS flight_count
            FROM Flights
            GROUP BY status
            ORDER BY flight_count DESC, status
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                let status_str: String = row.get(0)?;
                Ok(StatusBreakdown {
                    status: parse_column(0, &status_str)?,
                    flights: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// The ten most flown routes, busiest first, ties in label order
    pub fn busiest_routes(&self) -> Result<Vec<RouteTraffic>> {
        let mut stmt = self.store.conn().prepare(
            r#"
            SELECT o.destination_name || ' → ' || d.destination_name AS route, COUNT(*) AS flight_count
            FROM Flights f
            JOIN Destinations o ON f.origin_id = o.destination_id
            JOIN Destinations d ON f.destination_id = d.destination_id
            GROUP BY route
            ORDER BY flight_count DESC, route
            LIMIT 10
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(RouteTraffic {
                    route: row.get(0)?,
                    flights: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airline::Airline;
    use crate::assignment::Assignment;
    use crate::destination::Destination;
    use crate::flight::Flight;
    use crate::pilot::Pilot;
    use crate::repo::{AirlineRepo, AssignmentRepo, DestinationRepo, FlightRepo, PilotRepo};
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    /// One airline, four destinations, four flights: three into JFK, one
    /// into CDG, none into AMS or LHR-as-destination beyond the CDG run.
    fn seeded_store() -> FlightStore {
        let store = FlightStore::open_in_memory().unwrap();
        AirlineRepo::new(&store)
            .create(&Airline::new("British Airways", "BA", "United Kingdom"))
            .unwrap();

        let destinations = DestinationRepo::new(&store);
        for (name, country, code) in [
            ("London Heathrow", "United Kingdom", "LHR"),
            ("New York JFK", "United States", "JFK"),
            ("Paris Charles de Gaulle", "France", "CDG"),
            ("Amsterdam Schiphol", "Netherlands", "AMS"),
        ] {
            destinations
                .create(&Destination::new(name, country, code, "GMT"))
                .unwrap();
        }

        let flights = FlightRepo::new(&store);
        for (number, origin, dest) in [
            ("BA2000", 1, 2),
            ("BA2001", 1, 2),
            ("BA2002", 3, 2),
            ("BA2003", 1, 3),
        ] {
            flights
                .create(&Flight::new(
                    number,
                    1,
                    origin,
                    dest,
                    dt("2026-08-10 08:00:00"),
                    dt("2026-08-10 12:00:00"),
                    "Airbus A320",
                    180,
                ))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_flights_per_destination_is_zero_inclusive() {
        let store = seeded_store();
        let report = ReportEngine::new(&store);

        let rows = report.flights_per_destination().unwrap();
        assert_eq!(rows.len(), 4);

        let total: usize = rows.iter().map(|r| r.flights).sum();
        assert_eq!(total, 4);

        let ams = rows.iter().find(|r| r.destination == "Amsterdam Schiphol").unwrap();
        assert_eq!(ams.flights, 0);

        assert_eq!(rows[0].destination, "New York JFK");
        assert_eq!(rows[0].flights, 3);
    }

    #[test]
    fn test_flights_per_pilot_counts_active_only() {
        let store = seeded_store();
        let pilots = PilotRepo::new(&store);
        let assignments = AssignmentRepo::new(&store);

        let hire = NaiveDate::from_ymd_opt(2010, 5, 20).unwrap();
        let busy = pilots.create(&Pilot::new("James", "Lee", "PIL011", 13, hire)).unwrap();
        pilots.create(&Pilot::new("Lisa", "Anderson", "PIL012", 10, hire)).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assignments.create(&Assignment::new(1, busy, date)).unwrap();
        assignments.create(&Assignment::new(2, busy, date)).unwrap();
        assignments
            .create(
                &Assignment::new(3, busy, date)
                    .with_status(crate::assignment::AssignmentStatus::Cancelled),
            )
            .unwrap();

        let rows = ReportEngine::new(&store).flights_per_pilot().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].pilot, "James Lee");
        assert_eq!(rows[0].flights, 2);
        assert_eq!(rows[1].pilot, "Lisa Anderson");
        assert_eq!(rows[1].flights, 0);

        let total: usize = rows.iter().map(|r| r.flights).sum();
        assert_eq!(total, assignments.count_active().unwrap());
    }

    #[test]
    fn test_status_summary_sums_to_flight_count() {
        let store = seeded_store();
        let flights = FlightRepo::new(&store);
        flights.set_status("BA2003", FlightStatus::Delayed).unwrap();

        let rows = ReportEngine::new(&store).flight_status_summary().unwrap();
        let total: usize = rows.iter().map(|r| r.flights).sum();
        assert_eq!(total, store.count("Flights").unwrap());

        assert_eq!(rows[0].status, FlightStatus::Scheduled);
        assert_eq!(rows[0].flights, 3);
    }

    #[test]
    fn test_busiest_routes_orders_and_breaks_ties_by_label() {
        let store = seeded_store();
        let rows = ReportEngine::new(&store).busiest_routes().unwrap();

        assert_eq!(rows[0].route, "London Heathrow → New York JFK");
        assert_eq!(rows[0].flights, 2);

        // the two single-flight routes tie; label order decides
        assert_eq!(rows[1].route, "London Heathrow → Paris Charles de Gaulle");
        assert_eq!(rows[2].route, "Paris Charles de Gaulle → New York JFK");
    }

    #[test]
    fn test_busiest_routes_truncates_to_ten() {
        let store = FlightStore::open_in_memory().unwrap();
        AirlineRepo::new(&store)
            .create(&Airline::new("Lufthansa", "LH", "Germany"))
            .unwrap();

        let destinations = DestinationRepo::new(&store);
        for i in 0..13 {
            destinations
                .create(&Destination::new(
                    format!("Airport {i:02}"),
                    "Testland",
                    format!("A{i:02}"),
                    "CET",
                ))
                .unwrap();
        }

        // 12 distinct routes out of airport 1
        let flights = FlightRepo::new(&store);
        for i in 0..12 {
            flights
                .create(&Flight::new(
                    format!("LH4{i:03}"),
                    1,
                    1,
                    i + 2,
                    dt("2026-08-10 08:00:00"),
                    dt("2026-08-10 10:00:00"),
                    "Airbus A320",
                    180,
                ))
                .unwrap();
        }

        let rows = ReportEngine::new(&store).busiest_routes().unwrap();
        assert_eq!(rows.len(), 10);
        assert!(rows.windows(2).all(|w| w[0].flights >= w[1].flights));
    }
}
