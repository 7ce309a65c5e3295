//! Seed fixtures for fresh databases
//!
//! The structural data (airlines, destinations, pilots, the core route
//! table, aircraft capacities) is fixed; departure times, the randomized
//! tail of the flight list and the crew picks vary per run. Everything is
//! inserted through the repositories in foreign-key order:
//! Airlines → Destinations → Pilots → Flights → Assignments.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use tracing::info;

use crate::airline::Airline;
use crate::assignment::{Assignment, CrewRole};
use crate::destination::Destination;
use crate::flight::{Flight, FlightStatus};
use crate::pilot::Pilot;
use crate::repo::{AirlineRepo, AssignmentRepo, DestinationRepo, FlightRepo, PilotRepo};
use crate::report::ReportEngine;
use crate::storage::{FlightStore, StoreStats};
use crate::Result;

/// (name, code, country, headquarters, fleet size, established year)
const AIRLINES: &[(&str, &str, &str, &str, u32, i32)] = &[
    ("British Airways", "BA", "United Kingdom", "London", 280, 1974),
    ("Air France", "AF", "France", "Paris", 220, 1933),
    ("Lufthansa", "LH", "Germany", "Frankfurt", 300, 1953),
    ("American Airlines", "AA", "United States", "Dallas", 950, 1930),
    ("Emirates", "EK", "UAE", "Dubai", 270, 1985),
    ("Singapore Airlines", "SQ", "Singapore", "Singapore", 130, 1947),
    ("Japan Airlines", "JL", "Japan", "Tokyo", 170, 1951),
    ("KLM", "KL", "Netherlands", "Amsterdam", 110, 1919),
    ("Swiss International", "LX", "Switzerland", "Zurich", 90, 2002),
    ("Turkish Airlines", "TK", "Turkey", "Istanbul", 380, 1933),
];

/// (name, country, airport code, timezone)
const DESTINATIONS: &[(&str, &str, &str, &str)] = &[
    // Major international hubs
    ("London Heathrow", "United Kingdom", "LHR", "GMT"),
    ("New York JFK", "United States", "JFK", "EST"),
    ("Paris Charles de Gaulle", "France", "CDG", "CET"),
    ("Tokyo Haneda", "Japan", "HND", "JST"),
    ("Dubai International", "UAE", "DXB", "GST"),
    ("Los Angeles International", "United States", "LAX", "PST"),
    ("Frankfurt am Main", "Germany", "FRA", "CET"),
    ("Singapore Changi", "Singapore", "SIN", "SGT"),
    ("Sydney Kingsford Smith", "Australia", "SYD", "AEST"),
    ("Amsterdam Schiphol", "Netherlands", "AMS", "CET"),
    // Additional major airports
    ("Hong Kong International", "Hong Kong", "HKG", "HKT"),
    ("Madrid Barajas", "Spain", "MAD", "CET"),
    ("Rome Fiumicino", "Italy", "FCO", "CET"),
    ("Mumbai Chhatrapati Shivaji", "India", "BOM", "IST"),
    ("Toronto Pearson", "Canada", "YYZ", "EST"),
    ("Seoul Incheon", "South Korea", "ICN", "KST"),
    ("Bangkok Suvarnabhumi", "Thailand", "BKK", "ICT"),
    ("Istanbul Airport", "Turkey", "IST", "TRT"),
    ("Moscow Sheremetyevo", "Russia", "SVO", "MSK"),
    ("São Paulo Guarulhos", "Brazil", "GRU", "BRT"),
    // Regional airports
    ("Berlin Brandenburg", "Germany", "BER", "CET"),
    ("Vienna International", "Austria", "VIE", "CET"),
    ("Zurich Airport", "Switzerland", "ZUR", "CET"),
    ("Copenhagen Airport", "Denmark", "CPH", "CET"),
    ("Stockholm Arlanda", "Sweden", "ARN", "CET"),
    ("Oslo Gardermoen", "Norway", "OSL", "CET"),
    ("Dublin Airport", "Ireland", "DUB", "GMT"),
    ("Brussels Airport", "Belgium", "BRU", "CET"),
    ("Barcelona El Prat", "Spain", "BCN", "CET"),
    ("Milan Malpensa", "Italy", "MXP", "CET"),
];

/// (first name, last name, license, experience years, hire date, airline id)
const PILOTS: &[(&str, &str, &str, u32, &str, i64)] = &[
    // Senior captains
    ("John", "Smith", "PIL001", 20, "2003-03-15", 1),
    ("Sarah", "Johnson", "PIL002", 18, "2005-07-22", 1),
    ("David", "Wilson", "PIL003", 22, "2001-11-30", 2),
    ("Michelle", "White", "PIL004", 16, "2007-10-08", 2),
    ("Daniel", "Lewis", "PIL005", 25, "1998-01-12", 3),
    ("Robert", "Taylor", "PIL006", 19, "2004-06-12", 3),
    ("Jennifer", "Martinez", "PIL007", 17, "2006-08-25", 4),
    // Experienced pilots
    ("Michael", "Brown", "PIL008", 12, "2011-01-10", 4),
    ("Emily", "Davis", "PIL009", 14, "2009-09-05", 5),
    ("William", "Garcia", "PIL010", 11, "2012-02-14", 5),
    ("James", "Lee", "PIL011", 13, "2010-05-20", 6),
    ("Lisa", "Anderson", "PIL012", 10, "2013-04-18", 6),
    ("Christopher", "Thompson", "PIL013", 9, "2014-12-01", 7),
    ("Angela", "Moore", "PIL014", 8, "2015-03-22", 7),
    // Junior pilots
    ("Amanda", "Rodriguez", "PIL015", 6, "2017-12-03", 8),
    ("Christopher", "Harris", "PIL016", 5, "2018-09-15", 8),
    ("Jessica", "Clark", "PIL017", 4, "2019-03-27", 9),
    ("Kevin", "Young", "PIL018", 7, "2016-08-14", 9),
    ("Rachel", "Scott", "PIL019", 3, "2020-05-30", 10),
    ("Mark", "Turner", "PIL020", 4, "2019-11-18", 10),
    // New pilots
    ("Sophie", "Adams", "PIL021", 2, "2021-09-10", 1),
    ("Ryan", "Cooper", "PIL022", 1, "2022-04-05", 2),
    ("Emma", "Parker", "PIL023", 2, "2021-07-20", 3),
    ("Nathan", "Brooks", "PIL024", 1, "2022-01-15", 4),
    ("Olivia", "Bennett", "PIL025", 2, "2021-03-08", 5),
];

/// Core routes: (origin id, destination id, duration hours, airline id).
/// The first 30 flights follow this table; the rest are randomized.
const ROUTES: &[(i64, i64, i64, i64)] = &[
    // Transatlantic
    (1, 2, 8, 1),
    (2, 1, 7, 1),
    (3, 2, 8, 2),
    (6, 1, 11, 1),
    (1, 6, 11, 1),
    // European
    (1, 3, 1, 1),
    (3, 1, 1, 2),
    (1, 7, 1, 3),
    (7, 1, 1, 3),
    (3, 12, 2, 2),
    (12, 13, 2, 2),
    (10, 7, 1, 8),
    // Asian
    (4, 8, 7, 7),
    (8, 4, 7, 6),
    (4, 11, 3, 7),
    (11, 4, 4, 6),
    (8, 5, 7, 5),
    (5, 8, 7, 5),
    // Long-haul
    (1, 9, 22, 1),
    (9, 1, 21, 1),
    (5, 14, 3, 5),
    (14, 5, 3, 5),
    (2, 15, 1, 4),
    (15, 2, 1, 4),
    // Regional
    (7, 10, 1, 3),
    (10, 21, 1, 8),
    (21, 22, 1, 3),
    (22, 23, 1, 3),
    (3, 29, 1, 2),
    (29, 30, 1, 2),
];

/// (aircraft type, seat capacity)
const AIRCRAFT: &[(&str, u32)] = &[
    ("Boeing 737-800", 189),
    ("Boeing 737 MAX 8", 210),
    ("Airbus A320", 180),
    ("Airbus A321", 220),
    ("Boeing 777-300ER", 396),
    ("Boeing 787-9", 290),
    ("Airbus A350-900", 325),
    ("Airbus A380", 525),
    ("Boeing 747-8F", 467),
    ("Embraer E190", 114),
];

const FLIGHT_COUNT: usize = 50;
const ASSIGNED_FLIGHTS: i64 = 30;
const FIRST_OFFICER_CHANCE: f64 = 0.7;

/// Row counts inserted by [`populate`]
#[derive(Debug, Clone)]
pub struct SeedSummary {
    pub airlines: usize,
    pub destinations: usize,
    pub pilots: usize,
    pub flights: usize,
    pub assignments: usize,
}

/// Fill an empty store with the fixture data set
pub fn populate(store: &FlightStore) -> Result<SeedSummary> {
    let now = Local::now().naive_local();
    let mut rng = rand::thread_rng();

    let airlines = AirlineRepo::new(store);
    for (name, code, country, headquarters, fleet_size, established) in AIRLINES {
        airlines.create(
            &Airline::new(*name, *code, *country).with_details(
                *headquarters,
                *fleet_size,
                *established,
            ),
        )?;
    }
    info!("seeded {} airlines", AIRLINES.len());

    let destinations = DestinationRepo::new(store);
    for (name, country, code, timezone) in DESTINATIONS {
        destinations.create(&Destination::new(*name, *country, *code, *timezone))?;
    }
    info!("seeded {} destinations", DESTINATIONS.len());

    let pilots = PilotRepo::new(store);
    for (first, last, license, experience, hire_date, airline_id) in PILOTS {
        let hire = NaiveDate::parse_from_str(hire_date, "%Y-%m-%d")?;
        pilots.create(
            &Pilot::new(*first, *last, *license, *experience, hire).with_airline(*airline_id),
        )?;
    }
    info!("seeded {} pilots", PILOTS.len());

    let flights = FlightRepo::new(store);
    for flight in sample_flights(now, &mut rng) {
        flights.create(&flight)?;
    }
    info!("seeded {} flights", FLIGHT_COUNT);

    let assignments = AssignmentRepo::new(store);
    let mut assignment_count = 0;
    for assignment in sample_assignments(now.date(), &mut rng) {
        assignments.create(&assignment)?;
        assignment_count += 1;
    }
    info!("seeded {} crew assignments", assignment_count);

    Ok(SeedSummary {
        airlines: AIRLINES.len(),
        destinations: DESTINATIONS.len(),
        pilots: PILOTS.len(),
        flights: FLIGHT_COUNT,
        assignments: assignment_count,
    })
}

/// Fifty flights: the core route table first, then randomized fill.
/// Flight numbers run BA2000+, AF3000+, LH4000+, AA5000+, EK6000+ in
/// blocks of ten.
fn sample_flights(now: NaiveDateTime, rng: &mut impl Rng) -> Vec<Flight> {
    let mut result = Vec::with_capacity(FLIGHT_COUNT);

    for i in 0..FLIGHT_COUNT {
        let number = match i {
            0..=9 => format!("BA{}", 2000 + i),
            10..=19 => format!("AF{}", 3000 + (i - 10)),
            20..=29 => format!("LH{}", 4000 + (i - 20)),
            30..=39 => format!("AA{}", 5000 + (i - 30)),
            _ => format!("EK{}", 6000 + (i - 40)),
        };

        let (origin_id, destination_id, duration, airline_id) = if i < ROUTES.len() {
            ROUTES[i]
        } else {
            let origin = rng.gen_range(1..=DESTINATIONS.len() as i64);
            let mut destination = rng.gen_range(1..=DESTINATIONS.len() as i64);
            while destination == origin {
                destination = rng.gen_range(1..=DESTINATIONS.len() as i64);
            }
            (
                origin,
                destination,
                rng.gen_range(1..=15),
                rng.gen_range(1..=AIRLINES.len() as i64),
            )
        };

        let days_offset: i64 = rng.gen_range(-7..=30);
        let hour: u32 = [6, 8, 10, 12, 14, 16, 18, 20, 22][rng.gen_range(0..9)];
        let minute: u32 = [0, 15, 30, 45][rng.gen_range(0..4)];
        let takeoff = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
        let departure = (now.date() + Duration::days(days_offset)).and_time(takeoff);
        let arrival =
            departure + Duration::hours(duration) + Duration::minutes(rng.gen_range(0..=45));

        let (aircraft_type, capacity) = AIRCRAFT[rng.gen_range(0..AIRCRAFT.len())];

        let flight = Flight::new(
            number,
            airline_id,
            origin_id,
            destination_id,
            departure,
            arrival,
            aircraft_type,
            capacity,
        )
        .with_status(status_for(departure, now, rng));

        result.push(flight);
    }

    result
}

/// Status follows the schedule: past flights completed, departures near now
/// in the air or delayed, future flights mostly scheduled with a weighted
/// sprinkle of disruptions.
fn status_for(departure: NaiveDateTime, now: NaiveDateTime, rng: &mut impl Rng) -> FlightStatus {
    if departure < now - Duration::hours(2) {
        FlightStatus::Completed
    } else if departure <= now + Duration::hours(2) {
        if rng.gen_bool(0.5) {
            FlightStatus::InFlight
        } else {
            FlightStatus::Delayed
        }
    } else {
        match rng.gen_range(0.0..1.0) {
            roll if roll < 0.50 => FlightStatus::Scheduled,
            roll if roll < 0.70 => FlightStatus::Delayed,
            roll if roll < 0.95 => FlightStatus::Completed,
            roll if roll < 0.98 => FlightStatus::InFlight,
            _ => FlightStatus::Cancelled,
        }
    }
}

/// Crew for the first thirty flights: every flight gets a captain, most
/// also get a first officer (always a different pilot).
fn sample_assignments(date: NaiveDate, rng: &mut impl Rng) -> Vec<Assignment> {
    let mut result = Vec::new();

    for flight_id in 1..=ASSIGNED_FLIGHTS {
        let captain = rng.gen_range(1..=PILOTS.len() as i64);
        result.push(Assignment::new(flight_id, captain, date));

        if rng.gen_bool(FIRST_OFFICER_CHANCE) {
            let mut first_officer = rng.gen_range(1..=PILOTS.len() as i64);
            while first_officer == captain {
                first_officer = rng.gen_range(1..=PILOTS.len() as i64);
            }
            result.push(
                Assignment::new(flight_id, first_officer, date).with_role(CrewRole::FirstOfficer),
            );
        }
    }

    result
}

/// Aggregate statistics for the `seed --stats` switch
#[derive(Debug, Clone)]
pub struct SeedStatistics {
    pub counts: StoreStats,
    /// Distinct countries across all destinations
    pub destination_countries: usize,
    /// Mean pilot experience in years (0.0 with no pilots)
    pub avg_pilot_experience: f64,
    /// Per-status flight counts with their share of the total, in percent
    pub status_distribution: Vec<(FlightStatus, usize, f64)>,
}

/// Collect the statistics shown by `flightops seed --stats`
pub fn statistics(store: &FlightStore) -> Result<SeedStatistics> {
    let counts = store.stats()?;

    let destination_countries: i64 = store.conn().query_row(
        "SELECT COUNT(DISTINCT country) FROM Destinations",
        [],
        |row| row.get(0),
    )?;

    let avg_pilot_experience: Option<f64> = store.conn().query_row(
        "SELECT AVG(experience_years) FROM Pilots",
        [],
        |row| row.get(0),
    )?;

    let total_flights = counts.flights;
    let status_distribution = ReportEngine::new(store)
        .flight_status_summary()?
        .into_iter()
        .map(|row| {
            let share = if total_flights == 0 {
                0.0
            } else {
                row.flights as f64 * 100.0 / total_flights as f64
            };
            (row.status, row.flights, share)
        })
        .collect();

    Ok(SeedStatistics {
        counts,
        destination_countries: destination_countries as usize,
        avg_pilot_experience: avg_pilot_experience.unwrap_or(0.0),
        status_distribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_inserts_expected_counts() {
        let store = FlightStore::open_in_memory().unwrap();
        let summary = populate(&store).unwrap();

        assert_eq!(summary.airlines, 10);
        assert_eq!(summary.destinations, 30);
        assert_eq!(summary.pilots, 25);
        assert_eq!(summary.flights, 50);

        assert_eq!(store.count("Airlines").unwrap(), 10);
        assert_eq!(store.count("Destinations").unwrap(), 30);
        assert_eq!(store.count("Pilots").unwrap(), 25);
        assert_eq!(store.count("Flights").unwrap(), 50);

        // every assigned flight has a captain; first officers are optional
        assert!(summary.assignments >= ASSIGNED_FLIGHTS as usize);
        assert!(summary.assignments <= 2 * ASSIGNED_FLIGHTS as usize);
        assert_eq!(store.count("Flight_assignments").unwrap(), summary.assignments);
    }

    #[test]
    fn test_status_summary_covers_all_seeded_flights() {
        let store = FlightStore::open_in_memory().unwrap();
        populate(&store).unwrap();

        let summary = ReportEngine::new(&store).flight_status_summary().unwrap();
        let total: usize = summary.iter().map(|row| row.flights).sum();
        assert_eq!(total, 50);
    }

    #[test]
    fn test_pilot_workload_sums_to_active_assignments() {
        let store = FlightStore::open_in_memory().unwrap();
        populate(&store).unwrap();

        let workload = ReportEngine::new(&store).flights_per_pilot().unwrap();
        assert_eq!(workload.len(), 25);

        let total: usize = workload.iter().map(|row| row.flights).sum();
        assert_eq!(total, AssignmentRepo::new(&store).count_active().unwrap());
    }

    #[test]
    fn test_statistics_reflect_fixture_shape() {
        let store = FlightStore::open_in_memory().unwrap();
        populate(&store).unwrap();

        let stats = statistics(&store).unwrap();
        assert_eq!(stats.counts.destinations, 30);
        assert!(stats.destination_countries > 20);
        assert!(stats.avg_pilot_experience > 0.0);

        let share: f64 = stats
            .status_distribution
            .iter()
            .map(|(_, _, percent)| percent)
            .sum();
        assert!((share - 100.0).abs() < 0.01);
    }
}
