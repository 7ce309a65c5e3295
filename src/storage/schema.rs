//! Database schema definitions
//!
//! Table and column names match the historical `FlightManagement.db` layout
//! so existing database files stay readable. All statements are idempotent
//! (`IF NOT EXISTS`), so re-running initialization is a no-op.

/// SQL to create the airlines table
pub const CREATE_AIRLINES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Airlines (
    airline_id INTEGER PRIMARY KEY AUTOINCREMENT,
    airline_name TEXT NOT NULL UNIQUE,
    airline_code TEXT NOT NULL UNIQUE,
    country TEXT NOT NULL,
    headquarters TEXT,
    fleet_size INTEGER DEFAULT 0,
    established_year INTEGER,
    created_date DATE DEFAULT CURRENT_DATE
)
"#;

/// SQL to create the destinations table
pub const CREATE_DESTINATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Destinations (
    destination_id INTEGER PRIMARY KEY AUTOINCREMENT,
    destination_name TEXT NOT NULL UNIQUE,
    country TEXT NOT NULL,
    airport_code TEXT NOT NULL UNIQUE,
    timezone TEXT NOT NULL,
    created_date DATE DEFAULT CURRENT_DATE
)
"#;

/// SQL to create the pilots table
pub const CREATE_PILOTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Pilots (
    pilot_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    license_number TEXT NOT NULL UNIQUE,
    experience_years INTEGER NOT NULL,
    hire_date DATE NOT NULL,
    airline_id INTEGER,
    status TEXT DEFAULT 'Active' CHECK(status IN ('Active', 'Inactive', 'On Leave')),
    FOREIGN KEY (airline_id) REFERENCES Airlines (airline_id)
)
"#;

/// SQL to create the flights table
///
/// origin_id and destination_id both reference Destinations; the
/// origin ≠ destination rule is enforced by the flight repository, not here.
pub const CREATE_FLIGHTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Flights (
    flight_id INTEGER PRIMARY KEY AUTOINCREMENT,
    flight_number TEXT NOT NULL UNIQUE,
    airline_id INTEGER NOT NULL,
    origin_id INTEGER NOT NULL,
    destination_id INTEGER NOT NULL,
    departure_time DATETIME NOT NULL,
    arrival_time DATETIME NOT NULL,
    status TEXT DEFAULT 'Scheduled' CHECK(status IN ('Scheduled', 'Delayed', 'Cancelled', 'Completed', 'In-Flight')),
    aircraft_type TEXT NOT NULL,
    capacity INTEGER NOT NULL,
    created_date DATE DEFAULT CURRENT_DATE,
    FOREIGN KEY (airline_id) REFERENCES Airlines (airline_id),
    FOREIGN KEY (origin_id) REFERENCES Destinations (destination_id),
    FOREIGN KEY (destination_id) REFERENCES Destinations (destination_id)
)
"#;

/// SQL to create the flight assignments table
pub const CREATE_ASSIGNMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Flight_assignments (
    assignment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    flight_id INTEGER NOT NULL,
    pilot_id INTEGER NOT NULL,
    assignment_date DATE DEFAULT CURRENT_DATE,
    role TEXT DEFAULT 'Captain' CHECK(role IN ('Captain', 'First Officer', 'Relief Pilot')),
    status TEXT DEFAULT 'Active' CHECK(status IN ('Active', 'Cancelled', 'Completed')),
    notes TEXT,
    FOREIGN KEY (flight_id) REFERENCES Flights (flight_id),
    FOREIGN KEY (pilot_id) REFERENCES Pilots (pilot_id)
)
"#;

/// Uniqueness of (flight, pilot, role) is scoped to Active assignments:
/// cancelled or completed history does not block a pilot from regaining a
/// role on the same flight. The assignment repository checks this before
/// inserting; the index is the backstop.
pub const CREATE_ASSIGNMENTS_ACTIVE_UNIQUE_INDEX: &str = r#"
CREATE UNIQUE INDEX IF NOT EXISTS idx_assignments_active_unique
ON Flight_assignments(flight_id, pilot_id, role) WHERE status = 'Active'
"#;

/// SQL to create lookup indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_flights_destination ON Flights(destination_id)",
    "CREATE INDEX IF NOT EXISTS idx_flights_origin ON Flights(origin_id)",
    "CREATE INDEX IF NOT EXISTS idx_flights_status ON Flights(status)",
    "CREATE INDEX IF NOT EXISTS idx_flights_departure ON Flights(departure_time)",
    "CREATE INDEX IF NOT EXISTS idx_assignments_flight ON Flight_assignments(flight_id)",
    "CREATE INDEX IF NOT EXISTS idx_assignments_pilot ON Flight_assignments(pilot_id)",
    "CREATE INDEX IF NOT EXISTS idx_pilots_airline ON Pilots(airline_id)",
];

/// Table names in foreign-key dependency order (referenced tables first).
/// Drop and clear operations walk this list in reverse.
pub const TABLES: &[&str] = &[
    "Airlines",
    "Destinations",
    "Pilots",
    "Flights",
    "Flight_assignments",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_AIRLINES_TABLE,
        CREATE_DESTINATIONS_TABLE,
        CREATE_PILOTS_TABLE,
        CREATE_FLIGHTS_TABLE,
        CREATE_ASSIGNMENTS_TABLE,
        CREATE_ASSIGNMENTS_ACTIVE_UNIQUE_INDEX,
    ];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
