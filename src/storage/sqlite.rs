//! SQLite store implementation
//!
//! `FlightStore` owns the single connection for the process lifetime.
//! Repositories borrow the store rather than sharing global state; the
//! connection is released when the store is dropped.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::{debug, info};

use super::schema;
use crate::{Error, Result};

/// SQLite-backed store for the five flight operations tables
pub struct FlightStore {
    path: PathBuf,
    conn: Connection,
}

impl FlightStore {
    /// Open a database file (creates it and its parent directory if needed)
    /// and run idempotent schema initialization.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!("opening database at {}", path.display());
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL; PRAGMA foreign_keys=ON;",
        )?;

        let store = Self {
            path: path.to_path_buf(),
            conn,
        };
        store.initialize_schema()?;
        info!("database ready at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;

        let store = Self {
            path: PathBuf::from(":memory:"),
            conn,
        };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Create the five tables and their indexes. A no-op when they already
    /// exist; a constraint failure aborts the remaining statements.
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shared connection handle used by the repositories
    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Reject table names that are not part of the schema. Table names
    /// cannot be bound as SQL parameters, so every count/clear goes through
    /// this registry check first.
    fn checked_table(table: &str) -> Result<&str> {
        schema::TABLES
            .iter()
            .copied()
            .find(|t| t.eq_ignore_ascii_case(table))
            .ok_or_else(|| Error::Validation(format!("unknown table: {}", table)))
    }

    /// Count rows in one of the schema tables
    pub fn count(&self, table: &str) -> Result<usize> {
        let table = Self::checked_table(table)?;
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
        Ok(count as usize)
    }

    /// Whether a table holds no rows (drives first-run fixture loading)
    pub fn is_empty(&self, table: &str) -> Result<bool> {
        Ok(self.count(table)? == 0)
    }

    /// Delete all rows, children before parents so foreign keys hold
    pub fn clear_all(&self) -> Result<()> {
        for table in schema::TABLES.iter().rev() {
            self.conn
                .execute(&format!("DELETE FROM {}", table), [])?;
        }
        Ok(())
    }

    /// Drop and recreate the whole schema (used by `seed --reset`)
    pub fn reset(&self) -> Result<()> {
        info!("resetting database schema");
        for table in schema::TABLES.iter().rev() {
            self.conn
                .execute(&format!("DROP TABLE IF EXISTS {}", table), [])?;
        }
        self.initialize_schema()
    }

    /// Get row counts for every table
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            airlines: self.count("Airlines")?,
            destinations: self.count("Destinations")?,
            pilots: self.count("Pilots")?,
            flights: self.count("Flights")?,
            assignments: self.count("Flight_assignments")?,
        })
    }
}

/// Per-table row counts
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub airlines: usize,
    pub destinations: usize,
    pub pilots: usize,
    pub flights: usize,
    pub assignments: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database contents:")?;
        writeln!(f, "  Airlines: {}", self.airlines)?;
        writeln!(f, "  Destinations: {}", self.destinations)?;
        writeln!(f, "  Pilots: {}", self.pilots)?;
        writeln!(f, "  Flights: {}", self.flights)?;
        write!(f, "  Assignments: {}", self.assignments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_is_empty() {
        let store = FlightStore::open_in_memory().unwrap();
        for table in schema::TABLES {
            assert!(store.is_empty(table).unwrap(), "{table} should be empty");
        }
    }

    #[test]
    fn test_initialization_is_idempotent() {
        let store = FlightStore::open_in_memory().unwrap();
        store.initialize_schema().unwrap();
        store.initialize_schema().unwrap();
        assert!(store.is_empty("Airlines").unwrap());
    }

    #[test]
    fn test_unknown_table_rejected() {
        let store = FlightStore::open_in_memory().unwrap();
        assert!(store.count("Bookings").is_err());
    }

    #[test]
    fn test_clear_all_empties_every_table() {
        let store = FlightStore::open_in_memory().unwrap();
        store
            .conn()
            .execute(
                "INSERT INTO Airlines (airline_name, airline_code, country) VALUES ('Emirates', 'EK', 'UAE')",
                [],
            )
            .unwrap();
        store
            .conn()
            .execute(
                "INSERT INTO Destinations (destination_name, country, airport_code, timezone)
                 VALUES ('Dubai International', 'UAE', 'DXB', 'GST')",
                [],
            )
            .unwrap();

        store.clear_all().unwrap();
        for table in schema::TABLES {
            assert!(store.is_empty(table).unwrap());
        }
    }

    #[test]
    fn test_reset_recreates_schema() {
        let store = FlightStore::open_in_memory().unwrap();
        store
            .conn()
            .execute(
                "INSERT INTO Airlines (airline_name, airline_code, country) VALUES ('KLM', 'KL', 'Netherlands')",
                [],
            )
            .unwrap();
        assert_eq!(store.count("Airlines").unwrap(), 1);

        store.reset().unwrap();
        assert!(store.is_empty("Airlines").unwrap());
    }

    #[test]
    fn test_reopen_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("ops.db");

        {
            let store = FlightStore::open(&db_path).unwrap();
            store
                .conn()
                .execute(
                    "INSERT INTO Airlines (airline_name, airline_code, country) VALUES ('KLM', 'KL', 'Netherlands')",
                    [],
                )
                .unwrap();
        }

        let store = FlightStore::open(&db_path).unwrap();
        assert_eq!(store.count("Airlines").unwrap(), 1);
    }

    #[test]
    fn test_stats_display() {
        let store = FlightStore::open_in_memory().unwrap();
        let stats = store.stats().unwrap();
        assert_eq!(stats.flights, 0);
        assert!(stats.to_string().contains("Airlines: 0"));
    }
}
