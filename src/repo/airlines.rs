//! Airline repository

use rusqlite::{params, OptionalExtension};

use crate::airline::Airline;
use crate::storage::FlightStore;
use crate::{Error, Result};

/// Repository for the Airlines table
pub struct AirlineRepo<'a> {
    store: &'a FlightStore,
}

impl<'a> AirlineRepo<'a> {
    pub fn new(store: &'a FlightStore) -> Self {
        Self { store }
    }

    /// Insert an airline and return its assigned id
    pub fn create(&self, airline: &Airline) -> Result<i64> {
        if airline.name.trim().is_empty() || airline.code.trim().is_empty() {
            return Err(Error::Validation(
                "airline name and code are required".to_string(),
            ));
        }

        self.store.conn().execute(
            r#"
            INSERT INTO Airlines (airline_name, airline_code, country, headquarters, fleet_size, established_year)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                airline.name,
                airline.code.to_uppercase(),
                airline.country,
                airline.headquarters,
                airline.fleet_size,
                airline.established_year,
            ],
        )?;
        Ok(self.store.conn().last_insert_rowid())
    }

    /// All airlines in identity order
    pub fn list(&self) -> Result<Vec<Airline>> {
        let mut stmt = self.store.conn().prepare(
            "SELECT airline_id, airline_name, airline_code, country, headquarters, fleet_size, established_year
             FROM Airlines ORDER BY airline_id",
        )?;

        let airlines = stmt
            .query_map([], Self::row_to_airline)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(airlines)
    }

    /// Look up an airline by id
    pub fn get(&self, airline_id: i64) -> Result<Option<Airline>> {
        self.store
            .conn()
            .query_row(
                "SELECT airline_id, airline_name, airline_code, country, headquarters, fleet_size, established_year
                 FROM Airlines WHERE airline_id = ?1",
                [airline_id],
                Self::row_to_airline,
            )
            .optional()
            .map_err(Into::into)
    }

    fn row_to_airline(row: &rusqlite::Row) -> rusqlite::Result<Airline> {
        Ok(Airline {
            airline_id: row.get(0)?,
            name: row.get(1)?,
            code: row.get(2)?,
            country: row.get(3)?,
            headquarters: row.get(4)?,
            fleet_size: row.get(5)?,
            established_year: row.get(6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = AirlineRepo::new(&store);

        let id = repo
            .create(&Airline::new("British Airways", "BA", "United Kingdom").with_details(
                "London", 280, 1974,
            ))
            .unwrap();

        let airline = repo.get(id).unwrap().unwrap();
        assert_eq!(airline.name, "British Airways");
        assert_eq!(airline.fleet_size, 280);
        assert_eq!(airline.label(), "British Airways (BA)");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = AirlineRepo::new(&store);

        repo.create(&Airline::new("KLM", "KL", "Netherlands")).unwrap();
        let err = repo
            .create(&Airline::new("KLM", "XX", "Netherlands"))
            .unwrap_err();

        match err {
            Error::Constraint { field } => assert!(field.contains("airline_name")),
            other => panic!("expected constraint error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_name_rejected_before_write() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = AirlineRepo::new(&store);

        assert!(matches!(
            repo.create(&Airline::new("", "KL", "Netherlands")),
            Err(Error::Validation(_))
        ));
        assert!(store.is_empty("Airlines").unwrap());
    }
}
