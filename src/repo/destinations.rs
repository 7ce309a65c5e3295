//! Destination repository
//!
//! Airport codes are canonicalized to uppercase on every write path, so a
//! destination added as "tst" is stored and matched as "TST".

use rusqlite::{params, OptionalExtension};

use crate::destination::Destination;
use crate::storage::FlightStore;
use crate::{Error, Result};

/// Repository for the Destinations table
pub struct DestinationRepo<'a> {
    store: &'a FlightStore,
}

impl<'a> DestinationRepo<'a> {
    pub fn new(store: &'a FlightStore) -> Self {
        Self { store }
    }

    /// Insert a destination and return its assigned id
    pub fn create(&self, destination: &Destination) -> Result<i64> {
        if destination.name.trim().is_empty() || destination.airport_code.trim().is_empty() {
            return Err(Error::Validation(
                "destination name and airport code are required".to_string(),
            ));
        }

        self.store.conn().execute(
            r#"
            INSERT INTO Destinations (destination_name, country, airport_code, timezone)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                destination.name,
                destination.country,
                destination.airport_code.to_uppercase(),
                destination.timezone,
            ],
        )?;
        Ok(self.store.conn().last_insert_rowid())
    }

    /// All destinations, alphabetical by name
    pub fn list(&self) -> Result<Vec<Destination>> {
        let mut stmt = self.store.conn().prepare(
            "SELECT destination_id, destination_name, country, airport_code, timezone
             FROM Destinations ORDER BY destination_name",
        )?;

        let destinations = stmt
            .query_map([], Self::row_to_destination)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(destinations)
    }

    /// Look up a destination by id
    pub fn get(&self, destination_id: i64) -> Result<Option<Destination>> {
        self.store
            .conn()
            .query_row(
                "SELECT destination_id, destination_name, country, airport_code, timezone
                 FROM Destinations WHERE destination_id = ?1",
                [destination_id],
                Self::row_to_destination,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Update one of the mutable fields: name, country, code or timezone.
    /// Any other field name is rejected without touching the store.
    pub fn update_field(&self, destination_id: i64, field: &str, value: &str) -> Result<()> {
        let (column, value) = match field.to_lowercase().as_str() {
            "name" => ("destination_name", value.to_string()),
            "country" => ("country", value.to_string()),
            "code" => ("airport_code", value.to_uppercase()),
            "timezone" => ("timezone", value.to_string()),
            other => {
                return Err(Error::Validation(format!(
                    "unknown destination field: {}",
                    other
                )))
            }
        };

        let updated = self.store.conn().execute(
            &format!("UPDATE Destinations SET {} = ?1 WHERE destination_id = ?2", column),
            params![value, destination_id],
        )?;

        if updated == 0 {
            return Err(Error::NotFound(format!("destination {}", destination_id)));
        }
        Ok(())
    }

    fn row_to_destination(row: &rusqlite::Row) -> rusqlite::Result<Destination> {
        Ok(Destination {
            destination_id: row.get(0)?,
            name: row.get(1)?,
            country: row.get(2)?,
            airport_code: row.get(3)?,
            timezone: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_code_uppercased_on_create() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = DestinationRepo::new(&store);

        let id = repo
            .create(&Destination::new("Test City", "Testland", "tst", "GMT"))
            .unwrap();

        let stored = repo.get(id).unwrap().unwrap();
        assert_eq!(stored.airport_code, "TST");
    }

    #[test]
    fn test_airport_code_uppercased_on_update() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = DestinationRepo::new(&store);

        let id = repo
            .create(&Destination::new("Test City", "Testland", "TST", "GMT"))
            .unwrap();
        repo.update_field(id, "code", "xyz").unwrap();

        let stored = repo.get(id).unwrap().unwrap();
        assert_eq!(stored.airport_code, "XYZ");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = DestinationRepo::new(&store);

        let id = repo
            .create(&Destination::new("Test City", "Testland", "TST", "GMT"))
            .unwrap();

        let err = repo.update_field(id, "runways", "2").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let stored = repo.get(id).unwrap().unwrap();
        assert_eq!(stored.name, "Test City");
    }

    #[test]
    fn test_update_missing_destination_is_not_found() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = DestinationRepo::new(&store);

        assert!(matches!(
            repo.update_field(99, "name", "Nowhere"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = DestinationRepo::new(&store);

        repo.create(&Destination::new("London Heathrow", "United Kingdom", "LHR", "GMT"))
            .unwrap();
        let err = repo
            .create(&Destination::new("London Other", "United Kingdom", "lhr", "GMT"))
            .unwrap_err();

        match err {
            Error::Constraint { field } => assert!(field.contains("airport_code")),
            other => panic!("expected constraint error, got {other:?}"),
        }
    }

    #[test]
    fn test_list_is_alphabetical() {
        let store = FlightStore::open_in_memory().unwrap();
        let repo = DestinationRepo::new(&store);

        repo.create(&Destination::new("Zurich Airport", "Switzerland", "ZUR", "CET"))
            .unwrap();
        repo.create(&Destination::new("Amsterdam Schiphol", "Netherlands", "AMS", "CET"))
            .unwrap();
        repo.create(&Destination::new("Madrid Barajas", "Spain", "MAD", "CET"))
            .unwrap();

        let names: Vec<String> = repo.list().unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec!["Amsterdam Schiphol", "Madrid Barajas", "Zurich Airport"]
        );
    }
}
