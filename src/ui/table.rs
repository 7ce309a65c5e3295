use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::destination::Destination;
use crate::pilot::Pilot;
use crate::repo::{FlightListing, ScheduleEntry};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render any derive-Tabled row set with the house style
pub fn render<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Two-column label/count table used by every report view
pub fn counts_table(label_header: &str, rows: &[(String, usize)]) -> String {
    let mut builder = Builder::default();
    builder.push_record([label_header.to_string(), "Flights".to_string()]);
    for (label, count) in rows {
        builder.push_record([label.clone(), count.to_string()]);
    }
    builder.build().with(Style::rounded()).to_string()
}

#[derive(Tabled)]
pub struct FlightRow {
    #[tabled(rename = "Flight")]
    pub flight: String,
    #[tabled(rename = "Airline")]
    pub airline: String,
    #[tabled(rename = "Origin")]
    pub origin: String,
    #[tabled(rename = "Destination")]
    pub destination: String,
    #[tabled(rename = "Crew")]
    pub crew: String,
    #[tabled(rename = "Departure")]
    pub departure: String,
    #[tabled(rename = "Arrival")]
    pub arrival: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&FlightListing> for FlightRow {
    fn from(listing: &FlightListing) -> Self {
        Self {
            flight: listing.flight_number.clone(),
            airline: listing.airline.clone(),
            origin: listing.origin.clone(),
            destination: listing.destination.clone(),
            crew: listing.crew_display().to_string(),
            departure: listing.departure_time.format(TIME_FORMAT).to_string(),
            arrival: listing.arrival_time.format(TIME_FORMAT).to_string(),
            status: listing.status.to_string(),
        }
    }
}

#[derive(Tabled)]
pub struct DestinationRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Timezone")]
    pub timezone: String,
}

impl From<&Destination> for DestinationRow {
    fn from(destination: &Destination) -> Self {
        Self {
            id: destination.destination_id,
            name: destination.name.clone(),
            country: destination.country.clone(),
            code: destination.airport_code.clone(),
            timezone: destination.timezone.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct PilotRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "License")]
    pub license: String,
    #[tabled(rename = "Experience")]
    pub experience: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&Pilot> for PilotRow {
    fn from(pilot: &Pilot) -> Self {
        Self {
            id: pilot.pilot_id,
            name: pilot.full_name(),
            license: pilot.license_number.clone(),
            experience: format!("{} years", pilot.experience_years),
            status: pilot.status.to_string(),
        }
    }
}

#[derive(Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "Flight")]
    pub flight: String,
    #[tabled(rename = "Airline")]
    pub airline: String,
    #[tabled(rename = "Route")]
    pub route: String,
    #[tabled(rename = "Departure")]
    pub departure: String,
    #[tabled(rename = "Arrival")]
    pub arrival: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Role")]
    pub role: String,
}

impl From<&ScheduleEntry> for ScheduleRow {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            flight: entry.flight_number.clone(),
            airline: entry.airline.clone(),
            route: entry.route(),
            departure: entry.departure_time.format(TIME_FORMAT).to_string(),
            arrival: entry.arrival_time.format(TIME_FORMAT).to_string(),
            status: entry.flight_status.to_string(),
            role: entry.role.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_table_contains_rows() {
        let rows = vec![("London Heathrow".to_string(), 4), ("New York JFK".to_string(), 0)];
        let table = counts_table("Destination", &rows);
        assert!(table.contains("Destination"));
        assert!(table.contains("London Heathrow"));
        assert!(table.contains("New York JFK"));
    }
}
