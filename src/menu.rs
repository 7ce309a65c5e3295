//! Interactive menu loop
//!
//! Thin orchestration over the repositories: every menu action reads
//! line-based input, calls one or more repository operations and renders
//! the outcome. Domain errors are displayed and the loop continues; only
//! I/O failure on stdin/stdout propagates out.

use std::io::{self, Write};

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::assignment::{Assignment, CrewRole};
use crate::destination::Destination;
use crate::flight::{Flight, FlightStatus};
use crate::repo::{
    AirlineRepo, AssignmentRepo, DestinationRepo, FlightListing, FlightRepo, PilotRepo,
};
use crate::report::ReportEngine;
use crate::storage::FlightStore;
use crate::ui;
use crate::ui::table::{DestinationRow, FlightRow, PilotRow, ScheduleRow};
use crate::{Error, Result};

/// Format expected for operator-entered timestamps
const INPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Run the main menu until the operator exits
pub fn run(store: &FlightStore) -> Result<()> {
    loop {
        print_main_menu();

        let choice = match prompt_number("Enter your choice (1-8)") {
            Ok(choice) => choice,
            Err(err) => {
                ui::error(&err.to_string());
                continue;
            }
        };

        let outcome = match choice {
            1 => add_flight(store),
            2 => view_flights(store),
            3 => update_flight(store),
            4 => assign_pilot(store),
            5 => pilot_schedule(store),
            6 => manage_destinations(store),
            7 => reports(store),
            8 => {
                ui::success("Thank you for using Flightops!");
                return Ok(());
            }
            _ => {
                ui::warn("Invalid choice! Please enter a number between 1-8.");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            ui::error(&err.to_string());
        }

        pause()?;
    }
}

fn print_main_menu() {
    ui::banner("FLIGHT MANAGEMENT SYSTEM");
    println!("1.  Add New Flight");
    println!("2.  View Flights by Criteria");
    println!("3.  Update Flight Information");
    println!("4.  Assign Pilot to Flight");
    println!("5.  View Pilot Schedule");
    println!("6.  Manage Destinations");
    println!("7.  Generate Reports");
    println!("8.  Exit");
}

fn add_flight(store: &FlightStore) -> Result<()> {
    ui::section("Add New Flight");

    let flight_number = prompt("Enter flight number")?;

    println!("\nAvailable Airlines:");
    for airline in AirlineRepo::new(store).list()? {
        println!("{}. {}", airline.airline_id, airline.label());
    }
    let airline_id = prompt_number("Enter airline ID")?;

    println!("\nAvailable Destinations:");
    for destination in DestinationRepo::new(store).list()? {
        println!("{}. {}", destination.destination_id, destination.label());
    }
    let origin_id = prompt_number("Enter origin destination ID")?;
    let destination_id = prompt_number("Enter destination ID")?;

    let departure = prompt_datetime("Enter departure time (YYYY-MM-DD HH:MM)")?;
    let arrival = prompt_datetime("Enter arrival time (YYYY-MM-DD HH:MM)")?;
    let aircraft_type = prompt("Enter aircraft type")?;
    let capacity: u32 = prompt("Enter capacity")?.parse()?;

    FlightRepo::new(store).create(&Flight::new(
        flight_number,
        airline_id,
        origin_id,
        destination_id,
        departure,
        arrival,
        aircraft_type,
        capacity,
    ))?;

    ui::success("Flight added successfully!");
    Ok(())
}

fn view_flights(store: &FlightStore) -> Result<()> {
    ui::section("View Flights");
    println!("1. All flights");
    println!("2. By destination");
    println!("3. By status");
    println!("4. By date range");
    println!("5. By pilot");

    let repo = FlightRepo::new(store);
    let listings = match prompt_number("Choose filter option")? {
        1 => repo.list_all()?,
        2 => {
            println!("\nDestinations:");
            for destination in DestinationRepo::new(store).list()? {
                println!("{}. {}", destination.destination_id, destination.name);
            }
            let destination_id = prompt_number("Enter destination ID")?;
            repo.by_destination(destination_id)?
        }
        3 => {
            let status: FlightStatus =
                prompt("Enter status (Scheduled/Delayed/Cancelled/Completed/In-Flight)")?.parse()?;
            repo.by_status(status)?
        }
        4 => {
            let start = prompt_date("Enter start date (YYYY-MM-DD)")?;
            let end = prompt_date("Enter end date (YYYY-MM-DD)")?;
            repo.by_date_range(start, end)?
        }
        5 => {
            println!("\nPilots:");
            for pilot in PilotRepo::new(store).list()? {
                println!("{}. {}", pilot.pilot_id, pilot.full_name());
            }
            let pilot_id = prompt_number("Enter pilot ID")?;
            repo.by_pilot(pilot_id)?
        }
        _ => {
            ui::warn("Invalid filter option.");
            return Ok(());
        }
    };

    display_listings(&listings);
    Ok(())
}

fn display_listings(listings: &[FlightListing]) {
    if listings.is_empty() {
        println!("No flights found matching the criteria.");
        return;
    }
    let rows: Vec<FlightRow> = listings.iter().map(FlightRow::from).collect();
    println!("{}", ui::render(&rows));
}

fn update_flight(store: &FlightStore) -> Result<()> {
    ui::section("Update Flight");

    let repo = FlightRepo::new(store);
    let flight_number = prompt("Enter flight number to update")?;
    let flight = repo
        .get_by_number(&flight_number)?
        .ok_or_else(|| Error::NotFound(format!("flight {}", flight_number.to_uppercase())))?;

    println!("\nWhat would you like to update?");
    println!("1. Departure time");
    println!("2. Arrival time");
    println!("3. Status");

    match prompt_number("Choose option")? {
        1 => {
            let departure = prompt_datetime("Enter new departure time (YYYY-MM-DD HH:MM)")?;
            repo.set_departure(&flight.flight_number, departure)?;
        }
        2 => {
            let arrival = prompt_datetime("Enter new arrival time (YYYY-MM-DD HH:MM)")?;
            repo.set_arrival(&flight.flight_number, arrival)?;
        }
        3 => {
            let status: FlightStatus =
                prompt("Enter new status (Scheduled/Delayed/Cancelled/Completed/In-Flight)")?
                    .parse()?;
            repo.set_status(&flight.flight_number, status)?;
        }
        _ => {
            ui::warn("Invalid option.");
            return Ok(());
        }
    }

    ui::success("Flight updated successfully!");
    Ok(())
}

fn assign_pilot(store: &FlightStore) -> Result<()> {
    ui::section("Assign Pilot to Flight");

    println!("\nAvailable Flights:");
    for flight in FlightRepo::new(store).list()? {
        println!(
            "{}. {} ({} → departure {})",
            flight.flight_id,
            flight.flight_number,
            flight.status,
            flight.departure_time.format(INPUT_TIME_FORMAT)
        );
    }
    let flight_id = prompt_number("Enter flight ID")?;

    println!("\nAvailable Pilots:");
    for pilot in PilotRepo::new(store).list_active()? {
        println!(
            "{}. {} ({} years experience)",
            pilot.pilot_id,
            pilot.full_name(),
            pilot.experience_years
        );
    }
    let pilot_id = prompt_number("Enter pilot ID")?;

    println!("\nAvailable Roles:");
    println!("1. Captain");
    println!("2. First Officer");
    println!("3. Relief Pilot");
    let role = match prompt_number("Choose role (1-3)")? {
        2 => CrewRole::FirstOfficer,
        3 => CrewRole::ReliefPilot,
        _ => CrewRole::Captain,
    };

    let today = Local::now().date_naive();
    AssignmentRepo::new(store)
        .create(&Assignment::new(flight_id, pilot_id, today).with_role(role))?;

    ui::success(&format!("Pilot assigned successfully as {}!", role));
    Ok(())
}

fn pilot_schedule(store: &FlightStore) -> Result<()> {
    ui::section("Pilot Schedule");

    let repo = PilotRepo::new(store);
    let rows: Vec<PilotRow> = repo.list()?.iter().map(PilotRow::from).collect();
    println!("{}", ui::render(&rows));
    let pilot_id = prompt_number("Enter pilot ID")?;

    let schedule = repo.schedule(pilot_id)?;
    if schedule.is_empty() {
        println!("No flights assigned to this pilot.");
        return Ok(());
    }

    let rows: Vec<ScheduleRow> = schedule.iter().map(ScheduleRow::from).collect();
    println!("{}", ui::render(&rows));
    Ok(())
}

fn manage_destinations(store: &FlightStore) -> Result<()> {
    ui::section("Destination Management");
    println!("1. View all destinations");
    println!("2. Add new destination");
    println!("3. Update destination");

    let repo = DestinationRepo::new(store);
    match prompt_number("Choose option")? {
        1 => {
            let rows: Vec<DestinationRow> =
                repo.list()?.iter().map(DestinationRow::from).collect();
            println!("{}", ui::render(&rows));
        }
        2 => {
            let name = prompt("Enter destination name")?;
            let country = prompt("Enter country")?;
            let code = prompt("Enter airport code")?;
            let timezone = prompt("Enter timezone")?;
            repo.create(&Destination::new(name, country, code, timezone))?;
            ui::success("Destination added successfully!");
        }
        3 => {
            println!("\nDestinations:");
            for destination in repo.list()? {
                println!("{}. {}", destination.destination_id, destination.name);
            }
            let destination_id = prompt_number("Enter destination ID to update")?;
            let field = prompt("Enter field to update (name/country/code/timezone)")?;
            let value = prompt("Enter new value")?;
            repo.update_field(destination_id, &field, &value)?;
            ui::success("Destination updated successfully!");
        }
        _ => ui::warn("Invalid option."),
    }
    Ok(())
}

fn reports(store: &FlightStore) -> Result<()> {
    ui::section("Reports");
    println!("1. Flights per destination");
    println!("2. Flights per pilot");
    println!("3. Flight status summary");
    println!("4. Busiest routes");

    let engine = ReportEngine::new(store);
    match prompt_number("Choose report")? {
        1 => {
            let rows: Vec<(String, usize)> = engine
                .flights_per_destination()?
                .into_iter()
                .map(|r| (r.destination, r.flights))
                .collect();
            println!("{}", ui::counts_table("Destination", &rows));
        }
        2 => {
            let rows: Vec<(String, usize)> = engine
                .flights_per_pilot()?
                .into_iter()
                .map(|r| (r.pilot, r.flights))
                .collect();
            println!("{}", ui::counts_table("Pilot", &rows));
        }
        3 => {
            let rows: Vec<(String, usize)> = engine
                .flight_status_summary()?
                .into_iter()
                .map(|r| (r.status.to_string(), r.flights))
                .collect();
            println!("{}", ui::counts_table("Status", &rows));
        }
        4 => {
            let rows: Vec<(String, usize)> = engine
                .busiest_routes()?
                .into_iter()
                .map(|r| (r.route, r.flights))
                .collect();
            println!("{}", ui::counts_table("Route", &rows));
        }
        _ => ui::warn("Invalid report option."),
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_number(label: &str) -> Result<i64> {
    Ok(prompt(label)?.parse()?)
}

fn prompt_datetime(label: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(&prompt(label)?, INPUT_TIME_FORMAT)?)
}

fn prompt_date(label: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(&prompt(label)?, INPUT_DATE_FORMAT)?)
}

fn pause() -> Result<()> {
    let _ = prompt("\nPress Enter to continue...")?;
    Ok(())
}
