//! Flightops CLI - menu-driven flight operations tracker

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use flightops::storage::FlightStore;
use flightops::ui::{self, Icons};
use flightops::{config, menu, seed};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "flightops")]
#[command(version = "0.1.0")]
#[command(about = "Flight operations tracker - airlines, pilots, flights and crew")]
#[command(long_about = r#"
Flightops keeps airlines, destinations, pilots, flights and crew assignments
in a single SQLite database file and gives you:
  • An interactive menu for day-to-day operations
  • Filtered flight views (destination, status, date range, pilot)
  • Traffic, workload and route reports

Example usage:
  flightops                      # open the interactive menu
  flightops seed --reset         # rebuild the database with fixture data
  flightops seed --stats         # print database statistics
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides flightops.toml)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the database with fixture data
    Seed {
        /// Drop all tables and repopulate from scratch
        #[arg(long)]
        reset: bool,

        /// Print aggregate statistics about the database contents
        #[arg(long)]
        stats: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let file_config = config::load_config(None)?;
    let db_path = config::resolve_database_path(cli.database, file_config.as_ref());

    // Store-open failure is the one fatal startup error
    let store = FlightStore::open(&db_path)?;

    match cli.command {
        None => {
            if store.is_empty("Airlines")? {
                ui::info("database", "empty, loading fixture data");
                let summary = seed::populate(&store)?;
                ui::success(&format!(
                    "Seeded {} airlines, {} destinations, {} pilots, {} flights, {} assignments",
                    summary.airlines,
                    summary.destinations,
                    summary.pilots,
                    summary.flights,
                    summary.assignments
                ));
            }
            menu::run(&store)?;
        }

        Some(Commands::Seed { reset, stats }) => {
            if reset {
                store.reset()?;
                let summary = seed::populate(&store)?;
                ui::success(&format!(
                    "Database reset: {} airlines, {} destinations, {} pilots, {} flights, {} assignments",
                    summary.airlines,
                    summary.destinations,
                    summary.pilots,
                    summary.flights,
                    summary.assignments
                ));
            } else if !stats {
                if store.is_empty("Airlines")? {
                    let summary = seed::populate(&store)?;
                    ui::success(&format!(
                        "Seeded {} airlines, {} destinations, {} pilots, {} flights, {} assignments",
                        summary.airlines,
                        summary.destinations,
                        summary.pilots,
                        summary.flights,
                        summary.assignments
                    ));
                } else {
                    println!("Database already populated. Use --reset to recreate.");
                }
            }

            if stats {
                print_statistics(&store)?;
            }
        }
    }

    Ok(())
}

fn print_statistics(store: &FlightStore) -> anyhow::Result<()> {
    let stats = seed::statistics(store)?;

    ui::banner("DATABASE STATISTICS");
    println!(
        "{} Destinations: {} airports across {} countries",
        Icons::GLOBE,
        stats.counts.destinations,
        stats.destination_countries
    );
    println!(
        "{} Pilots: {} (avg. {:.1} years experience)",
        Icons::PERSON,
        stats.counts.pilots,
        stats.avg_pilot_experience
    );
    println!(
        "{} Flights: {} across {} airlines",
        Icons::PLANE,
        stats.counts.flights,
        stats.counts.airlines
    );
    println!("{} Crew assignments: {}", Icons::CLIPBOARD, stats.counts.assignments);

    if !stats.status_distribution.is_empty() {
        println!("\n{} Flight status distribution:", Icons::STATS);
        for (status, count, share) in &stats.status_distribution {
            println!("  {}: {} ({:.1}%)", status, count, share);
        }
    }

    Ok(())
}
