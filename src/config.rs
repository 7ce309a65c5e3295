//! Optional `flightops.toml` configuration
//!
//! The only setting today is the database path. Resolution order:
//! CLI flag, then config file, then the default `FlightManagement.db`
//! in the working directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FlightopsConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("flightops.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("FlightManagement.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<FlightopsConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: FlightopsConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Pick the database path: CLI override first, then config, then default
pub fn resolve_database_path(
    cli: Option<PathBuf>,
    config: Option<&FlightopsConfig>,
) -> PathBuf {
    cli.or_else(|| {
        config
            .and_then(|c| c.database.as_deref())
            .map(PathBuf::from)
    })
    .unwrap_or_else(default_database_path)
}
