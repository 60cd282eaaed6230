/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::Args;
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::structs::Floor;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub building: BuildingConfig,
    pub simulation: SimulationConfig,
}

/// Building dimensions. A zero means "not configured" and is prompted for
/// by the session before the building is created.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BuildingConfig {
    pub n_elevators: usize,
    pub top_floor: Floor,
    pub capacity: u32,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Milliseconds between rendered floors, 0 renders without delay.
    pub step_time: u64,
    pub output: OutputFormat,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            step_time: 1000,
            output: OutputFormat::Text,
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}', expected 'text' or 'json'", other)),
        }
    }
}

/// Command-line values that win over the configuration file when given.
#[derive(Args, Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Number of elevators
    #[clap(short, long)]
    pub elevators: Option<usize>,

    /// Top floor of the building
    #[clap(short, long)]
    pub top_floor: Option<Floor>,

    /// Passenger capacity of each elevator
    #[clap(short = 'k', long)]
    pub capacity: Option<u32>,

    /// Seed for the initial elevator placement
    #[clap(long)]
    pub seed: Option<u64>,

    /// Milliseconds per floor while an elevator moves
    #[clap(long)]
    pub step_time: Option<u64>,

    /// Status output: text or json
    #[clap(long)]
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(config_str) => parse_config(&config_str),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("No configuration file at {}, using default settings", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(ConfigError::Read(e)),
    }
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

impl Config {
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        debug!("Applying command line overrides: {:?}", overrides);
        if let Some(n) = overrides.elevators {
            self.building.n_elevators = n;
        }
        if let Some(floor) = overrides.top_floor {
            self.building.top_floor = floor;
        }
        if let Some(n) = overrides.capacity {
            self.building.capacity = n;
        }
        if overrides.seed.is_some() {
            self.building.seed = overrides.seed;
        }
        if let Some(ms) = overrides.step_time {
            self.simulation.step_time = ms;
        }
        if let Some(format) = overrides.output {
            self.simulation.output = format;
        }
    }
}

impl BuildingConfig {
    pub fn is_complete(&self) -> bool {
        self.n_elevators > 0 && self.top_floor > 0 && self.capacity > 0
    }
}
