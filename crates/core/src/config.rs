//! Configuration for the processor core.
//!
//! This module defines the small set of knobs a simulation run accepts:
//! 1. **Tracing:** Per-stage and retirement trace output.
//! 2. **Run limits:** The cycle budget for [`run`](crate::sim::Simulator::run).
//! 3. **I/O:** The initial input-port value.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or built
//! in code with `Config::default()` and struct update syntax.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// Default cycle budget for a bounded run.
const DEFAULT_MAX_CYCLES: u64 = 10_000;

/// Simulation run parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit per-stage and retirement trace events.
    pub trace: bool,
    /// Cycle budget for bounded runs.
    pub max_cycles: u64,
    /// Initial value of the byte-wide input port.
    pub input_port: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace: false,
            max_cycles: DEFAULT_MAX_CYCLES,
            input_port: 0,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
