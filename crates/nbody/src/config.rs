//! Run configuration shared by every core operation.
//!
//! `SimConfig` is the one place the gravitational constant and the time
//! step live. The force model and all diagnostics read `G` from here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NBodyError, Result};
use crate::forces::G;

/// Default integration step: six minutes of simulated time
pub const DEFAULT_DT: f64 = 360.0;

/// Default sampling cadence for trajectory recording, in steps
pub const DEFAULT_SAMPLE_INTERVAL: usize = 10;

/// Fixed-step simulation parameters
///
/// Every field has a default, so a TOML file only needs the values it
/// overrides:
///
/// ```
/// use nbody::config::SimConfig;
///
/// let config = SimConfig::from_toml_str("dt = 60.0").unwrap();
/// assert_eq!(config.dt, 60.0);
/// assert_eq!(config.gravitational_constant, nbody::forces::G);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Time step in seconds, fixed for the lifetime of a run
    pub dt: f64,
    /// Gravitational constant in m³ kg⁻¹ s⁻²
    pub gravitational_constant: f64,
    /// Steps between trajectory samples (0 disables sampling)
    pub sample_interval: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            gravitational_constant: G,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }
}

impl SimConfig {
    /// Returns a copy of this configuration with a different time step.
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks that the step and the gravitational constant are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(NBodyError::config(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }
        if !(self.gravitational_constant.is_finite() && self.gravitational_constant > 0.0) {
            return Err(NBodyError::config(format!(
                "gravitational_constant must be positive and finite, got {}",
                self.gravitational_constant
            )));
        }
        Ok(())
    }
}
