//! Analysis configuration file support.
//!
//! Thresholds and bounds for a report run, loaded from a TOML file or
//! taken from the defaults the monitoring program prescribes.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::api::{MetricBounds, TemperatureUnit};

/// Error loading or validating an analysis configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Thresholds and bounds for one report run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Intervals longer than this count as missing data, in minutes.
    #[serde(default = "default_gap_threshold_minutes")]
    pub gap_threshold_minutes: i64,
    /// Acceptance bounds for temperature, degrees Fahrenheit.
    #[serde(default = "default_temperature_bounds")]
    pub temperature_bounds: MetricBounds,
    /// Acceptance bounds for relative humidity, %RH.
    #[serde(default = "default_humidity_bounds")]
    pub humidity_bounds: MetricBounds,
    /// Unit the temperature readings are stored in.
    #[serde(default = "default_temperature_unit")]
    pub temperature_unit: TemperatureUnit,
}

fn default_gap_threshold_minutes() -> i64 {
    15
}

fn default_temperature_bounds() -> MetricBounds {
    MetricBounds::new(69.0, 72.0)
}

fn default_humidity_bounds() -> MetricBounds {
    MetricBounds::new(25.5, 29.5)
}

fn default_temperature_unit() -> TemperatureUnit {
    TemperatureUnit::Celsius
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            gap_threshold_minutes: default_gap_threshold_minutes(),
            temperature_bounds: default_temperature_bounds(),
            humidity_bounds: default_humidity_bounds(),
            temperature_unit: default_temperature_unit(),
        }
    }
}

impl AnalysisConfig {
    /// Load an analysis configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AnalysisConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read, parsed, or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AnalysisConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for contradictory settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gap_threshold_minutes < 0 {
            return Err(ConfigError::Invalid(format!(
                "gap threshold must be non-negative, got {} minutes",
                self.gap_threshold_minutes
            )));
        }
        if TimeDelta::try_minutes(self.gap_threshold_minutes).is_none() {
            return Err(ConfigError::Invalid(format!(
                "gap threshold of {} minutes is not a representable duration",
                self.gap_threshold_minutes
            )));
        }
        for (name, bounds) in [
            ("temperature", self.temperature_bounds),
            ("humidity", self.humidity_bounds),
        ] {
            if bounds.lower > bounds.upper {
                return Err(ConfigError::Invalid(format!(
                    "{} lower bound {} exceeds upper bound {}",
                    name, bounds.lower, bounds.upper
                )));
            }
        }
        Ok(())
    }

    /// Gap threshold as a duration.
    ///
    /// A value beyond chrono's range (rejected by [`validate`](Self::validate))
    /// saturates to the maximum duration, under which no interval counts
    /// as a gap.
    pub fn gap_threshold(&self) -> TimeDelta {
        TimeDelta::try_minutes(self.gap_threshold_minutes).unwrap_or(TimeDelta::MAX)
    }
}
