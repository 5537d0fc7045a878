//! Formatting defaults.
//!
//! A [`Config`] only supplies defaults: every free function in the crate
//! takes its parameters explicitly. Configuration is loaded with the `config`
//! crate from a YAML string or a file in any format it recognises by
//! extension, merged over the built-in defaults.

use crate::error::{HumanizeError, Result};
use crate::number::DEFAULT_PRECISION;
use crate::size::UnitSystem;
use crate::time::{
    DATE_FORMAT, DAY_FORMAT, DEFAULT_YEAR_THRESHOLD_MONTHS, TIMESTAMP_FORMAT, TimeMode,
    parse_format,
};
use config::{Config as ConfigRs, File, FileFormat};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;


/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub size: SizeConfig,
    #[serde(default)]
    pub number: NumberConfig,
    #[serde(default)]
    pub time: TimeConfig,
}

impl Config {
    /// Parses a `Config` from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = Self::defaults()?.add_source(File::from_str(s, FileFormat::Yaml));
        Self::from_builder(builder, None)
    }

    /// Loads a `Config` from an optional file path.
    ///
    /// Without a path the built-in defaults are returned. A path that does
    /// not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::defaults()?;
        if let Some(p) = path {
            debug!("Loading configuration from {}", p.display());
            builder = builder.add_source(File::from(p).required(true));
        }
        Self::from_builder(builder, path)
    }

    /// Rejects values that would make the formatters fail later.
    pub fn validate(&self) -> Result<()> {
        let precision = self.number.fraction_precision;
        if !precision.is_finite() || precision <= 0.0 {
            return Err(HumanizeError::config(
                format!("number.fraction_precision must be positive, got {}", precision),
                None::<String>,
            ));
        }

        for (key, pattern) in [
            ("time.day_format", &self.time.day_format),
            ("time.date_format", &self.time.date_format),
            ("time.timestamp_format", &self.time.timestamp_format),
        ] {
            parse_format(pattern).map_err(|e| {
                HumanizeError::config_with_source(
                    format!("{} is not a valid date pattern", key),
                    None::<String>,
                    e,
                )
            })?;
        }
        Ok(())
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = ConfigRs::try_from(&Config::default()).map_err(|e| {
            HumanizeError::config_with_source("Failed to load default configuration", None, e)
        })?;
        Ok(ConfigRs::builder().add_source(defaults))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: Option<&Path>,
    ) -> Result<Self> {
        let config: Self = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                HumanizeError::config_with_source(
                    "Failed to deserialize configuration".to_string(),
                    path.map(|p| p.display().to_string()),
                    e,
                )
            })?;
        config.validate()?;
        debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }
}

/// Byte size settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SizeConfig {
    #[serde(default)]
    pub units: UnitSystem,
}

/// Number settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NumberConfig {
    /// Tolerance for continued-fraction approximation.
    #[serde(default = "default_fraction_precision")]
    pub fraction_precision: f64,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            fraction_precision: default_fraction_precision(),
        }
    }
}

fn default_fraction_precision() -> f64 {
    DEFAULT_PRECISION
}

/// Date and time settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeConfig {
    #[serde(default = "default_day_format")]
    pub day_format: String,

    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Dates further than this many months away include the year.
    #[serde(default = "default_year_threshold_months")]
    pub year_threshold_months: u32,

    #[serde(default)]
    pub natural_time: TimeMode,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            day_format: default_day_format(),
            date_format: default_date_format(),
            timestamp_format: default_timestamp_format(),
            year_threshold_months: default_year_threshold_months(),
            natural_time: TimeMode::default(),
        }
    }
}

fn default_day_format() -> String {
    DAY_FORMAT.to_string()
}

fn default_date_format() -> String {
    DATE_FORMAT.to_string()
}

fn default_timestamp_format() -> String {
    TIMESTAMP_FORMAT.to_string()
}

fn default_year_threshold_months() -> u32 {
    DEFAULT_YEAR_THRESHOLD_MONTHS
}
