use crate::format::{ColorChoice, Formattable, OutputFormat};
use libhumanize::size::UnitSystem;
use libhumanize::time::{TimeMode, parse_format};
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,
    /// Formatting defaults handed to the library
    #[serde(default)]
    pub defaults: libhumanize::Config,
}

/// Style configuration section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StyleConfig {
    /// Output format: pretty, json, yaml
    #[serde(default)]
    pub format: OutputFormat,
    /// Color output: auto, always, never
    #[serde(default)]
    pub color: ColorChoice,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: Self =
            toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))?;
        config
            .defaults
            .validate()
            .map_err(|e| format!("Invalid config file: {}", e))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, toml_str).map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }
}

impl Formattable for Config {
    fn format_pretty(&self) -> String {
        let time = &self.defaults.time;
        let mut output = format!(
            "[style]\nformat = \"{}\"\ncolor = \"{}\"\n",
            self.style.format, self.style.color
        );

        output.push_str(&format!(
            "\n[defaults.size]\nunits = \"{}\"\n",
            self.defaults.size.units
        ));
        output.push_str(&format!(
            "\n[defaults.number]\nfraction_precision = {}\n",
            self.defaults.number.fraction_precision
        ));
        output.push_str(&format!(
            "\n[defaults.time]\nday_format = \"{}\"\ndate_format = \"{}\"\ntimestamp_format = \"{}\"\nyear_threshold_months = {}\nnatural_time = \"{}\"\n",
            time.day_format,
            time.date_format,
            time.timestamp_format,
            time.year_threshold_months,
            time.natural_time
        ));

        output
    }
}

/// Get the config file path, respecting HUMANIZE_CONFIG environment variable
pub fn get_config_path() -> PathBuf {
    if let Ok(config_path) = env::var("HUMANIZE_CONFIG") {
        return PathBuf::from(config_path);
    }

    // Default to ~/.config/humanize/config.toml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("humanize").join("config.toml")
    } else {
        // Fallback to current directory
        PathBuf::from("config.toml")
    }
}

/// Initialize a new config file with default values
pub fn init_config(config_path: &Path) -> Result<(), String> {
    if config_path.exists() {
        return Err(
            "Config file already exists. Use 'humanize config set' to edit or 'rm' to recreate."
                .to_string(),
        );
    }

    Config::default().save(config_path)
}

/// Get a configuration value by key (supports nested keys like "defaults.time.day_format")
pub fn get_config_value(config_path: &Path, key: &str) -> Result<String, String> {
    let config = Config::load(config_path)?;
    let root = toml::Value::try_from(&config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    let value = key
        .split('.')
        .try_fold(&root, |value, part| value.get(part))
        .ok_or_else(|| format!("Unknown config key: {}", key))?;

    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Table(_) => {
            toml::to_string_pretty(value).map_err(|e| format!("Failed to serialize config: {}", e))
        }
        other => Ok(other.to_string()),
    }
}

/// Set a configuration value by key (supports nested keys like "style.format")
pub fn set_config_value(config_path: &Path, key: &str, value: &str) -> Result<(), String> {
    // Load existing config or create default
    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        Config::default()
    };

    let parts: Vec<&str> = key.split('.').collect();
    let defaults = &mut config.defaults;

    match parts.as_slice() {
        ["style", "format"] => {
            config.style.format = OutputFormat::from(value);
        }
        ["style", "color"] => {
            config.style.color = ColorChoice::from(value);
        }
        ["defaults", "size", "units"] => {
            defaults.size.units = value.parse::<UnitSystem>().map_err(|e| e.to_string())?;
        }
        ["defaults", "number", "fraction_precision"] => {
            defaults.number.fraction_precision = value
                .parse::<f64>()
                .map_err(|_| format!("Invalid number '{}'", value))?;
        }
        ["defaults", "time", "day_format"] => {
            defaults.time.day_format = checked_pattern(value)?;
        }
        ["defaults", "time", "date_format"] => {
            defaults.time.date_format = checked_pattern(value)?;
        }
        ["defaults", "time", "timestamp_format"] => {
            defaults.time.timestamp_format = checked_pattern(value)?;
        }
        ["defaults", "time", "year_threshold_months"] => {
            defaults.time.year_threshold_months = value
                .parse::<u32>()
                .map_err(|_| format!("Invalid month count '{}'", value))?;
        }
        ["defaults", "time", "natural_time"] => {
            defaults.time.natural_time = value.parse::<TimeMode>().map_err(|e| e.to_string())?;
        }
        _ => return Err(format!("Unknown config key: {}", key)),
    }

    config
        .defaults
        .validate()
        .map_err(|e| format!("Invalid value for {}: {}", key, e))?;
    config.save(config_path)?;

    Ok(())
}

fn checked_pattern(value: &str) -> Result<String, String> {
    parse_format(value).map_err(|e| e.to_string())?;
    Ok(value.to_string())
}

/// Display the entire configuration
pub fn display_config(config_path: &Path) -> Result<Config, String> {
    Config::load(config_path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
