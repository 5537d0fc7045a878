//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::config::{self, Config};
use crate::format::{ColorChoice, OutputFormat};
use libhumanize::Humanize;
use log::{LevelFilter, debug, warn};
use std::env;

/// How chatty logging on stderr should be
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Warnings and errors only
    #[default]
    Normal,
    /// -v
    Verbose,
    /// -vv
    Debug,
    /// -vvv and above
    Trace,
}

impl VerbosityLevel {
    /// Map the number of `-v` flags to a level
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::Debug,
            _ => VerbosityLevel::Trace,
        }
    }

    /// Log filter for this level
    pub fn level_filter(self) -> LevelFilter {
        match self {
            VerbosityLevel::Normal => LevelFilter::Warn,
            VerbosityLevel::Verbose => LevelFilter::Info,
            VerbosityLevel::Debug => LevelFilter::Debug,
            VerbosityLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(cli_color: ColorChoice) -> Self {
        let config_path = config::get_config_path();
        let file_config = match Config::load(&config_path) {
            Ok(config) => Some(config),
            Err(e) if config_path.exists() => {
                warn!("Ignoring config file {}: {}", config_path.display(), e);
                None
            }
            Err(_) => {
                debug!("No config file at {}, using defaults", config_path.display());
                None
            }
        };
        let env_color = env::var("HUMANIZE_COLOR").ok();
        Self::resolve(file_config, env_color.as_deref(), cli_color)
    }

    fn resolve(
        file_config: Option<Config>,
        env_color: Option<&str>,
        cli_color: ColorChoice,
    ) -> Self {
        // 1. Start with defaults, 2. replaced by the config file if it loaded
        let mut config = file_config.unwrap_or_default();

        // 3. Apply environment variable overrides
        if let Some(color) = env_color {
            config.style.color = ColorChoice::from(color);
        }

        // 4. Apply CLI flag overrides (highest priority)
        // Auto is the clap default, so it never overrides the file or env
        if cli_color != ColorChoice::Auto {
            config.style.color = cli_color;
        }

        Self { config }
    }

    /// Output format from the command flag, falling back to the configured style
    pub fn output_format(&self, flag: Option<&str>) -> OutputFormat {
        flag.map(OutputFormat::from).unwrap_or(self.config.style.format)
    }

    /// Library facade configured with the resolved defaults
    pub fn humanize(&self) -> Result<Humanize, String> {
        Humanize::builder()
            .with_config(self.config.defaults.clone())
            .build()
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
