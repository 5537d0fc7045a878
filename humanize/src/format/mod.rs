use crate::context::AppContext;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::IsTerminal;

/// Trait for output formatting that can be TTY-aware or plain text
pub trait OutputFormatter: Send + Sync {
    /// Print a success message
    fn success(&self, message: &str);

    /// Print an error message
    fn error(&self, message: &str);
}

/// TTY-aware formatter with colors
pub struct TtyFormatter;

impl OutputFormatter for TtyFormatter {
    fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message);
    }
}

/// Plain text formatter for non-TTY output (piped, scripted)
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, message: &str) {
        println!("✓ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Create the appropriate formatter for the resolved color choice
pub fn create_formatter(color: ColorChoice) -> Box<dyn OutputFormatter> {
    if should_color(color) {
        Box::new(TtyFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}

/// Check if we should use colors in output
pub fn should_color(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var("NO_COLOR").is_err()
                && (std::io::stdout().is_terminal() || std::io::stderr().is_terminal())
        }
    }
}

/// Print a success message with optional coloring
pub fn success(ctx: &AppContext, message: &str) {
    create_formatter(ctx.config.style.color).success(message);
}

/// Print an error message with optional coloring
pub fn error(ctx: &AppContext, message: &str) {
    create_formatter(ctx.config.style.color).error(message);
}

/// Whether output should be colored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<&str> for ColorChoice {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" | "true" | "yes" => ColorChoice::Always,
            "never" | "false" | "no" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChoice::Auto => f.write_str("auto"),
            ColorChoice::Always => f.write_str("always"),
            ColorChoice::Never => f.write_str("never"),
        }
    }
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            _ => OutputFormat::Pretty,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => f.write_str("pretty"),
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Trait for types that can be formatted for CLI output
pub trait Formattable: Serialize {
    /// Format the type for pretty (human-readable) output
    fn format_pretty(&self) -> String;
}

/// Format a single item for output
pub fn format_output<T: Formattable>(item: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Pretty => Ok(item.format_pretty()),
        OutputFormat::Json => serde_json::to_string_pretty(item)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(item).map_err(|e| format!("Failed to serialize to YAML: {}", e))
        }
    }
}

/// Format a vector of items for output
pub fn format_output_vec<T: Formattable>(
    items: &[T],
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Pretty => {
            let output: Vec<String> = items.iter().map(|item| item.format_pretty()).collect();
            Ok(output.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(items)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(items).map_err(|e| format!("Failed to serialize to YAML: {}", e))
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
