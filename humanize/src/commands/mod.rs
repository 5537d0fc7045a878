pub mod config;
pub mod number;
pub mod size;
pub mod time;
pub mod version;

use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use serde::Serialize;
use std::fmt::Display;

/// A value and its humanized rendering
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Humanized {
    /// Subcommand that produced the output
    pub command: String,
    /// Input as given on the command line
    pub input: String,
    /// Humanized text
    pub output: String,
}

impl Humanized {
    pub fn new(command: &str, input: impl Display, output: impl Into<String>) -> Self {
        Self {
            command: command.to_string(),
            input: input.to_string(),
            output: output.into(),
        }
    }
}

impl Formattable for Humanized {
    fn format_pretty(&self) -> String {
        self.output.clone()
    }
}

/// Print an error and exit with status 1
pub fn fail(ctx: &AppContext, message: &str) -> ! {
    format::error(ctx, message);
    std::process::exit(1);
}

/// Print one record in the requested format, or fail
pub fn print_output<T: Formattable>(ctx: &AppContext, item: &T, format: OutputFormat) {
    match format::format_output(item, format) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => fail(ctx, &format!("formatting output: {}", e)),
    }
}

/// Print several records in the requested format, or fail
pub fn print_output_vec<T: Formattable>(ctx: &AppContext, items: &[T], format: OutputFormat) {
    match format::format_output_vec(items, format) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => fail(ctx, &format!("formatting output: {}", e)),
    }
}

/// Run a command producing a single record and print it
pub fn run(ctx: &AppContext, format: OutputFormat, result: Result<Humanized, String>) {
    match result {
        Ok(record) => print_output(ctx, &record, format),
        Err(e) => fail(ctx, &e),
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
