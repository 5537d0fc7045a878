use super::{Humanized, fail, print_output_vec};
use crate::context::AppContext;
use crate::format::{Formattable, OutputFormat};
use libhumanize::HumanizeError;
use libhumanize::size::{UnitSystem, natural_size};
use log::info;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// One byte count in both unit systems
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Tabled)]
pub struct SizeRow {
    #[tabled(rename = "BYTES")]
    pub bytes: u64,
    #[tabled(rename = "DECIMAL")]
    pub decimal: String,
    #[tabled(rename = "BINARY")]
    pub binary: String,
}

impl Formattable for SizeRow {
    fn format_pretty(&self) -> String {
        format!("{:>20}  {:>12}  {:>12}", self.bytes, self.decimal, self.binary)
    }
}

/// Parse a byte count, rejecting negative counts as invalid input
fn parse_bytes(input: &str) -> Result<u64, String> {
    let input = input.trim();
    if let Ok(bytes) = input.parse::<u64>() {
        return Ok(bytes);
    }
    let signed = input
        .parse::<i64>()
        .map_err(|_| format!("'{}' is not a byte count", input))?;
    Err(HumanizeError::invalid_input(format!(
        "byte count must not be negative, got {}",
        signed
    ))
    .to_string())
}

/// Humanize every byte count with the given unit system
pub fn humanize_sizes(inputs: &[String], system: UnitSystem) -> Result<Vec<Humanized>, String> {
    inputs
        .iter()
        .map(|input| {
            let bytes = parse_bytes(input)?;
            Ok(Humanized::new("size", input, natural_size(bytes, system)))
        })
        .collect()
}

/// Build comparison rows for every byte count
pub fn size_rows(inputs: &[String]) -> Result<Vec<SizeRow>, String> {
    inputs
        .iter()
        .map(|input| {
            let bytes = parse_bytes(input)?;
            Ok(SizeRow {
                bytes,
                decimal: natural_size(bytes, UnitSystem::Decimal),
                binary: natural_size(bytes, UnitSystem::Binary),
            })
        })
        .collect()
}

/// Handle the size command
pub fn handle_size(
    ctx: &AppContext,
    inputs: &[String],
    units: Option<UnitSystem>,
    table: bool,
    format: OutputFormat,
) {
    if table {
        let rows = size_rows(inputs).unwrap_or_else(|e| fail(ctx, &e));
        if format == OutputFormat::Pretty {
            println!("{}", Table::new(&rows).with(Style::empty()));
        } else {
            print_output_vec(ctx, &rows, format);
        }
        return;
    }

    let system = units.unwrap_or(ctx.config.defaults.size.units);
    info!("Formatting {} byte count(s) as {}", inputs.len(), system);
    match humanize_sizes(inputs, system) {
        Ok(records) => print_output_vec(ctx, &records, format),
        Err(e) => fail(ctx, &e),
    }
}

#[cfg(test)]
#[path = "size_tests.rs"]
mod tests;
