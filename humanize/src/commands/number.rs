use super::{Humanized, run};
use crate::context::AppContext;
use crate::format::OutputFormat;
use libhumanize::Humanize;

pub fn ordinal(humanize: &Humanize, value: i64) -> Humanized {
    Humanized::new("ordinal", value, humanize.ordinal(value))
}

pub fn comma(humanize: &Humanize, value: f64) -> Result<Humanized, String> {
    let output = humanize.grouped(value).map_err(|e| e.to_string())?;
    Ok(Humanized::new("comma", value, output))
}

/// Integers are scaled exactly; anything else is read as a float
pub fn word(humanize: &Humanize, input: &str) -> Result<Humanized, String> {
    let trimmed = input.trim();
    let output = if let Ok(value) = trimmed.parse::<i128>() {
        humanize.word(value)
    } else if let Ok(value) = trimmed.parse::<f64>() {
        humanize.word_f64(value)
    } else {
        return Err(format!("'{}' is not a number", input));
    };
    Ok(Humanized::new(
        "word",
        trimmed,
        output.map_err(|e| e.to_string())?,
    ))
}

pub fn apnumber(humanize: &Humanize, value: i64) -> Humanized {
    Humanized::new("apnumber", value, humanize.spelled_digit(value))
}

pub fn fraction(humanize: &Humanize, value: f64) -> Result<Humanized, String> {
    let output = humanize.fraction(value).map_err(|e| e.to_string())?;
    Ok(Humanized::new("fraction", value, output))
}

pub fn scientific(humanize: &Humanize, value: f64) -> Result<Humanized, String> {
    let output = humanize.scientific(value).map_err(|e| e.to_string())?;
    Ok(Humanized::new("scientific", value, output))
}

pub fn clamp(
    humanize: &Humanize,
    value: f64,
    floor: Option<f64>,
    ceil: Option<f64>,
) -> Result<Humanized, String> {
    let output = humanize
        .clamp(value, floor, ceil)
        .map_err(|e| e.to_string())?;
    Ok(Humanized::new("clamp", value, output))
}

/// Number subcommands and their arguments
#[derive(Debug, Clone, PartialEq)]
pub enum NumberCommand {
    Ordinal(i64),
    Comma(f64),
    Word(String),
    Apnumber(i64),
    Fraction(f64),
    Scientific(f64),
    Clamp {
        value: f64,
        floor: Option<f64>,
        ceil: Option<f64>,
    },
}

/// Run one number subcommand against the configured facade
pub fn execute(humanize: &Humanize, command: &NumberCommand) -> Result<Humanized, String> {
    match command {
        NumberCommand::Ordinal(value) => Ok(ordinal(humanize, *value)),
        NumberCommand::Comma(value) => comma(humanize, *value),
        NumberCommand::Word(input) => word(humanize, input),
        NumberCommand::Apnumber(value) => Ok(apnumber(humanize, *value)),
        NumberCommand::Fraction(value) => fraction(humanize, *value),
        NumberCommand::Scientific(value) => scientific(humanize, *value),
        NumberCommand::Clamp { value, floor, ceil } => clamp(humanize, *value, *floor, *ceil),
    }
}

/// Handle any number subcommand
pub fn handle_number(ctx: &AppContext, command: NumberCommand, format: OutputFormat) {
    let result = ctx
        .humanize()
        .and_then(|humanize| execute(&humanize, &command));
    run(ctx, format, result);
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
