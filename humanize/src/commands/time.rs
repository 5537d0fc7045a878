use super::{Humanized, run};
use crate::context::AppContext;
use crate::format::OutputFormat;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use libhumanize::time::parse_timestamp;
use libhumanize::{CalendarDelta, Humanize, TimeMode};
use log::debug;

const LOCAL_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse an RFC 3339 timestamp or a local `YYYY-MM-DD[ HH:MM[:SS]]` date
pub fn parse_date(input: &str) -> Result<DateTime<Local>, String> {
    let input = input.trim();
    if let Ok(date) = parse_timestamp(input) {
        return Ok(date.with_timezone(&Local));
    }

    let naive = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            format!(
                "'{}' is not a date; use RFC 3339 or YYYY-MM-DD[ HH:MM[:SS]]",
                input
            )
        })?;

    debug!("Parsed '{}' as local {}", input, naive);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| format!("{} does not exist in the local time zone", naive))
}

/// Date subcommands and their arguments
#[derive(Debug, Clone, PartialEq)]
pub enum TimeCommand {
    Day {
        date: String,
        format: Option<String>,
    },
    Date {
        date: String,
        format: Option<String>,
    },
    Time {
        date: String,
        mode: Option<TimeMode>,
    },
    Relative {
        timestamp: String,
    },
    Now {
        format: Option<String>,
    },
    Shift {
        date: String,
        delta: CalendarDelta,
        back: bool,
    },
}

/// Run one date subcommand against the configured facade
pub fn execute(humanize: &Humanize, command: &TimeCommand) -> Result<Humanized, String> {
    match command {
        TimeCommand::Day { date, format } => {
            let parsed = parse_date(date)?;
            let output = match format {
                Some(format) => humanize.natural_day_with(&parsed, format),
                None => humanize.natural_day(&parsed),
            };
            Ok(Humanized::new("day", date, output.map_err(|e| e.to_string())?))
        }
        TimeCommand::Date { date, format } => {
            let parsed = parse_date(date)?;
            let output = match format {
                Some(format) => humanize.natural_date_with(&parsed, format),
                None => humanize.natural_date(&parsed),
            };
            Ok(Humanized::new("date", date, output.map_err(|e| e.to_string())?))
        }
        TimeCommand::Time { date, mode } => {
            let parsed = parse_date(date)?;
            let output = match mode {
                Some(mode) => humanize.natural_time_with(&parsed, *mode),
                None => humanize.natural_time(&parsed),
            };
            Ok(Humanized::new("time", date, output))
        }
        TimeCommand::Relative { timestamp } => {
            let output = humanize
                .relative_time(timestamp)
                .map_err(|e| e.to_string())?;
            Ok(Humanized::new("relative", timestamp, output))
        }
        TimeCommand::Now { format } => {
            let output = match format {
                Some(format) => humanize.now_with(format),
                None => humanize.now(),
            };
            let instant = humanize.now_instant().to_rfc3339();
            Ok(Humanized::new("now", instant, output.map_err(|e| e.to_string())?))
        }
        TimeCommand::Shift { date, delta, back } => {
            let parsed = parse_date(date)?;
            let shifted = if *back {
                humanize.unshift(&parsed, delta)
            } else {
                humanize.shift(&parsed, delta)
            };
            let shifted = shifted.map_err(|e| e.to_string())?;
            let output = humanize
                .date_with(&shifted, &humanize.config().time.timestamp_format)
                .map_err(|e| e.to_string())?;
            Ok(Humanized::new("shift", date, output))
        }
    }
}

/// Handle any date subcommand
pub fn handle_time(ctx: &AppContext, command: TimeCommand, format: OutputFormat) {
    let result = ctx
        .humanize()
        .and_then(|humanize| execute(&humanize, &command));
    run(ctx, format, result);
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
