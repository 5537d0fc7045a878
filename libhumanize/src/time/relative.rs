//! Plain date rendering and coarse relative phrases.

use crate::error::{HumanizeError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, TimeZone};
pub use chrono_humanize::Accuracy;
use chrono_humanize::HumanTime;
use std::fmt::{self, Write};

#[cfg(test)]
#[path = "relative_tests.rs"]
mod tests;

/// Renders a date with a strftime-style pattern.
///
/// Unknown specifiers are rejected instead of producing garbage.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libhumanize::time::format_date;
///
/// let date = Utc.with_ymd_and_hms(2021, 7, 10, 12, 0, 0).unwrap();
/// assert_eq!(format_date(&date, "%d %b, %Y").unwrap(), "10 Jul, 2021");
/// assert!(format_date(&date, "%Q").is_err());
/// ```
pub fn format_date<Tz>(date: &DateTime<Tz>, format: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let items = parse_format(format)?;

    let mut output = String::new();
    write!(output, "{}", date.format_with_items(items.iter())).map_err(|e| {
        HumanizeError::invalid_input_with_source(
            format!("cannot render {:?} with '{}'", date, format),
            e,
        )
    })?;
    Ok(output)
}

/// Checks a strftime-style pattern, returning its parsed items.
pub fn parse_format(format: &str) -> Result<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(HumanizeError::invalid_input(format!(
            "invalid date format '{}'",
            format
        )));
    }
    Ok(items)
}

/// Parses an RFC 3339 / ISO 8601 timestamp such as `2021-07-09T04:32:27Z`.
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(timestamp.trim()).map_err(|e| {
        HumanizeError::invalid_input_with_source(
            format!("'{}' is not an ISO 8601 timestamp", timestamp),
            e,
        )
    })
}

/// Describes an ISO 8601 timestamp relative to `now` ("2 days ago").
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libhumanize::time::relative_time;
///
/// let now = Utc.with_ymd_and_hms(2021, 7, 11, 4, 32, 27).unwrap();
/// assert_eq!(relative_time("2021-07-09T04:32:27Z", &now).unwrap(), "2 days ago");
/// assert!(relative_time("yesterday-ish", &now).is_err());
/// ```
pub fn relative_time<Tz: TimeZone>(timestamp: &str, now: &DateTime<Tz>) -> Result<String> {
    let date = parse_timestamp(timestamp)?;
    Ok(relative_to(&date, now, Accuracy::Rough))
}

/// Describes `date` relative to `now`: "in 3 hours", "a day ago", "now".
///
/// The tense follows the sign of the distance. Rough phrases within ten
/// seconds collapse to "now".
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libhumanize::time::{Accuracy, relative_to};
///
/// let now = Utc.with_ymd_and_hms(2021, 7, 11, 4, 32, 27).unwrap();
/// let later = Utc.with_ymd_and_hms(2021, 7, 11, 7, 32, 27).unwrap();
/// assert_eq!(relative_to(&later, &now, Accuracy::Rough), "in 3 hours");
/// assert_eq!(relative_to(&now, &later, Accuracy::Rough), "3 hours ago");
/// ```
pub fn relative_to<Tz1: TimeZone, Tz2: TimeZone>(
    date: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
    accuracy: Accuracy,
) -> String {
    let human = HumanTime::from(date.naive_utc() - now.naive_utc());
    match accuracy {
        Accuracy::Rough => format!("{}", human),
        Accuracy::Precise => format!("{:#}", human),
    }
}
