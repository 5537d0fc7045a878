//! Natural-language days and times relative to a reference instant.

use super::relative::format_date;
use super::{DATE_FORMAT, DAY_FORMAT};
use crate::error::{HumanizeError, Result};
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "natural_tests.rs"]
mod tests;

/// Dates more than this many calendar months away get a year in
/// [`natural_date`].
pub const DEFAULT_YEAR_THRESHOLD_MONTHS: u32 = 4;

/// How [`natural_time_with`] measures the distance between two instants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    /// Signed elapsed duration, bucketed into seconds, minutes or hours.
    #[default]
    Elapsed,
    /// Field-by-field comparison of hour, minute and second, ignoring the
    /// date. Kept for output compatibility; wrong across hour and day
    /// boundaries (23:58 vs 00:02 reports hours, not minutes).
    Components,
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeMode::Elapsed => f.write_str("elapsed"),
            TimeMode::Components => f.write_str("components"),
        }
    }
}

impl FromStr for TimeMode {
    type Err = HumanizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "elapsed" => Ok(TimeMode::Elapsed),
            "components" => Ok(TimeMode::Components),
            other => Err(HumanizeError::invalid_input(format!(
                "unknown time mode '{}', expected elapsed or components",
                other
            ))),
        }
    }
}

/// Returns "Today", "Yesterday" or "Tomorrow" when `date` falls in the same
/// month as `now`, otherwise `date` rendered with `format`.
///
/// `date` is compared and rendered in the time zone of `now`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libhumanize::time::{natural_day, DAY_FORMAT};
///
/// let now = Utc.with_ymd_and_hms(2021, 7, 10, 12, 0, 0).unwrap();
/// let yesterday = Utc.with_ymd_and_hms(2021, 7, 9, 8, 30, 0).unwrap();
/// let later = Utc.with_ymd_and_hms(2021, 7, 20, 8, 30, 0).unwrap();
///
/// assert_eq!(natural_day(&yesterday, &now, DAY_FORMAT).unwrap(), "Yesterday");
/// assert_eq!(natural_day(&later, &now, DAY_FORMAT).unwrap(), "20 Jul");
/// ```
pub fn natural_day<Tz>(date: &DateTime<Tz>, now: &DateTime<Tz>, format: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let date = date.with_timezone(&now.timezone());

    if date.year() == now.year() && date.month() == now.month() {
        match i64::from(now.day()) - i64::from(date.day()) {
            0 => return Ok("Today".to_string()),
            1 => return Ok("Yesterday".to_string()),
            -1 => return Ok("Tomorrow".to_string()),
            _ => {}
        }
    }

    format_date(&date, format)
}

/// Like [`natural_day`], but includes the year for dates more than four
/// calendar months away from `now`, in either direction.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libhumanize::time::natural_date;
///
/// let now = Utc.with_ymd_and_hms(2021, 7, 10, 12, 0, 0).unwrap();
/// let tomorrow = Utc.with_ymd_and_hms(2021, 7, 11, 9, 0, 0).unwrap();
/// let next_year = Utc.with_ymd_and_hms(2022, 1, 10, 9, 0, 0).unwrap();
///
/// assert_eq!(natural_date(&tomorrow, &now).unwrap(), "Tomorrow");
/// assert_eq!(natural_date(&next_year, &now).unwrap(), "10 Jan, 2022");
/// ```
pub fn natural_date<Tz>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    natural_date_with(
        date,
        now,
        DAY_FORMAT,
        DATE_FORMAT,
        DEFAULT_YEAR_THRESHOLD_MONTHS,
    )
}

/// [`natural_date`] with explicit patterns and threshold.
pub fn natural_date_with<Tz>(
    date: &DateTime<Tz>,
    now: &DateTime<Tz>,
    day_format: &str,
    year_format: &str,
    threshold_months: u32,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let local = date.with_timezone(&now.timezone());
    let distance = (month_index(now) - month_index(&local)).unsigned_abs();

    let format = if distance > u64::from(threshold_months) {
        year_format
    } else {
        day_format
    };
    natural_day(date, now, format)
}

fn month_index<Tz: TimeZone>(instant: &DateTime<Tz>) -> i64 {
    i64::from(instant.year()) * 12 + i64::from(instant.month0())
}

/// Describes `date` relative to `now` in seconds, minutes or hours, using
/// elapsed time.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libhumanize::time::natural_time;
///
/// let now = Utc.with_ymd_and_hms(2021, 7, 10, 12, 0, 0).unwrap();
/// let earlier = Utc.with_ymd_and_hms(2021, 7, 10, 8, 0, 0).unwrap();
/// let soon = Utc.with_ymd_and_hms(2021, 7, 10, 12, 1, 0).unwrap();
///
/// assert_eq!(natural_time(&earlier, &now), "4 hours ago");
/// assert_eq!(natural_time(&soon, &now), "A minute from now");
/// assert_eq!(natural_time(&now, &now), "A moment ago");
/// ```
pub fn natural_time<Tz: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    natural_time_with(date, now, TimeMode::Elapsed)
}

/// [`natural_time`] with an explicit [`TimeMode`].
pub fn natural_time_with<Tz: TimeZone>(
    date: &DateTime<Tz>,
    now: &DateTime<Tz>,
    mode: TimeMode,
) -> String {
    match mode {
        TimeMode::Elapsed => {
            let seconds = now.timestamp() - date.timestamp();
            if seconds.unsigned_abs() < 60 {
                describe(seconds, Unit::Second)
            } else if seconds.unsigned_abs() < 3600 {
                describe(seconds / 60, Unit::Minute)
            } else {
                describe(seconds / 3600, Unit::Hour)
            }
        }
        TimeMode::Components => {
            let date = date.with_timezone(&now.timezone());
            let difference = |a: u32, b: u32| i64::from(a) - i64::from(b);

            if now.hour() == date.hour() && now.minute() == date.minute() {
                describe(difference(now.second(), date.second()), Unit::Second)
            } else if now.hour() == date.hour() {
                describe(difference(now.minute(), date.minute()), Unit::Minute)
            } else {
                describe(difference(now.hour(), date.hour()), Unit::Hour)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Unit {
    Second,
    Minute,
    Hour,
}

impl Unit {
    fn name(self, count: u64) -> &'static str {
        match (self, count) {
            (Unit::Second, 1) => "second",
            (Unit::Second, _) => "seconds",
            (Unit::Minute, 1) => "minute",
            (Unit::Minute, _) => "minutes",
            (Unit::Hour, 1) => "hour",
            (Unit::Hour, _) => "hours",
        }
    }
}

/// `difference` is `now - date` in `unit`; positive means the past.
fn describe(difference: i64, unit: Unit) -> String {
    match (unit, difference) {
        (_, 0) => "A moment ago".to_string(),
        (Unit::Minute, 1) => "A minute ago".to_string(),
        (Unit::Minute, -1) => "A minute from now".to_string(),
        (Unit::Hour, 1) => "An hour ago".to_string(),
        (Unit::Hour, -1) => "An hour from now".to_string(),
        (_, d) if d > 0 => format!("{} {} ago", d, unit.name(d.unsigned_abs())),
        (_, d) => format!(
            "{} {} from now",
            d.unsigned_abs(),
            unit.name(d.unsigned_abs())
        ),
    }
}
