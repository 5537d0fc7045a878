//! Calendar-component date arithmetic.
//!
//! A [`CalendarDelta`] is applied to the calendar fields of an instant, not
//! to its elapsed seconds: adding one month to 10 March lands on 10 April
//! whatever the month lengths in between. Fields that overflow are resolved
//! leniently by the calendar: the day after the last day of a month is the
//! first of the next one, so 31 January plus one month is 2 or 3 March
//! depending on the year.

use crate::error::{HumanizeError, Result};
use chrono::offset::LocalResult;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use log::trace;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "delta_tests.rs"]
mod tests;

/// Signed offsets per calendar component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarDelta {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CalendarDelta {
    /// Creates an empty delta.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn years(mut self, years: i64) -> Self {
        self.years = years;
        self
    }

    pub fn months(mut self, months: i64) -> Self {
        self.months = months;
        self
    }

    pub fn days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    pub fn hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    pub fn minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Returns true when every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Negates every component, or `None` if one of them is `i64::MIN`.
    pub fn checked_neg(&self) -> Option<Self> {
        Some(Self {
            years: self.years.checked_neg()?,
            months: self.months.checked_neg()?,
            days: self.days.checked_neg()?,
            hours: self.hours.checked_neg()?,
            minutes: self.minutes.checked_neg()?,
            seconds: self.seconds.checked_neg()?,
        })
    }

    /// Total of the time-of-day components in seconds.
    fn clock_seconds(&self) -> Option<i64> {
        self.hours
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)
    }
}

/// Applies a delta to an instant in the instant's own time zone.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libhumanize::time::{CalendarDelta, add_delta};
///
/// let start = Utc.with_ymd_and_hms(2021, 7, 10, 12, 0, 0).unwrap();
/// let later = add_delta(&start, &CalendarDelta::new().months(6).days(3)).unwrap();
/// assert_eq!(later, Utc.with_ymd_and_hms(2022, 1, 13, 12, 0, 0).unwrap());
/// ```
pub fn add_delta<Tz: TimeZone>(instant: &DateTime<Tz>, delta: &CalendarDelta) -> Result<DateTime<Tz>> {
    let shifted = shift_naive(&instant.naive_local(), delta)?;

    match instant.timezone().from_local_datetime(&shifted) {
        LocalResult::Single(result) => Ok(result),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(HumanizeError::unrepresentable(format!(
            "{} does not exist in the time zone of {:?}",
            shifted, instant
        ))),
    }
}

/// Applies the negated delta.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libhumanize::time::{CalendarDelta, subtract_delta};
///
/// let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
/// let earlier = subtract_delta(&start, &CalendarDelta::new().days(1)).unwrap();
/// assert_eq!(earlier, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
/// ```
pub fn subtract_delta<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    delta: &CalendarDelta,
) -> Result<DateTime<Tz>> {
    let negated = delta
        .checked_neg()
        .ok_or_else(|| HumanizeError::unrepresentable(format!("cannot negate {:?}", delta)))?;
    add_delta(instant, &negated)
}

/// Applies a delta to a wall-clock date and time.
pub fn shift_naive(datetime: &NaiveDateTime, delta: &CalendarDelta) -> Result<NaiveDateTime> {
    let overflow = || {
        HumanizeError::unrepresentable(format!(
            "{} shifted by {:?} is outside the supported calendar range",
            datetime, delta
        ))
    };

    // Months since year 0; month overflow rolls into the year.
    let month_index = i64::from(datetime.year())
        .checked_mul(12)
        .and_then(|m| m.checked_add(i64::from(datetime.month0())))
        .and_then(|m| m.checked_add(delta.years.checked_mul(12)?))
        .and_then(|m| m.checked_add(delta.months))
        .ok_or_else(overflow)?;
    let year = i32::try_from(month_index.div_euclid(12)).map_err(|_| overflow())?;
    let month = (month_index.rem_euclid(12) + 1) as u32;
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(overflow)?;

    let day_offset = i64::from(datetime.day0())
        .checked_add(delta.days)
        .and_then(TimeDelta::try_days)
        .ok_or_else(overflow)?;
    let clock_offset = delta
        .clock_seconds()
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(overflow)?;

    let shifted = first_of_month
        .checked_add_signed(day_offset)
        .map(|date| date.and_time(datetime.time()))
        .and_then(|moment| moment.checked_add_signed(clock_offset))
        .ok_or_else(overflow)?;

    trace!("{} + {:?} = {}", datetime, delta, shifted);
    Ok(shifted)
}
