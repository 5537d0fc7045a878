//! Clock-backed, configured API.
//!
//! [`Humanize`] bundles a [`Config`] with a [`Clock`] and exposes every
//! formatter of the crate with its defaults filled in. Dates are compared
//! and rendered in local time.

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::number;
use crate::size::{self, UnitSystem};
use crate::time::{self, CalendarDelta};
use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(test)]
#[path = "humanize_tests.rs"]
mod tests;

/// High-level entry point for humanizing values.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libhumanize::Humanize;
/// use libhumanize::clock::FixedClock;
///
/// let now = Utc.with_ymd_and_hms(2021, 7, 10, 12, 0, 0).unwrap();
/// let humanize = Humanize::builder()
///     .with_clock(FixedClock::new(now))
///     .build()
///     .unwrap();
///
/// assert_eq!(humanize.size(2_750_000_000), "2.75 GB");
/// assert_eq!(humanize.ordinal(22), "22nd");
/// assert_eq!(humanize.natural_time(&Utc.with_ymd_and_hms(2021, 7, 10, 11, 0, 0).unwrap()), "An hour ago");
/// ```
#[derive(Clone)]
pub struct Humanize {
    config: Config,
    clock: Arc<dyn Clock>,
}

impl Humanize {
    /// Default configuration and the system clock.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Creates a builder for a customised instance.
    pub fn builder() -> HumanizeBuilder {
        HumanizeBuilder::new()
    }

    /// The configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The reference instant used by every relative phrase.
    pub fn now_instant(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn size(&self, bytes: u64) -> String {
        size::natural_size(bytes, self.config.size.units)
    }

    pub fn size_signed(&self, bytes: i64) -> Result<String> {
        size::natural_size_signed(bytes, self.config.size.units)
    }

    pub fn ordinal(&self, value: i64) -> String {
        number::ordinal(value)
    }

    pub fn grouped(&self, value: f64) -> Result<String> {
        number::grouped(value)
    }

    pub fn word<T: Into<i128>>(&self, value: T) -> Result<String> {
        number::word(value)
    }

    pub fn word_f64(&self, value: f64) -> Result<String> {
        number::word_f64(value)
    }

    pub fn spelled_digit(&self, value: i64) -> String {
        number::spelled_digit(value)
    }

    /// Mixed fraction using the configured precision.
    pub fn fraction(&self, value: f64) -> Result<String> {
        number::as_fraction_with_precision(value, self.config.number.fraction_precision)
    }

    pub fn scientific(&self, value: f64) -> Result<String> {
        number::scientific(value)
    }

    pub fn clamp(&self, value: f64, floor: Option<f64>, ceil: Option<f64>) -> Result<String> {
        number::clamp(value, floor, ceil)
    }

    /// "Today", "Yesterday", "Tomorrow" or the configured day format.
    pub fn natural_day<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> Result<String> {
        self.natural_day_with(date, &self.config.time.day_format)
    }

    /// [`Humanize::natural_day`] with an explicit fallback pattern.
    pub fn natural_day_with<Tz: TimeZone>(&self, date: &DateTime<Tz>, format: &str) -> Result<String> {
        time::natural_day(&date.with_timezone(&Local), &self.clock.now(), format)
    }

    pub fn natural_date<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> Result<String> {
        self.natural_date_with(date, &self.config.time.date_format)
    }

    /// [`Humanize::natural_date`] with an explicit with-year pattern.
    pub fn natural_date_with<Tz: TimeZone>(&self, date: &DateTime<Tz>, date_format: &str) -> Result<String> {
        let settings = &self.config.time;
        time::natural_date_with(
            &date.with_timezone(&Local),
            &self.clock.now(),
            &settings.day_format,
            date_format,
            settings.year_threshold_months,
        )
    }

    pub fn natural_time<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
        self.natural_time_with(date, self.config.time.natural_time)
    }

    pub fn natural_time_with<Tz: TimeZone>(&self, date: &DateTime<Tz>, mode: time::TimeMode) -> String {
        time::natural_time_with(&date.with_timezone(&Local), &self.clock.now(), mode)
    }

    /// The current instant in the configured timestamp format.
    pub fn now(&self) -> Result<String> {
        self.now_with(&self.config.time.timestamp_format)
    }

    pub fn now_with(&self, format: &str) -> Result<String> {
        time::format_date(&self.clock.now(), format)
    }

    /// A date in the configured with-year format.
    pub fn date<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> Result<String> {
        self.date_with(date, &self.config.time.date_format)
    }

    pub fn date_with<Tz: TimeZone>(&self, date: &DateTime<Tz>, format: &str) -> Result<String> {
        time::format_date(&date.with_timezone(&Local), format)
    }

    /// Coarse phrase for an ISO 8601 timestamp ("2 days ago").
    pub fn relative_time(&self, timestamp: &str) -> Result<String> {
        time::relative_time(timestamp, &self.clock.now())
    }

    /// Adds a calendar delta to a date.
    pub fn shift<Tz: TimeZone>(&self, date: &DateTime<Tz>, delta: &CalendarDelta) -> Result<DateTime<Tz>> {
        time::add_delta(date, delta)
    }

    /// Subtracts a calendar delta from a date.
    pub fn unshift<Tz: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        delta: &CalendarDelta,
    ) -> Result<DateTime<Tz>> {
        time::subtract_delta(date, delta)
    }
}

impl Default for Humanize {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Humanize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Humanize")
            .field("config", &self.config)
            .field("now", &self.clock.now())
            .finish()
    }
}

/// Builder for [`Humanize`].
#[derive(Default)]
pub struct HumanizeBuilder {
    config: Option<Config>,
    config_file: Option<PathBuf>,
    clock: Option<Arc<dyn Clock>>,
    unit_system: Option<UnitSystem>,
}

impl HumanizeBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration directly.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration from a file when building. Takes precedence over
    /// [`HumanizeBuilder::with_config`].
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Use `clock` as the source of "now".
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Override the configured unit system.
    pub fn with_unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = Some(unit_system);
        self
    }

    /// Build the `Humanize` instance.
    ///
    /// Fails if the configuration file cannot be loaded or the configuration
    /// is invalid.
    pub fn build(self) -> Result<Humanize> {
        let mut config = match self.config_file {
            Some(path) => Config::load(Some(&path))?,
            None => self.config.unwrap_or_default(),
        };
        if let Some(unit_system) = self.unit_system {
            config.size.units = unit_system;
        }
        config.validate()?;

        Ok(Humanize {
            config,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        })
    }
}
