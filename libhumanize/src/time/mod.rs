//! Date and time humanization.
//!
//! - [`delta`]: calendar-aware date arithmetic ([`CalendarDelta`])
//! - [`natural`]: "Today", "Yesterday", "3 minutes ago" style phrases
//! - [`relative`]: plain date rendering and coarse relative time from
//!   ISO-8601 timestamps
//!
//! Every function takes the reference instant ("now") as a parameter so the
//! output is deterministic; use [`crate::Humanize`] for a clock-backed API.

pub mod delta;
pub mod natural;
pub mod relative;

pub use delta::{CalendarDelta, add_delta, subtract_delta};
pub use natural::{
    DEFAULT_YEAR_THRESHOLD_MONTHS, TimeMode, natural_date, natural_date_with, natural_day,
    natural_time, natural_time_with,
};
pub use relative::{
    Accuracy, format_date, parse_format, parse_timestamp, relative_time, relative_to,
};

/// Day-and-month pattern used by [`natural_day`] ("09 Jul").
pub const DAY_FORMAT: &str = "%d %b";

/// Pattern used once a date is far enough away to need its year ("09 Jul, 2021").
pub const DATE_FORMAT: &str = "%d %b, %Y";

/// Full timestamp pattern ("09 Jul, 2021 12:00:00").
pub const TIMESTAMP_FORMAT: &str = "%d %b, %Y %H:%M:%S";
