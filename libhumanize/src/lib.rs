//! Humanize - human-readable formatting for numbers, sizes and dates
//!
//! Turns raw values into the short phrases people actually read: byte
//! sizes, ordinals, grouped digits, large-number words, fractions,
//! scientific notation and natural day/time phrases relative to "now".
//!
//! # Quick Start
//!
//! ```
//! use libhumanize::Humanize;
//!
//! let humanize = Humanize::new();
//! assert_eq!(humanize.size(3_000_000), "3.00 MB");
//! assert_eq!(humanize.ordinal(3), "3rd");
//! assert_eq!(humanize.word(1_200_000_000_i64).unwrap(), "1.2 billion");
//! assert_eq!(humanize.fraction(0.3).unwrap(), "3/10");
//! ```
//!
//! # Main Types
//!
//! - [`Humanize`] - configured, clock-backed entry point
//! - [`HumanizeBuilder`] - builder for custom configuration and clocks
//! - [`Config`] - formatting defaults, loadable from YAML or TOML
//! - [`CalendarDelta`] - calendar-aware date offsets
//! - [`HumanizeError`] - error type shared by every fallible operation
//!
//! # Architecture
//!
//! Every formatter is also available as a free function taking its
//! parameters explicitly, including the reference instant:
//!
//! - [`size`] - byte counts
//! - [`number`] - ordinals, grouping, words, fractions, scientific, clamp
//! - [`time`] - date arithmetic and natural day/time phrases
//! - [`clock`] - injectable sources of "now"

#![warn(clippy::all)]

/// Returns the libhumanize crate version.
///
/// # Examples
///
/// ```
/// let version = libhumanize::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// High-level public API
mod humanize;
pub use humanize::{Humanize, HumanizeBuilder};

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{HumanizeError, Result};
pub use number::Fraction;
pub use size::UnitSystem;
pub use time::{CalendarDelta, TimeMode};

pub mod clock;
pub mod config;
pub mod error;
pub mod number;
pub mod size;
pub mod time;
