//! Human-readable byte sizes.
//!
//! Byte counts are scaled to the largest unit that keeps the value below the
//! next magnitude and printed with two decimal places ("2.75 GB").

use crate::error::{HumanizeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;


const DECIMAL_UNITS: [&str; 8] = ["KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BINARY_UNITS: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Unit convention used when scaling byte counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// 1 KB = 1000 bytes
    #[default]
    Decimal,
    /// 1 KiB = 1024 bytes
    Binary,
    /// Same as [`UnitSystem::Binary`]
    Memory,
}

impl UnitSystem {
    /// Divisor between two consecutive units.
    pub fn base(self) -> u64 {
        match self {
            UnitSystem::Decimal => 1000,
            UnitSystem::Binary | UnitSystem::Memory => 1024,
        }
    }

    /// Unit labels from kilo upwards.
    pub fn units(self) -> &'static [&'static str] {
        match self {
            UnitSystem::Decimal => &DECIMAL_UNITS,
            UnitSystem::Binary | UnitSystem::Memory => &BINARY_UNITS,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitSystem::Decimal => "decimal",
            UnitSystem::Binary => "binary",
            UnitSystem::Memory => "memory",
        };
        f.write_str(name)
    }
}

impl FromStr for UnitSystem {
    type Err = HumanizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "decimal" | "si" => Ok(UnitSystem::Decimal),
            "binary" | "iec" => Ok(UnitSystem::Binary),
            "memory" => Ok(UnitSystem::Memory),
            other => Err(HumanizeError::invalid_input(format!(
                "unknown unit system '{}', expected decimal, binary or memory",
                other
            ))),
        }
    }
}

/// Formats a byte count into a human-readable string.
///
/// # Examples
///
/// ```
/// use libhumanize::size::{natural_size, UnitSystem};
///
/// assert_eq!(natural_size(2747829994, UnitSystem::Decimal), "2.75 GB");
/// assert_eq!(natural_size(2747829994, UnitSystem::Binary), "2.56 GiB");
/// assert_eq!(natural_size(1, UnitSystem::Decimal), "1 byte");
/// assert_eq!(natural_size(0, UnitSystem::Decimal), "0 bytes");
/// ```
pub fn natural_size(bytes: u64, system: UnitSystem) -> String {
    let base = system.base();

    if bytes == 1 {
        return "1 byte".to_string();
    }
    if bytes < base {
        return format!("{} bytes", bytes);
    }

    let units = system.units();
    let bytes = bytes as f64;
    let base = base as f64;
    let last = units.len() - 1;

    // Past the last unit the value keeps growing instead of switching labels.
    let index = (0..last)
        .find(|&i| bytes < base.powi(i as i32 + 2))
        .unwrap_or(last);

    format!("{:.2} {}", bytes / base.powi(index as i32 + 1), units[index])
}

/// Formats a signed byte count, rejecting negative values.
///
/// # Examples
///
/// ```
/// use libhumanize::size::{natural_size_signed, UnitSystem};
///
/// assert_eq!(natural_size_signed(2204, UnitSystem::Decimal).unwrap(), "2.20 KB");
/// assert!(natural_size_signed(-1, UnitSystem::Decimal).is_err());
/// ```
pub fn natural_size_signed(bytes: i64, system: UnitSystem) -> Result<String> {
    let bytes = u64::try_from(bytes).map_err(|_| {
        HumanizeError::invalid_input(format!("byte count must not be negative, got {}", bytes))
    })?;
    Ok(natural_size(bytes, system))
}
