//! Continued-fraction approximation of real numbers.

use super::ensure_finite;
use crate::error::{HumanizeError, Result};
use std::fmt;

#[cfg(test)]
#[path = "fraction_tests.rs"]
mod tests;

/// Default tolerance used by [`as_fraction`].
pub const DEFAULT_PRECISION: f64 = 1.0e-3;

/// Upper bound on continued-fraction terms; the tolerance is met long before.
const MAX_TERMS: usize = 64;

/// A rational number with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Creates a fraction, rejecting denominators below one.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator < 1 {
            return Err(HumanizeError::invalid_input(format!(
                "denominator must be at least 1, got {}",
                denominator
            )));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Finds the convergent with the smallest denominator that lies within
    /// `precision · k²` of `value`, where `k` is that denominator.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhumanize::number::Fraction;
    ///
    /// let third = Fraction::approximate(0.333, 1.0e-3).unwrap();
    /// assert_eq!((third.numerator(), third.denominator()), (1, 3));
    /// ```
    pub fn approximate(value: f64, precision: f64) -> Result<Self> {
        ensure_finite(value)?;
        if !(precision.is_finite() && precision > 0.0) {
            return Err(HumanizeError::invalid_input(format!(
                "precision must be a positive number, got {}",
                precision
            )));
        }
        if value.abs() >= i64::MAX as f64 {
            return Err(HumanizeError::unrepresentable(format!(
                "{} does not fit a 64-bit numerator",
                value
            )));
        }

        let mut x = value;
        let mut a = x.floor();
        let (mut h1, mut k1, mut h, mut k) = (1_i64, 0_i64, a as i64, 1_i64);

        for _ in 0..MAX_TERMS {
            let kf = k as f64;
            if x - a <= precision * kf * kf {
                break;
            }
            x = 1.0 / (x - a);
            a = x.floor();

            let term = a as i64;
            let next_h = term.checked_mul(h).and_then(|v| v.checked_add(h1));
            let next_k = term.checked_mul(k).and_then(|v| v.checked_add(k1));
            match (next_h, next_k) {
                (Some(next_h), Some(next_k)) => {
                    (h1, k1, h, k) = (h, k, next_h, next_k);
                }
                _ => break,
            }
        }

        Ok(Self {
            numerator: h,
            denominator: k,
        })
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Decimal value of the fraction.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Renders a number as a (mixed) fraction using [`DEFAULT_PRECISION`].
///
/// # Examples
///
/// ```
/// use libhumanize::number::as_fraction;
///
/// assert_eq!(as_fraction(0.4456).unwrap(), "41/92");
/// assert_eq!(as_fraction(2.5).unwrap(), "2 1/2");
/// assert_eq!(as_fraction(3.0).unwrap(), "3.0");
/// ```
pub fn as_fraction(value: f64) -> Result<String> {
    as_fraction_with_precision(value, DEFAULT_PRECISION)
}

/// Like [`as_fraction`] with an explicit tolerance.
///
/// The sign is applied to the whole rendering, so `-2.5` reads `-2 1/2`.
pub fn as_fraction_with_precision(value: f64, precision: f64) -> Result<String> {
    ensure_finite(value)?;

    let magnitude = value.abs();
    let whole = magnitude.floor();
    let fraction = Fraction::approximate(magnitude - whole, precision)?;

    if fraction.denominator() == 1 {
        return Ok(format!("{:.1}", value));
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if whole > 0.0 {
        Ok(format!("{}{:.0} {}", sign, whole, fraction))
    } else {
        Ok(format!("{}{}", sign, fraction))
    }
}
