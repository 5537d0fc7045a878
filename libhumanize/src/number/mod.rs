//! Number humanization.
//!
//! Ordinals, digit grouping, large-number words, spelled-out digits,
//! fractions, scientific notation and floor/ceiling clamping. All output uses
//! fixed English conventions: comma grouping, period decimal separator.

use crate::error::{HumanizeError, Result};
use log::trace;

pub mod fraction;

pub use fraction::{DEFAULT_PRECISION, Fraction, as_fraction, as_fraction_with_precision};


const ORDINAL_SUFFIXES: [&str; 10] = ["th", "st", "nd", "rd", "th", "th", "th", "th", "th", "th"];

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Magnitude buckets for [`word`], smallest first.
const WORD_LADDER: [(f64, &str); 11] = [
    (1e3, "thousand"),
    (1e6, "million"),
    (1e9, "billion"),
    (1e12, "trillion"),
    (1e15, "quadrillion"),
    (1e18, "quintillion"),
    (1e21, "sextillion"),
    (1e24, "septillion"),
    (1e27, "octillion"),
    (1e30, "nonillion"),
    (1e33, "decillion"),
];

/// Exclusive upper bound of the word ladder.
const GOOGOL: f64 = 1e100;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Appends the English ordinal suffix to an integer.
///
/// # Examples
///
/// ```
/// use libhumanize::number::ordinal;
///
/// assert_eq!(ordinal(1), "1st");
/// assert_eq!(ordinal(385), "385th");
/// assert_eq!(ordinal(112), "112th");
/// assert_eq!(ordinal(-23), "-23rd");
/// ```
pub fn ordinal(value: i64) -> String {
    let magnitude = value.unsigned_abs();
    let suffix = if matches!(magnitude % 100, 11..=13) {
        ORDINAL_SUFFIXES[0]
    } else {
        ORDINAL_SUFFIXES[(magnitude % 10) as usize]
    };
    format!("{}{}", value, suffix)
}

/// Renders a number with a comma between every three integer digits.
///
/// The fractional part is kept as the shortest decimal that reads back to the
/// same value, without grouping.
///
/// # Examples
///
/// ```
/// use libhumanize::number::grouped;
///
/// assert_eq!(grouped(1000.0).unwrap(), "1,000");
/// assert_eq!(grouped(2858493.49).unwrap(), "2,858,493.49");
/// assert_eq!(grouped(-1234.5).unwrap(), "-1,234.5");
/// ```
pub fn grouped(value: f64) -> Result<String> {
    ensure_finite(value)?;

    let text = format!("{}", value.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut output = String::with_capacity(text.len() + text.len() / 3 + 1);
    if value < 0.0 {
        output.push('-');
    }
    output.push_str(&group_digits(integer));
    if let Some(fraction) = fraction {
        output.push('.');
        output.push_str(fraction);
    }
    Ok(output)
}

/// Integer counterpart of [`grouped`], exact for the whole `i128` range.
///
/// # Examples
///
/// ```
/// use libhumanize::number::grouped_integer;
///
/// assert_eq!(grouped_integer(1234567), "1,234,567");
/// assert_eq!(grouped_integer(-999), "-999");
/// ```
pub fn grouped_integer<T: Into<i128>>(value: T) -> String {
    let value = value.into();
    let digits = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::with_capacity(chars.len() + (chars.len() - 1) / 3);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Scales a large integer into a short mantissa and a magnitude word.
///
/// Values below one thousand are returned as plain integer text. Accepts any
/// integer type that widens into `i128`.
///
/// # Examples
///
/// ```
/// use libhumanize::number::word;
///
/// assert_eq!(word(1000).unwrap(), "1 thousand");
/// assert_eq!(word(3456782984_i64).unwrap(), "3.46 billion");
/// assert_eq!(word(1_500_000).unwrap(), "1.5 million");
/// assert_eq!(word(512).unwrap(), "512");
/// ```
pub fn word<T: Into<i128>>(value: T) -> Result<String> {
    let value = value.into();
    let magnitude = value.unsigned_abs();
    if magnitude < 1000 {
        return Ok(value.to_string());
    }
    scale_to_word(magnitude as f64, value < 0)
}

/// Floating-point counterpart of [`word`], which can reach the end of the
/// ladder.
///
/// # Examples
///
/// ```
/// use libhumanize::number::word_f64;
///
/// assert_eq!(word_f64(2.5e34).unwrap(), "25 decillion");
/// assert!(word_f64(1e100).is_err());
/// ```
pub fn word_f64(value: f64) -> Result<String> {
    ensure_finite(value)?;
    if value.abs() < 1000.0 {
        // -0.0 + 0.0 is +0.0
        return Ok(format!("{}", value + 0.0));
    }
    scale_to_word(value.abs(), value < 0.0)
}

fn scale_to_word(magnitude: f64, negative: bool) -> Result<String> {
    if magnitude >= GOOGOL {
        return Err(HumanizeError::unrepresentable(format!(
            "{:e} is a googol or more",
            magnitude
        )));
    }

    let mut rung = WORD_LADDER
        .iter()
        .rposition(|(threshold, _)| magnitude >= *threshold)
        .unwrap_or(0);
    let mut mantissa = format!("{:.2}", magnitude / WORD_LADDER[rung].0);

    // 999.995 thousand rounds up to "1000.00": report it as 1 million instead.
    if rung + 1 < WORD_LADDER.len() && mantissa.parse::<f64>().is_ok_and(|m| m >= 1000.0) {
        trace!("mantissa {} overflowed {}, moving up", mantissa, WORD_LADDER[rung].1);
        rung += 1;
        mantissa = format!("{:.2}", magnitude / WORD_LADDER[rung].0);
    }

    let sign = if negative { "-" } else { "" };
    Ok(format!(
        "{}{} {}",
        sign,
        trim_fraction_zeros(&mantissa),
        WORD_LADDER[rung].1
    ))
}

/// Spells out single digits, leaving every other integer as a numeral.
///
/// # Examples
///
/// ```
/// use libhumanize::number::spelled_digit;
///
/// assert_eq!(spelled_digit(7), "seven");
/// assert_eq!(spelled_digit(10), "10");
/// assert_eq!(spelled_digit(-3), "-3");
/// ```
pub fn spelled_digit(value: i64) -> String {
    match usize::try_from(value) {
        Ok(index) if index < DIGIT_WORDS.len() => DIGIT_WORDS[index].to_string(),
        _ => value.to_string(),
    }
}

/// Renders a number in scientific notation with a superscript exponent.
///
/// # Examples
///
/// ```
/// use libhumanize::number::scientific;
///
/// assert_eq!(scientific(0.000000385384).unwrap(), "3.85 × 10⁻⁷");
/// assert_eq!(scientific(-1500.0).unwrap(), "-1.5 × 10³");
/// ```
pub fn scientific(value: f64) -> Result<String> {
    ensure_finite(value)?;

    let text = format!("{:.2e}", value.abs());
    let (mantissa, exponent) = text.split_once('e').ok_or_else(|| {
        HumanizeError::invalid_input(format!("cannot split '{}' into mantissa and exponent", text))
    })?;

    let mut superscript = String::with_capacity(exponent.len() * 3);
    for c in exponent.chars() {
        match c {
            '-' => superscript.push('⁻'),
            '+' => superscript.push('⁺'),
            digit => {
                let index = digit.to_digit(10).ok_or_else(|| {
                    HumanizeError::invalid_input(format!("unexpected exponent '{}'", exponent))
                })?;
                superscript.push(SUPERSCRIPT_DIGITS[index as usize]);
            }
        }
    }

    let sign = if value < 0.0 { "-" } else { "" };
    Ok(format!(
        "{}{} × 10{}",
        sign,
        trim_fraction_zeros(mantissa),
        superscript
    ))
}

/// Bounds a value for display, marking clipped values with `<` or `>`.
///
/// The floor is checked before the ceiling. At least one bound is required.
///
/// # Examples
///
/// ```
/// use libhumanize::number::clamp;
///
/// assert_eq!(clamp(123.456, None, Some(120.0)).unwrap(), ">120.0");
/// assert_eq!(clamp(5.0, Some(10.0), None).unwrap(), "<10.0");
/// assert_eq!(clamp(50.0, Some(10.0), Some(100.0)).unwrap(), "50.0");
/// ```
pub fn clamp(value: f64, floor: Option<f64>, ceil: Option<f64>) -> Result<String> {
    if value.is_nan() || floor.is_some_and(f64::is_nan) || ceil.is_some_and(f64::is_nan) {
        return Err(HumanizeError::invalid_input("cannot clamp NaN"));
    }

    match (floor, ceil) {
        (None, None) => {
            return Err(HumanizeError::ambiguous_fallback(
                "clamp needs a floor, a ceiling or both",
            ));
        }
        (Some(floor), Some(ceil)) if floor > ceil => {
            return Err(HumanizeError::invalid_input(format!(
                "floor {} is above ceiling {}",
                plain_number(floor),
                plain_number(ceil)
            )));
        }
        _ => {}
    }

    match (floor, ceil) {
        (Some(floor), _) if value < floor => Ok(format!("<{}", plain_number(floor))),
        (_, Some(ceil)) if value > ceil => Ok(format!(">{}", plain_number(ceil))),
        _ => Ok(plain_number(value)),
    }
}

/// Renders a float the way a plain interpolation would: always with a
/// fractional part ("120.0", "123.456").
pub fn plain_number(value: f64) -> String {
    format!("{:?}", value)
}

fn trim_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

pub(crate) fn ensure_finite(value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HumanizeError::invalid_input(format!(
            "{} is not a finite number",
            value
        )))
    }
}
