use super::*;

#[test]
fn test_approximate_known_values() {
    let cases = [
        (0.5, (1, 2)),
        (0.25, (1, 4)),
        (0.3, (3, 10)),
        (0.75, (3, 4)),
        (0.125, (1, 8)),
        (0.142857, (1, 7)),
        (0.4456, (41, 92)),
    ];
    for (value, (numerator, denominator)) in cases {
        let fraction = Fraction::approximate(value, DEFAULT_PRECISION).unwrap();
        assert_eq!(
            (fraction.numerator(), fraction.denominator()),
            (numerator, denominator),
            "approximating {}",
            value
        );
    }
}

#[test]
fn test_approximation_within_tolerance() {
    for value in [0.4456, 0.1234, 0.987, 0.0101, 0.6180339] {
        let fraction = Fraction::approximate(value, DEFAULT_PRECISION).unwrap();
        assert!(fraction.denominator() >= 1);
        assert!(
            (fraction.to_f64() - value).abs() <= DEFAULT_PRECISION,
            "{} is too far from {}",
            fraction,
            value
        );
    }
}

#[test]
fn test_tighter_precision_gives_larger_denominator() {
    let coarse = Fraction::approximate(std::f64::consts::PI, 1.0e-2).unwrap();
    let fine = Fraction::approximate(std::f64::consts::PI, 1.0e-6).unwrap();
    assert!(fine.denominator() > coarse.denominator());
}

#[test]
fn test_approximate_rejects_bad_precision() {
    assert!(Fraction::approximate(0.5, 0.0).is_err());
    assert!(Fraction::approximate(0.5, -1.0).is_err());
    assert!(Fraction::approximate(0.5, f64::NAN).is_err());
}

#[test]
fn test_approximate_rejects_non_finite() {
    assert!(matches!(
        Fraction::approximate(f64::INFINITY, DEFAULT_PRECISION),
        Err(HumanizeError::InvalidInput { .. })
    ));
}

#[test]
fn test_new_rejects_zero_denominator() {
    assert!(Fraction::new(1, 0).is_err());
    assert_eq!(Fraction::new(3, 4).unwrap().to_string(), "3/4");
}

#[test]
fn test_as_fraction_bare() {
    assert_eq!(as_fraction(0.4456).unwrap(), "41/92");
    assert_eq!(as_fraction(0.3).unwrap(), "3/10");
}

#[test]
fn test_as_fraction_mixed() {
    assert_eq!(as_fraction(2.5).unwrap(), "2 1/2");
    assert_eq!(as_fraction(1.75).unwrap(), "1 3/4");
}

#[test]
fn test_as_fraction_whole_numbers_use_decimal() {
    assert_eq!(as_fraction(3.0).unwrap(), "3.0");
    assert_eq!(as_fraction(0.0).unwrap(), "0.0");
    assert_eq!(as_fraction(4.9999).unwrap(), "5.0");
}

#[test]
fn test_as_fraction_negative() {
    assert_eq!(as_fraction(-2.5).unwrap(), "-2 1/2");
    assert_eq!(as_fraction(-0.25).unwrap(), "-1/4");
    assert_eq!(as_fraction(-4.0).unwrap(), "-4.0");
}

#[test]
fn test_as_fraction_with_precision() {
    assert_eq!(as_fraction_with_precision(0.33, 0.05).unwrap(), "1/3");
    assert!(as_fraction_with_precision(0.33, 0.0).is_err());
}
