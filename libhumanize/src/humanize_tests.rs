use super::*;
use crate::clock::FixedClock;
use crate::error::HumanizeError;
use crate::time::TimeMode;
use chrono::Utc;
use std::io::Write;

fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn fixed() -> Humanize {
    Humanize::builder()
        .with_clock(FixedClock::new(local(2021, 7, 10, 12, 0, 0)))
        .build()
        .unwrap()
}

#[test]
fn test_new_uses_defaults() {
    let humanize = Humanize::new();
    assert_eq!(humanize.config(), &Config::default());
}

#[test]
fn test_fixed_clock_is_deterministic() {
    let humanize = fixed();
    assert_eq!(humanize.now_instant(), local(2021, 7, 10, 12, 0, 0));
    assert_eq!(humanize.now().unwrap(), "10 Jul, 2021 12:00:00");
    assert_eq!(humanize.now().unwrap(), humanize.now().unwrap());
    assert_eq!(humanize.now_with("%Y-%m-%d").unwrap(), "2021-07-10");
}

#[test]
fn test_number_methods() {
    let humanize = fixed();

    assert_eq!(humanize.ordinal(111), "111th");
    assert_eq!(humanize.grouped(1234567.0).unwrap(), "1,234,567");
    assert_eq!(humanize.word(3_456_782_984_i64).unwrap(), "3.46 billion");
    assert_eq!(humanize.word_f64(1.5e6).unwrap(), "1.5 million");
    assert_eq!(humanize.spelled_digit(4), "four");
    assert_eq!(humanize.fraction(2.5).unwrap(), "2 1/2");
    assert_eq!(humanize.scientific(1500.0).unwrap(), "1.5 × 10³");
    assert_eq!(humanize.clamp(0.5, Some(1.0), None).unwrap(), "<1.0");
}

#[test]
fn test_fraction_uses_configured_precision() {
    let mut config = Config::default();
    config.number.fraction_precision = 0.01;
    let coarse = Humanize::builder().with_config(config).build().unwrap();

    assert_eq!(fixed().fraction(std::f64::consts::PI).unwrap(), "3 15/106");
    assert_eq!(coarse.fraction(std::f64::consts::PI).unwrap(), "3 1/7");
}

#[test]
fn test_size_follows_unit_system() {
    assert_eq!(fixed().size(1_048_576), "1.05 MB");

    let binary = Humanize::builder()
        .with_unit_system(UnitSystem::Binary)
        .build()
        .unwrap();
    assert_eq!(binary.size(1_048_576), "1.00 MiB");
    assert!(binary.size_signed(-1).is_err());
}

#[test]
fn test_natural_day_and_date() {
    let humanize = fixed();

    assert_eq!(humanize.natural_day(&local(2021, 7, 9, 20, 0, 0)).unwrap(), "Yesterday");
    assert_eq!(humanize.natural_day(&local(2021, 7, 10, 1, 0, 0)).unwrap(), "Today");
    assert_eq!(humanize.natural_day(&local(2021, 7, 11, 23, 0, 0)).unwrap(), "Tomorrow");
    assert_eq!(humanize.natural_day(&local(2021, 7, 25, 8, 0, 0)).unwrap(), "25 Jul");
    assert_eq!(
        humanize.natural_day_with(&local(2021, 7, 25, 8, 0, 0), "%A").unwrap(),
        "Sunday"
    );

    assert_eq!(humanize.natural_date(&local(2021, 10, 2, 8, 0, 0)).unwrap(), "02 Oct");
    assert_eq!(humanize.natural_date(&local(2022, 1, 2, 8, 0, 0)).unwrap(), "02 Jan, 2022");
    assert_eq!(
        humanize.natural_date_with(&local(2022, 1, 2, 8, 0, 0), "%Y-%m-%d").unwrap(),
        "2022-01-02"
    );
    assert_eq!(
        humanize.natural_date_with(&local(2021, 7, 11, 8, 0, 0), "%Y-%m-%d").unwrap(),
        "Tomorrow"
    );
}

#[test]
fn test_natural_time_modes() {
    let humanize = fixed();
    let date = local(2021, 7, 10, 9, 0, 0);

    assert_eq!(humanize.natural_time(&date), "3 hours ago");
    assert_eq!(
        humanize.natural_time_with(&local(2021, 7, 10, 12, 0, 30), TimeMode::Components),
        "30 seconds from now"
    );

    let mut config = Config::default();
    config.time.natural_time = TimeMode::Components;
    let legacy = Humanize::builder()
        .with_config(config)
        .with_clock(FixedClock::new(local(2021, 7, 10, 12, 0, 0)))
        .build()
        .unwrap();
    assert_eq!(legacy.natural_time(&local(2021, 7, 9, 12, 0, 20)), "20 seconds from now");
}

#[test]
fn test_date_rendering() {
    let humanize = fixed();
    let date = local(2021, 7, 9, 4, 32, 27);

    assert_eq!(humanize.date(&date).unwrap(), "09 Jul, 2021");
    assert_eq!(humanize.date_with(&date, "%H:%M").unwrap(), "04:32");
    assert!(humanize.date_with(&date, "%Q").is_err());
}

#[test]
fn test_relative_time() {
    let humanize = Humanize::builder()
        .with_clock(FixedClock::new(Utc.with_ymd_and_hms(2021, 7, 11, 4, 32, 27).unwrap()))
        .build()
        .unwrap();

    assert_eq!(humanize.relative_time("2021-07-09T04:32:27Z").unwrap(), "2 days ago");
    assert!(matches!(
        humanize.relative_time("not a date"),
        Err(HumanizeError::InvalidInput { .. })
    ));
}

#[test]
fn test_shift_and_unshift() {
    let humanize = fixed();
    let start = Utc.with_ymd_and_hms(2023, 1, 31, 0, 0, 0).unwrap();
    let delta = CalendarDelta::new().months(1);

    let shifted = humanize.shift(&start, &delta).unwrap();
    assert_eq!(shifted, Utc.with_ymd_and_hms(2023, 3, 3, 0, 0, 0).unwrap());
    assert_eq!(
        humanize.unshift(&shifted, &delta).unwrap(),
        Utc.with_ymd_and_hms(2023, 2, 3, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_builder_config_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "size:\n  units: memory\ntime:\n  date_format: \"%Y\"").unwrap();

    let humanize = Humanize::builder()
        .with_config_file(file.path())
        .with_clock(FixedClock::new(local(2021, 7, 10, 12, 0, 0)))
        .build()
        .unwrap();

    assert_eq!(humanize.config().size.units, UnitSystem::Memory);
    assert_eq!(humanize.date(&local(2020, 1, 1, 12, 0, 0)).unwrap(), "2020");
}

#[test]
fn test_builder_rejects_invalid_config() {
    let mut config = Config::default();
    config.time.day_format = "%Q".to_string();
    assert!(Humanize::builder().with_config(config).build().is_err());

    let missing = Humanize::builder().with_config_file("/nonexistent/humanize.yaml").build();
    assert!(matches!(missing, Err(HumanizeError::Config { .. })));
}

#[test]
fn test_humanize_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Humanize>();
}
