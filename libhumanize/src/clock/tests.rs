use super::*;
use chrono::{FixedOffset, Utc};
use std::sync::Arc;

#[test]
fn test_fixed_clock_is_stable() {
    let instant = Utc.with_ymd_and_hms(2021, 7, 10, 12, 0, 0).unwrap();
    let clock = FixedClock::new(instant);

    assert_eq!(clock.now(), instant);
    assert_eq!(clock.now(), clock.now());
}

#[test]
fn test_fixed_clock_keeps_the_instant_across_zones() {
    let offset = FixedOffset::west_opt(7 * 3600).unwrap();
    let instant = offset.with_ymd_and_hms(2021, 7, 10, 5, 0, 0).unwrap();
    let clock = FixedClock::new(instant);

    assert_eq!(clock.now().timestamp(), instant.timestamp());
}

#[test]
fn test_system_clock_moves_forward() {
    let clock = SystemClock;
    let first = clock.now();
    let second = clock.now();
    assert!(second >= first);
}

#[test]
fn test_clock_is_object_safe() {
    let clocks: Vec<Arc<dyn Clock>> = vec![
        Arc::new(SystemClock),
        Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap())),
    ];
    assert_eq!(clocks.len(), 2);
}
