use chrono::{TimeZone, Utc};
use chrono_tz::America::Chicago;
use chrono_tz::Asia::Tokyo;

use solar_orienter::clock::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Day of year ──

fn day_of(year: i32, month: u32, day: u32) -> i32 {
    observation_time(&Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()).day_of_year
}

#[test]
fn test_day_of_year_known_dates() {
    assert_eq!(day_of(2026, 1, 1), 1);
    assert_eq!(day_of(2026, 3, 21), 80);
    assert_eq!(day_of(2026, 6, 21), 172);
    assert_eq!(day_of(2026, 12, 31), 365);
}

#[test]
fn test_day_of_year_leap_year() {
    assert_eq!(day_of(2024, 2, 29), 60);
    assert_eq!(day_of(2024, 3, 1), 61);
    assert_eq!(day_of(2024, 12, 31), 366);
}

#[test]
fn test_day_of_year_century_leap_rules() {
    assert_eq!(day_of(2000, 2, 29), 60);
    assert_eq!(day_of(1900, 3, 1), 60);
    assert_eq!(day_of(2100, 12, 31), 365);
}

#[test]
fn test_first_day_of_each_month_non_leap() {
    let expected = [1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];
    for (i, &exp) in expected.iter().enumerate() {
        let month = i as u32 + 1;
        assert_eq!(day_of(2026, month, 1), exp, "Month {}", month);
    }
}

// ── ObservationTime from a zoned clock ──

#[test]
fn test_observation_time_uses_local_wall_clock() {
    let dt = Chicago.with_ymd_and_hms(2026, 6, 21, 13, 30, 36).unwrap();
    let t = observation_time(&dt);
    assert_eq!(t.day_of_year, 172);
    assert_approx!(t.local_hour, 13.51, 1e-12);
}

#[test]
fn test_observation_time_crosses_date_line_in_target_zone() {
    let utc = Utc.with_ymd_and_hms(2026, 12, 31, 20, 0, 0).unwrap();
    assert_eq!(observation_time(&utc).day_of_year, 365);

    let tokyo = observation_time(&utc.with_timezone(&Tokyo));
    assert_eq!(tokyo.day_of_year, 1);
    assert_approx!(tokyo.local_hour, 5.0, 1e-12);
}

#[test]
fn test_observation_time_midnight_is_zero() {
    let dt = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
    let t = observation_time(&dt);
    assert_eq!(t.day_of_year, 366);
    assert_eq!(t.local_hour, 0.0);
}
