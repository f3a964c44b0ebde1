use chrono::{NaiveDate, NaiveDateTime};
use tzbot::timezone::project::project;

fn dt(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hh, mm, ss)
        .unwrap()
}

#[test]
fn test_positive_delta() {
    // UTC-5 sender to UTC-4 target: one hour later.
    let projected = project(dt(2021, 6, 9, 15, 0, 0), -18000, -14400);
    assert_eq!(projected, dt(2021, 6, 9, 16, 0, 0));
}

#[test]
fn test_zero_delta_is_identity() {
    let instant = dt(2021, 6, 9, 23, 15, 0);
    assert_eq!(project(instant, -14400, -14400), instant);
}

#[test]
fn test_fractional_hour_offset() {
    // UTC-4 sender to UTC+5:30 target.
    let projected = project(dt(2021, 6, 9, 12, 0, 0), -14400, 19800);
    assert_eq!(projected, dt(2021, 6, 9, 21, 30, 0));
}

#[test]
fn test_day_rollover() {
    let projected = project(dt(2021, 6, 9, 23, 30, 0), 0, 3600);
    assert_eq!(projected, dt(2021, 6, 10, 0, 30, 0));

    let back = project(dt(2021, 6, 9, 0, 30, 0), 0, -3600);
    assert_eq!(back, dt(2021, 6, 8, 23, 30, 0));
}

#[test]
fn test_year_rollover() {
    let projected = project(dt(2020, 12, 31, 23, 0, 0), 0, 7200);
    assert_eq!(projected, dt(2021, 1, 1, 1, 0, 0));
}

#[test]
fn test_round_trip_recovers_the_instant_exactly() {
    // Projecting A -> B, then B -> A with the offsets swapped, must be
    // lossless for any offset pair.
    let instant = dt(2021, 6, 9, 15, 42, 7);
    for (a, b) in [(-18000, -14400), (-25200, 19800), (0, 45900), (-16200, 0)] {
        let there = project(instant, a, b);
        let back = project(there, b, a);
        assert_eq!(back, instant, "round trip failed for offsets {a}/{b}");
    }
}
