use chrono::{NaiveDate, NaiveDateTime};
use tzbot::timezone::format::format_in_zone;

/// Tests for the relative-day formatter. The viewer's reference day is
/// Wednesday 2021-06-09 unless a test says otherwise.

fn dt(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hh, mm, ss)
        .unwrap()
}

fn viewer_today() -> NaiveDateTime {
    dt(2021, 6, 9, 14, 30, 0)
}

#[test]
fn test_afternoon_same_day() {
    let formatted = format_in_zone(dt(2021, 6, 9, 16, 0, 0), viewer_today());
    assert_eq!(formatted, "*4:00PM* today");
}

#[test]
fn test_24_hour_suffix_for_late_hours() {
    let formatted = format_in_zone(dt(2021, 6, 9, 23, 15, 0), viewer_today());
    assert_eq!(formatted, "*11:15PM* (23:15) today");
}

#[test]
fn test_morning_gets_lowercase_meridiem_and_sunrise() {
    let formatted = format_in_zone(dt(2021, 6, 10, 9, 0, 0), viewer_today());
    assert_eq!(formatted, "*9:00am* :sunrise: tomorrow");
}

#[test]
fn test_midnight_has_suffix_then_sunrise() {
    // The 24-hour suffix always comes before the sunrise marker.
    let formatted = format_in_zone(dt(2021, 6, 9, 0, 15, 0), viewer_today());
    assert_eq!(formatted, "*12:15am* (00:15) :sunrise: today");
}

#[test]
fn test_noon_is_plain_pm() {
    // Hour 12 already displays as 12: no suffix, no sunrise.
    let formatted = format_in_zone(dt(2021, 6, 9, 12, 0, 0), viewer_today());
    assert_eq!(formatted, "*12:00PM* today");
}

#[test]
fn test_one_pm_earns_the_suffix() {
    let formatted = format_in_zone(dt(2021, 6, 9, 13, 5, 0), viewer_today());
    assert_eq!(formatted, "*1:05PM* (13:05) today");
}

#[test]
fn test_suffix_iff_hour_is_zero_or_past_twelve() {
    for hour in 0..24 {
        let formatted = format_in_zone(dt(2021, 6, 9, hour, 0, 0), viewer_today());
        let has_suffix = formatted.contains('(');
        assert_eq!(
            has_suffix,
            hour == 0 || hour >= 13,
            "suffix rule violated at hour {hour}: {formatted}"
        );
    }
}

#[test]
fn test_sunrise_iff_morning() {
    for hour in 0..24 {
        let formatted = format_in_zone(dt(2021, 6, 9, hour, 0, 0), viewer_today());
        assert_eq!(
            formatted.contains(":sunrise:"),
            hour < 12,
            "sunrise rule violated at hour {hour}: {formatted}"
        );
    }
}

#[test]
fn test_day_label_boundaries_are_exact() {
    // Exactly at the viewer's midnight is today.
    assert!(format_in_zone(dt(2021, 6, 9, 0, 0, 0), viewer_today()).ends_with("today"));
    // One second before is yesterday.
    assert!(format_in_zone(dt(2021, 6, 8, 23, 59, 59), viewer_today()).ends_with("yesterday"));
    // Midnight of the next day is tomorrow.
    assert!(format_in_zone(dt(2021, 6, 10, 0, 0, 0), viewer_today()).ends_with("tomorrow"));
}

#[test]
fn test_distant_days_use_weekday_month_form() {
    let formatted = format_in_zone(dt(2021, 6, 12, 15, 0, 0), viewer_today());
    assert_eq!(formatted, "*3:00PM* on Sat Jun-12");

    // No leading zero on single-digit days.
    let formatted = format_in_zone(dt(2021, 6, 3, 9, 5, 0), viewer_today());
    assert_eq!(formatted, "*9:05am* :sunrise: on Thu Jun-3");
}

#[test]
fn test_deterministic_in_its_two_inputs() {
    // The viewer's time of day must not leak into the output; only the
    // date matters.
    let instant = dt(2021, 6, 9, 16, 0, 0);
    let morning_view = format_in_zone(instant, dt(2021, 6, 9, 0, 0, 1));
    let evening_view = format_in_zone(instant, dt(2021, 6, 9, 23, 59, 59));
    assert_eq!(morning_view, evening_view);
    assert_eq!(morning_view, format_in_zone(instant, viewer_today()));
}
