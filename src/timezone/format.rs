//! Human-readable rendering of a projected instant.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Render an instant for a viewer whose "today" is `viewer_today`.
///
/// Deterministic in its two inputs. The shape is
/// `*H:MM(AM|pm)* [(HH:MM)] [:sunrise:] <day label>`:
///
/// - the day label is `today`/`tomorrow`/`yesterday` relative to the
///   viewer's date, otherwise `on <abbrev weekday> <abbrev month>-<day>`
///   with no leading zero on the day
/// - the meridiem is uppercase, except AM which is lowercased to set
///   mornings apart
/// - a 24-hour `(HH:MM)` suffix appears only when the hour has no 1-12
///   display form (hour 0 or >= 13)
/// - morning times get a trailing `:sunrise:` marker, always after the
///   24-hour suffix
#[must_use]
pub fn format_in_zone(projected: NaiveDateTime, viewer_today: NaiveDateTime) -> String {
    let date = projected.date();
    let today = viewer_today.date();

    let day_label = if date == today {
        "today".to_string()
    } else if date == today + Duration::days(1) {
        "tomorrow".to_string()
    } else if date == today - Duration::days(1) {
        "yesterday".to_string()
    } else {
        format!("on {}", projected.format("%a %b-%-d"))
    };

    let mut time_label = format!("*{}*", projected.format("%-I:%M%p"));

    if let Some(stripped) = time_label.strip_suffix("AM*") {
        time_label = format!("{stripped}am*");
    }

    let hour = projected.hour();
    if hour == 0 || hour >= 13 {
        time_label.push_str(&format!(" ({})", projected.format("%H:%M")));
    }
    if hour < 12 {
        time_label.push_str(" :sunrise:");
    }

    format!("{time_label} {day_label}")
}
