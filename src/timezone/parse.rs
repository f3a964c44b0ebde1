//! Fuzzy resolution of free-form message text to a concrete date/time.
//!
//! The time expression is usually buried among unrelated words, so matching
//! is token-oriented rather than grammatical. Every field the text does not
//! state comes from the anchor (midnight of the sender's local day), which
//! is what makes "3pm" land on the sender's calendar day rather than UTC's.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::BotError;

/// `H:MM` with optional seconds and optional meridiem marker.
static CLOCK_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-2]?[0-9]):([0-5][0-9])(?::([0-5][0-9]))?\s?(am|pm)?")
        .expect("static regex compile")
});

/// Bare numeral with a meridiem marker ("9am", "@4 PM").
static BARE_HOUR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[\s@])([0-9]{1,2})\s?(am|pm)\b").expect("static regex compile")
});

static DAY_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(today|tomorrow|yesterday)\b").expect("static regex compile"));

/// Full weekday names only: the three-letter forms collide with too many
/// ordinary words in fuzzy text ("we sat at the back").
static WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b")
        .expect("static regex compile")
});

/// Resolve message text to the instant the sender meant, in sender-local
/// wall time.
///
/// # Errors
///
/// `BotError::AmbiguousTime` when no time-bearing token can be extracted, or
/// when the tokens conflict. This is distinct from the detector finding no
/// candidate: a candidate substring can still fail resolution (a meridiem on
/// an hour outside 1-12, "am" belonging to a longer word, two contradictory
/// day references).
pub fn resolve_message_time(text: &str, anchor: NaiveDateTime) -> Result<NaiveDateTime, BotError> {
    let time = extract_time_of_day(text)?;
    let date = resolve_day(text, anchor.date())?;
    Ok(date.and_time(time))
}

fn extract_time_of_day(text: &str) -> Result<NaiveTime, BotError> {
    if let Some(caps) = CLOCK_TIME.captures(text) {
        let hour = parse_field(&caps[1])?;
        let minute = parse_field(&caps[2])?;
        let second = match caps.get(3) {
            Some(m) => parse_field(m.as_str())?,
            None => 0,
        };
        let hour = match caps.get(4) {
            Some(m) => to_24_hour(hour, m.as_str())?,
            None => hour,
        };
        return NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or_else(|| BotError::AmbiguousTime(format!("hour {hour} out of range")));
    }

    if let Some(caps) = BARE_HOUR.captures(text) {
        let hour = to_24_hour(parse_field(&caps[1])?, &caps[2])?;
        return NaiveTime::from_hms_opt(hour, 0, 0)
            .ok_or_else(|| BotError::AmbiguousTime(format!("hour {hour} out of range")));
    }

    Err(BotError::AmbiguousTime(
        "no time-bearing token in text".to_string(),
    ))
}

fn parse_field(digits: &str) -> Result<u32, BotError> {
    digits
        .parse()
        .map_err(|_| BotError::AmbiguousTime(format!("unreadable numeral {digits}")))
}

/// 12-hour to 24-hour conversion. Hours outside 1-12 cannot carry a
/// meridiem marker.
fn to_24_hour(hour: u32, meridiem: &str) -> Result<u32, BotError> {
    if !(1..=12).contains(&hour) {
        return Err(BotError::AmbiguousTime(format!(
            "hour {hour} cannot carry {meridiem}"
        )));
    }
    Ok(match (hour, meridiem.to_ascii_lowercase().as_str()) {
        (12, "am") => 0,
        (h, "am") => h,
        (12, _) => 12,
        (h, _) => h + 12,
    })
}

fn resolve_day(text: &str, base: NaiveDate) -> Result<NaiveDate, BotError> {
    let mut day_words: Vec<String> = DAY_WORDS
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect();
    day_words.sort();
    day_words.dedup();

    if day_words.len() > 1 {
        return Err(BotError::AmbiguousTime(format!(
            "conflicting day references: {}",
            day_words.join(", ")
        )));
    }

    if let Some(word) = day_words.first() {
        return Ok(match word.as_str() {
            "tomorrow" => base + Duration::days(1),
            "yesterday" => base - Duration::days(1),
            _ => base,
        });
    }

    if let Some(caps) = WEEKDAY.captures(text) {
        let weekday: Weekday = caps[1]
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| BotError::AmbiguousTime(format!("unrecognized weekday {}", &caps[1])))?;
        // First such weekday on or after the anchor day.
        let ahead =
            i64::from((weekday.num_days_from_monday() + 7 - base.weekday().num_days_from_monday()) % 7);
        return Ok(base + Duration::days(ahead));
    }

    Ok(base)
}
