//! First-pass detection of a clock-time substring in message text.

use once_cell::sync::Lazy;
use regex::{Match, Regex};

/// Matches either a 24-hour `H:MM` through `23:MM` form (zero-padding
/// optional), or a 1-12 numeral (optionally zero-padded, preceded by start
/// of text, whitespace or `@`) with at most one space before a
/// case-insensitive AM/PM marker.
static TIME_EXPRESSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[01]?[0-9]|2[0-3]):[0-5][0-9]|(?:^|[\s@])(?:0?[1-9]|1[0-2]) ?(?i:am|pm)")
        .expect("static regex compile")
});

/// Find the first plausible clock-time substring, if any.
///
/// Absence of a match is the normal outcome for most messages, never an
/// error; callers skip silently on `None`. The match is a candidate only:
/// resolution (and rejection of things like "12 among us") is the parser's
/// job.
pub fn detect_time_expression(text: &str) -> Option<Match<'_>> {
    TIME_EXPRESSION.find(text)
}
