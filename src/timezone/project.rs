//! Cross-timezone projection by stored UTC offsets.

use chrono::{Duration, NaiveDateTime};

/// Shift a sender-local instant into a target member's local wall time.
///
/// Pure arithmetic: the delta may be negative, zero, or positive, and
/// calendar day/month/year rollover falls out of the datetime type.
/// Projecting A to B and back with the offsets swapped recovers the input
/// exactly.
#[must_use]
pub fn project(
    resolved: NaiveDateTime,
    sender_offset_seconds: i32,
    target_offset_seconds: i32,
) -> NaiveDateTime {
    let delta = i64::from(target_offset_seconds) - i64::from(sender_offset_seconds);
    resolved + Duration::seconds(delta)
}
