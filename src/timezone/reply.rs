//! Assembly of the ephemeral Block Kit reply.

use chrono::{Duration, NaiveDateTime};
use serde_json::{Value, json};

use super::format::format_in_zone;
use super::project::project;
use crate::core::models::ChannelTimezones;

/// Home-zone labels whose members are not called out by name. The
/// standard/daylight variants are treated as one reference zone.
const HOME_ZONE_LABELS: [&str; 2] = ["Eastern Daylight Time", "Eastern Standard Time"];

// ============================================================================
// Block Kit Builders
// ============================================================================

fn question_block() -> Value {
    json!({
        "type": "section",
        "block_id": "question",
        "text": {
            "type": "mrkdwn",
            "text": "Do you want to send a timezone message?"
        }
    })
}

fn intro_block() -> Value {
    json!({
        "type": "section",
        "block_id": "intro",
        "text": {
            "type": "mrkdwn",
            "text": "Ha! I never forget timezones..."
        }
    })
}

fn divider_block() -> Value {
    json!({ "type": "divider" })
}

fn actions_block() -> Value {
    json!({
        "type": "actions",
        "block_id": "send_button",
        "elements": [
            {
                "type": "button",
                "text": { "type": "plain_text", "text": "Yes", "emoji": true },
                "value": "send_message",
                "action_id": "send_button",
                "style": "primary"
            },
            {
                "type": "button",
                "text": { "type": "plain_text", "text": "No", "emoji": true },
                "value": "delete_message",
                "action_id": "delete_button",
                "style": "danger"
            }
        ]
    })
}

fn timezone_section(time_str: &str, names_str: &str) -> Value {
    json!({
        "type": "section",
        "text": {
            "type": "mrkdwn",
            "text": format!("{time_str}  \n{names_str}")
        }
    })
}

/// Comma-joined bold display names for a label; empty for the home zones.
fn names_line(label: &str, names: &[String]) -> String {
    if HOME_ZONE_LABELS.contains(&label) {
        return String::new();
    }
    format!("for *{}*", names.join(", "))
}

/// Build the full ordered reply: question prompt, divider, intro, one
/// section per distinct timezone (insertion order, the sender's own zone
/// included), divider, send/discard buttons.
///
/// Each timezone's "today" reference is computed from `now_utc` plus that
/// zone's own offset, never from the sender's anchor, so relative-day labels
/// hold even when the viewer's calendar day differs from the sender's. The
/// buttons are a confirmation affordance wired to an external action
/// handler; the composed reply itself is only ever delivered ephemerally to
/// the requester.
#[must_use]
pub fn compose_reply(
    timezones: &ChannelTimezones,
    resolved: NaiveDateTime,
    sender_offset_seconds: i32,
    now_utc: NaiveDateTime,
) -> Vec<Value> {
    let mut blocks = vec![question_block(), divider_block(), intro_block()];

    for (label, offset, names) in timezones.iter() {
        let projected = project(resolved, sender_offset_seconds, offset);
        let viewer_today = now_utc + Duration::seconds(i64::from(offset));
        let time_str = format_in_zone(projected, viewer_today);
        blocks.push(timezone_section(&time_str, &names_line(label, names)));
    }

    blocks.push(divider_block());
    blocks.push(actions_block());
    blocks
}
