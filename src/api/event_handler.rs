//! Handler for Slack Events API callbacks: the timezone reply dispatcher.
//!
//! Every outcome - sent, skipped, failed - is acknowledged 200 to the
//! webhook transport. A malformed or unparseable message must never surface
//! an error to the end user: the observable behavior of any failure is the
//! absence of a reply, with the detail kept in the logs.

use std::time::Duration;

use chrono::{Duration as TimeDelta, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::helpers::{challenge_response, ok_empty};
use super::parsing::v_str;
use crate::core::config::AppConfig;
use crate::errors::BotError;
use crate::slack::client::SlackClient;
use crate::slack::directory::{
    ChannelDirectory, EphemeralMessenger, collect_channel_timezones,
};
use crate::timezone::detect::detect_time_expression;
use crate::timezone::parse::resolve_message_time;
use crate::timezone::reply::compose_reply;

/// Bounded wait for any required directory or messaging operation.
const DIRECTORY_TIMEOUT: Duration = Duration::from_secs(10);

/// Terminal state of one event's handling. The webhook response is the same
/// either way; this exists for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The ephemeral reply was posted.
    Sent,
    /// Nothing to do: no time in the message, the bot's own message, or an
    /// absorbed per-request error.
    Skipped,
    /// A reply was composed but could not be delivered.
    Failed,
}

/// Handle an Events API payload: `url_verification` handshake, or an
/// `event_callback` routed to the message dispatcher.
pub async fn handle_event_callback(config: &AppConfig, json_body: &Value) -> Value {
    // URL verification handshake: echo the challenge verbatim. Happens once
    // per app registration, not per message.
    if v_str(json_body, &["type"]) == Some("url_verification") {
        let challenge = v_str(json_body, &["challenge"]).unwrap_or("");
        return challenge_response(challenge);
    }

    if v_str(json_body, &["type"]) != Some("event_callback") {
        return ok_empty();
    }

    let Some(event) = json_body.get("event") else {
        return ok_empty();
    };

    if v_str(event, &["type"]) != Some("message") {
        // No-op for other event types
        return ok_empty();
    }

    let client = SlackClient::new(config);
    let outcome = handle_message_event(config, event, &client, &client).await;
    info!(outcome = ?outcome, "Processed message event");

    ok_empty()
}

/// Run the timezone pipeline for a single `message` event.
///
/// Generic over the collaborators so tests can substitute in-memory doubles
/// for the Slack client.
pub async fn handle_message_event<D, M>(
    config: &AppConfig,
    event: &Value,
    directory: &D,
    messenger: &M,
) -> DispatchOutcome
where
    D: ChannelDirectory + ?Sized,
    M: EphemeralMessenger + ?Sized,
{
    let correlation_id = Uuid::new_v4().to_string();

    // Bot posts carry bot_id; edited and system messages carry a subtype.
    // Both would loop or double-reply.
    if event.get("bot_id").is_some() || event.get("subtype").is_some() {
        return DispatchOutcome::Skipped;
    }

    let channel_id = v_str(event, &["channel"]).unwrap_or("");
    let sender_id = v_str(event, &["user"]).unwrap_or("");
    if channel_id.is_empty() || sender_id.is_empty() {
        return DispatchOutcome::Skipped;
    }
    if sender_id == config.bot_user_id {
        // No self-reply loop.
        return DispatchOutcome::Skipped;
    }

    let mut text = v_str(event, &["text"]).unwrap_or("").to_string();
    if text.is_empty() {
        let Some(ts) = v_str(event, &["ts"]) else {
            return DispatchOutcome::Skipped;
        };
        match tokio::time::timeout(DIRECTORY_TIMEOUT, directory.fetch_message_text(channel_id, ts))
            .await
        {
            Ok(Ok((fetched, _author))) => text = fetched,
            Ok(Err(e)) => {
                error!(correlation_id = %correlation_id, "Message fetch failed: {}", e);
                return DispatchOutcome::Skipped;
            }
            Err(_) => {
                error!(correlation_id = %correlation_id, "Message fetch timed out");
                return DispatchOutcome::Skipped;
            }
        }
    }

    if detect_time_expression(&text).is_none() {
        return DispatchOutcome::Skipped;
    }

    let sender = match tokio::time::timeout(
        DIRECTORY_TIMEOUT,
        directory.lookup_user_timezone(sender_id),
    )
    .await
    {
        Ok(Ok(member)) => member,
        Ok(Err(e)) => {
            error!(correlation_id = %correlation_id, "Sender timezone lookup failed: {}", e);
            return DispatchOutcome::Skipped;
        }
        Err(_) => {
            error!(correlation_id = %correlation_id, "Sender timezone lookup timed out");
            return DispatchOutcome::Skipped;
        }
    };

    let now_utc = Utc::now().naive_utc();
    let anchor = local_midnight(now_utc, sender.utc_offset_seconds);

    let resolved = match resolve_message_time(&text, anchor) {
        Ok(instant) => instant,
        Err(BotError::AmbiguousTime(reason)) => {
            // Ordinary non-match, not an operational failure.
            info!(correlation_id = %correlation_id, "No resolvable time: {}", reason);
            return DispatchOutcome::Skipped;
        }
        Err(e) => {
            error!(correlation_id = %correlation_id, "Time resolution failed: {}", e);
            return DispatchOutcome::Skipped;
        }
    };

    let timezones = match tokio::time::timeout(
        DIRECTORY_TIMEOUT,
        collect_channel_timezones(directory, channel_id, &config.bot_user_id),
    )
    .await
    {
        Ok(Ok(timezones)) if !timezones.is_empty() => timezones,
        Ok(Ok(_)) => {
            info!(correlation_id = %correlation_id, "No members with timezones in channel");
            return DispatchOutcome::Skipped;
        }
        Ok(Err(e)) => {
            error!(correlation_id = %correlation_id, "Channel timezone aggregation failed: {}", e);
            return DispatchOutcome::Skipped;
        }
        Err(_) => {
            error!(correlation_id = %correlation_id, "Channel timezone aggregation timed out");
            return DispatchOutcome::Skipped;
        }
    };

    let blocks = compose_reply(&timezones, resolved, sender.utc_offset_seconds, now_utc);

    match tokio::time::timeout(
        DIRECTORY_TIMEOUT,
        messenger.post_ephemeral(channel_id, sender_id, &blocks),
    )
    .await
    {
        Ok(Ok(())) => {
            info!(
                correlation_id = %correlation_id,
                channel = %channel_id,
                timezones = timezones.len(),
                "Timezone reply sent"
            );
            DispatchOutcome::Sent
        }
        Ok(Err(e)) => {
            error!(correlation_id = %correlation_id, "Ephemeral send failed: {}", e);
            DispatchOutcome::Failed
        }
        Err(_) => {
            error!(correlation_id = %correlation_id, "Ephemeral send timed out");
            DispatchOutcome::Failed
        }
    }
}

/// Midnight of the local day at `offset_seconds`, given an instant in UTC.
///
/// Shift first, then truncate: the anchor must sit on the sender's calendar
/// day, not UTC's.
#[must_use]
pub fn local_midnight(now_utc: NaiveDateTime, offset_seconds: i32) -> NaiveDateTime {
    (now_utc + TimeDelta::seconds(i64::from(offset_seconds)))
        .date()
        .and_time(NaiveTime::MIN)
}
