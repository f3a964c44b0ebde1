//! Collaborator seams for the Slack platform.
//!
//! The dispatcher only ever talks to these traits: one production
//! implementation (`SlackClient`) and in-memory doubles in tests.

use async_trait::async_trait;
use futures::future::try_join_all;
use serde_json::Value;

use crate::core::models::{ChannelTimezones, MemberTimezone};
use crate::errors::BotError;

/// Identity and membership lookups consumed by the dispatcher.
#[async_trait]
pub trait ChannelDirectory: Send + Sync {
    /// Resolve a user id to timezone label, UTC offset, and display name.
    async fn lookup_user_timezone(&self, user_id: &str) -> Result<MemberTimezone, BotError>;

    /// Enumerate member user ids of a channel, in the platform's order.
    async fn list_channel_members(&self, channel_id: &str) -> Result<Vec<String>, BotError>;

    /// Fetch a single message's `(text, author user id)` by timestamp.
    async fn fetch_message_text(
        &self,
        channel_id: &str,
        ts: &str,
    ) -> Result<(String, String), BotError>;
}

/// Outbound ephemeral message sending.
#[async_trait]
pub trait EphemeralMessenger: Send + Sync {
    /// Post `blocks` to `channel_id`, visible only to `user_id`.
    async fn post_ephemeral(
        &self,
        channel_id: &str,
        user_id: &str,
        blocks: &[Value],
    ) -> Result<(), BotError>;
}

/// Aggregate every non-bot member's timezone for a channel.
///
/// Per-member lookups are independent and fan out concurrently; the
/// first-seen label order of the result follows the platform's member
/// enumeration order. Strict all-or-nothing: one failed lookup fails the
/// whole aggregation (the degrade-by-omission alternative was rejected, see
/// DESIGN.md).
///
/// # Errors
///
/// Propagates the first `BotError` from the member enumeration or any
/// per-member lookup.
pub async fn collect_channel_timezones<D>(
    directory: &D,
    channel_id: &str,
    bot_user_id: &str,
) -> Result<ChannelTimezones, BotError>
where
    D: ChannelDirectory + ?Sized,
{
    let members = directory.list_channel_members(channel_id).await?;

    let lookups = members
        .iter()
        .filter(|id| id.as_str() != bot_user_id)
        .map(|id| directory.lookup_user_timezone(id));
    let resolved = try_join_all(lookups).await?;

    let mut timezones = ChannelTimezones::default();
    for member in resolved {
        timezones.insert(member);
    }
    Ok(timezones)
}
