//! Slack Web API client module
//!
//! Encapsulates all Slack API interactions with retry logic and error
//! handling: raw `slack.com/api` endpoints over a shared HTTP client, typed
//! response envelopes, and `ok`-field checking.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tokio_retry::Retry;

use super::directory::{ChannelDirectory, EphemeralMessenger};
use crate::core::config::AppConfig;
use crate::core::models::MemberTimezone;
use crate::errors::BotError;

// Static HTTP client, shared across invocations of a warm Lambda.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Deserialize)]
struct UsersInfoResponse {
    ok: bool,
    error: Option<String>,
    user: Option<UserInfo>,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    tz_label: Option<String>,
    tz_offset: Option<i32>,
    profile: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
struct UserProfile {
    display_name: Option<String>,
    real_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MembersResponse {
    ok: bool,
    error: Option<String>,
    members: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    ok: bool,
    error: Option<String>,
    messages: Option<Vec<HistoryMessage>>,
}

#[derive(Debug, Deserialize)]
struct HistoryMessage {
    text: Option<String>,
    user: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PostEphemeralResponse {
    ok: bool,
    error: Option<String>,
}

/// Production implementation of the directory and messenger collaborators.
pub struct SlackClient {
    bot_token: String,
}

impl SlackClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            bot_token: config.slack_bot_token.clone(),
        }
    }

    // Wrap API calls with retry logic for rate limits and transient errors.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, BotError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, BotError>> + Send,
        T: Send,
    {
        // Exponential backoff with jitter to avoid thundering herds.
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(3);

        Retry::spawn(strategy, operation).await
    }

    async fn get_api<T>(&self, method: &str, query: &[(&str, &str)]) -> Result<T, BotError>
    where
        T: serde::de::DeserializeOwned,
    {
        let resp = HTTP_CLIENT
            .get(format!("https://slack.com/api/{method}"))
            .bearer_auth(&self.bot_token)
            .query(query)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(BotError::Api(format!("{method} HTTP {}", resp.status())));
        }

        resp.json::<T>()
            .await
            .map_err(|e| BotError::Http(format!("{method} JSON parse error: {e}")))
    }
}

#[async_trait]
impl ChannelDirectory for SlackClient {
    async fn lookup_user_timezone(&self, user_id: &str) -> Result<MemberTimezone, BotError> {
        self.with_retry(|| async {
            let resp: UsersInfoResponse = self.get_api("users.info", &[("user", user_id)]).await?;

            if !resp.ok {
                return Err(BotError::DirectoryLookup(format!(
                    "users.info error: {}",
                    resp.error.as_deref().unwrap_or("unknown")
                )));
            }
            let user = resp.user.ok_or_else(|| {
                BotError::DirectoryLookup("users.info returned no user".to_string())
            })?;

            let display_name = user
                .profile
                .as_ref()
                .and_then(|p| p.display_name.clone().filter(|n| !n.is_empty()))
                .or_else(|| user.profile.as_ref().and_then(|p| p.real_name.clone()))
                .unwrap_or_else(|| user_id.to_string());

            // Slack reports no tz for some accounts; they fall back to UTC,
            // which is also what the platform itself assumes.
            Ok(MemberTimezone {
                label: user.tz_label.unwrap_or_else(|| "UTC".to_string()),
                utc_offset_seconds: user.tz_offset.unwrap_or(0),
                display_name,
            })
        })
        .await
    }

    async fn list_channel_members(&self, channel_id: &str) -> Result<Vec<String>, BotError> {
        self.with_retry(|| async {
            // TODO: follow response_metadata.next_cursor for channels larger
            // than one page.
            let resp: MembersResponse = self
                .get_api(
                    "conversations.members",
                    &[("channel", channel_id), ("limit", "200")],
                )
                .await?;

            if !resp.ok {
                return Err(BotError::DirectoryLookup(format!(
                    "conversations.members error: {}",
                    resp.error.as_deref().unwrap_or("unknown")
                )));
            }
            resp.members.ok_or_else(|| {
                BotError::DirectoryLookup("conversations.members returned no members".to_string())
            })
        })
        .await
    }

    async fn fetch_message_text(
        &self,
        channel_id: &str,
        ts: &str,
    ) -> Result<(String, String), BotError> {
        self.with_retry(|| async {
            let resp: HistoryResponse = self
                .get_api(
                    "conversations.history",
                    &[
                        ("channel", channel_id),
                        ("latest", ts),
                        ("limit", "1"),
                        ("inclusive", "true"),
                    ],
                )
                .await?;

            if !resp.ok {
                return Err(BotError::DirectoryLookup(format!(
                    "conversations.history error: {}",
                    resp.error.as_deref().unwrap_or("unknown")
                )));
            }

            let message = resp
                .messages
                .unwrap_or_default()
                .into_iter()
                .next()
                .ok_or_else(|| {
                    BotError::DirectoryLookup(format!("no message at ts {ts}"))
                })?;

            Ok((
                message.text.unwrap_or_default(),
                message.user.unwrap_or_default(),
            ))
        })
        .await
    }
}

#[async_trait]
impl EphemeralMessenger for SlackClient {
    async fn post_ephemeral(
        &self,
        channel_id: &str,
        user_id: &str,
        blocks: &[Value],
    ) -> Result<(), BotError> {
        let payload = json!({
            "channel": channel_id,
            "user": user_id,
            "blocks": blocks,
        });

        self.with_retry(|| async {
            let resp = HTTP_CLIENT
                .post("https://slack.com/api/chat.postEphemeral")
                .bearer_auth(&self.bot_token)
                .json(&payload)
                .send()
                .await?;

            if !resp.status().is_success() {
                return Err(BotError::Api(format!(
                    "chat.postEphemeral HTTP {}",
                    resp.status()
                )));
            }

            let body: PostEphemeralResponse = resp.json().await.map_err(|e| {
                BotError::Http(format!("chat.postEphemeral JSON parse error: {e}"))
            })?;

            if !body.ok {
                return Err(BotError::Api(format!(
                    "chat.postEphemeral error: {}",
                    body.error.as_deref().unwrap_or("unknown")
                )));
            }

            Ok(())
        })
        .await
    }
}
