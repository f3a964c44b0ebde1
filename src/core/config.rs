use std::env;

use crate::errors::BotError;

/// Process-wide configuration, read from the environment once at startup.
///
/// A missing variable is fatal: the binary refuses to serve any request
/// rather than failing per event.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_signing_secret: String,
    pub slack_bot_token: String,
    /// The bot's own account id, used to break self-reply loops and to keep
    /// the bot out of the channel membership aggregation.
    pub bot_user_id: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `BotError::Config` naming the first missing variable.
    pub fn from_env() -> Result<Self, BotError> {
        Ok(Self {
            slack_signing_secret: env::var("SLACK_SIGNING_SECRET")
                .map_err(|e| BotError::Config(format!("SLACK_SIGNING_SECRET: {e}")))?,
            slack_bot_token: env::var("SLACK_BOT_TOKEN")
                .map_err(|e| BotError::Config(format!("SLACK_BOT_TOKEN: {e}")))?,
            bot_user_id: env::var("SLACK_BOT_USER_ID")
                .map_err(|e| BotError::Config(format!("SLACK_BOT_USER_ID: {e}")))?,
        })
    }
}
