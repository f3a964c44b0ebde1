use thiserror::Error;

/// Error taxonomy for one event's handling.
///
/// "No time found" is deliberately not represented here: the detector returns
/// `Option` and the dispatcher skips on `None`. Everything below is absorbed
/// at the dispatcher boundary and converted into a uniform acknowledgment;
/// only `Config` is fatal, and only at startup.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("could not resolve a time from message text: {0}")]
    AmbiguousTime(String),

    #[error("directory lookup failed: {0}")]
    DirectoryLookup(String),

    #[error("failed to send HTTP request: {0}")]
    Http(String),

    #[error("Slack API error: {0}")]
    Api(String),

    #[error("missing required configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::Http(error.to_string())
    }
}
