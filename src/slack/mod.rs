//! All Slack-specific functionality

pub mod client;
pub mod directory;

// Re-export main types for convenience
pub use client::SlackClient;
pub use directory::{ChannelDirectory, EphemeralMessenger, collect_channel_timezones};
