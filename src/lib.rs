/// tzbot - a Slack chatbot that answers time mentions with cross-timezone
/// conversions.
///
/// When a channel message mentions a clock time ("let's meet at 3pm"), the
/// bot infers the sender's timezone, projects the mentioned time into every
/// distinct timezone present among the channel's members, and replies
/// ephemerally with one entry per timezone, labeled by display names.
///
/// # Architecture
///
/// A single API Lambda receives Slack Events API callbacks:
/// - `api` verifies request signatures, answers the `url_verification`
///   handshake, and dispatches `event_callback` payloads
/// - `timezone` holds the detection / parsing / projection / formatting
///   pipeline
/// - `slack` wraps the Slack Web API behind collaborator traits
/// - `core` carries configuration and the channel timezone aggregate
///
/// Every invocation is stateless: all data is fetched for the single event
/// being handled and discarded afterwards.
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod slack;
pub mod timezone;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
