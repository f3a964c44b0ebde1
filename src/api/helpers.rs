//! Response builders for the webhook boundary.

use serde_json::{Value, json};

/// Returns a 200 OK acknowledgment with an empty body.
///
/// Every per-request outcome - sent, skipped, failed - collapses into this:
/// the webhook transport only needs prompt acknowledgment.
#[must_use]
pub fn ok_empty() -> Value {
    json!({ "statusCode": 200, "body": "" })
}

/// Returns a 200 OK response echoing a `url_verification` challenge verbatim.
#[must_use]
pub fn challenge_response(challenge: &str) -> Value {
    json!({ "statusCode": 200, "body": challenge })
}

/// Returns an error response with the given status code and message.
///
/// Only malformed transport requests earn one of these; Slack-delivered
/// events are always acknowledged 200.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}
