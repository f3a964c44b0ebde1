//! API Lambda handler - thin router for Slack Events API traffic.
//!
//! This module handles:
//! - Request validation (headers, body, signature)
//! - The `url_verification` handshake and `event_callback` routing,
//!   delegated to the `event_handler` module

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{event_handler, helpers, parsing, signature};
use crate::core::config::AppConfig;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails in practice: malformed requests get a 4xx response payload,
/// verified Slack events always get a 200, whatever their internal outcome.
#[tracing::instrument(level = "info", skip(config, event))]
pub async fn function_handler(
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let Some(headers) = event.payload.get("headers") else {
        error!("Request missing headers");
        return Ok(helpers::err_response(400, "Missing headers"));
    };

    let body = match extract_body(&event.payload) {
        Ok(b) => b,
        Err(response) => return Ok(response),
    };

    if let Err(response) = verify_signature(body, headers, config) {
        return Ok(response);
    }

    info!("Slack signature verified successfully");

    let json_body: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            error!("Request body is not valid JSON: {}", e);
            return Ok(helpers::err_response(400, "Invalid JSON body"));
        }
    };

    Ok(event_handler::handle_event_callback(config, &json_body).await)
}

// ============================================================================
// Request Validation Helpers
// ============================================================================

fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    Ok(body_str)
}

fn verify_signature(body: &str, headers: &Value, config: &AppConfig) -> Result<(), Value> {
    let Some(sig) = parsing::get_header_value(headers, "X-Slack-Signature") else {
        error!("Missing X-Slack-Signature header");
        return Err(helpers::err_response(
            401,
            "Missing X-Slack-Signature header",
        ));
    };

    let Some(timestamp) = parsing::get_header_value(headers, "X-Slack-Request-Timestamp") else {
        error!("Missing X-Slack-Request-Timestamp header");
        return Err(helpers::err_response(
            401,
            "Missing X-Slack-Request-Timestamp header",
        ));
    };

    if !signature::verify_slack_signature(body, timestamp, sig, config) {
        error!("Slack signature verification failed");
        return Err(helpers::err_response(401, "Invalid Slack signature"));
    }

    Ok(())
}
