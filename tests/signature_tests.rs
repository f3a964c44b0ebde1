use std::time::{SystemTime, UNIX_EPOCH};

use tzbot::api::signature::{compute_signature, verify_slack_signature};
use tzbot::core::config::AppConfig;

fn config() -> AppConfig {
    AppConfig {
        slack_signing_secret: "8f742231b10e8888abcd99yyyzzz85a5".to_string(),
        slack_bot_token: "xoxb-test".to_string(),
        bot_user_id: "B999".to_string(),
    }
}

fn now_ts() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before epoch")
        .as_secs()
        .to_string()
}

#[test]
fn test_computed_signature_round_trips() {
    let cfg = config();
    let body = r#"{"type":"event_callback","event":{"type":"message"}}"#;
    let ts = now_ts();

    let sig = compute_signature(&ts, body, &cfg.slack_signing_secret);
    assert!(sig.starts_with("v0="), "unexpected signature shape: {sig}");
    assert!(verify_slack_signature(body, &ts, &sig, &cfg));
}

#[test]
fn test_tampered_body_fails_verification() {
    let cfg = config();
    let ts = now_ts();
    let sig = compute_signature(&ts, "original body", &cfg.slack_signing_secret);

    assert!(!verify_slack_signature("tampered body", &ts, &sig, &cfg));
}

#[test]
fn test_wrong_secret_fails_verification() {
    let cfg = config();
    let ts = now_ts();
    let sig = compute_signature(&ts, "body", "some-other-secret");

    assert!(!verify_slack_signature("body", &ts, &sig, &cfg));
}

#[test]
fn test_stale_timestamp_is_rejected_as_replay() {
    let cfg = config();
    let stale = (SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
        - 1000)
        .to_string();
    // Even a correctly signed request is rejected outside the window.
    let sig = compute_signature(&stale, "body", &cfg.slack_signing_secret);

    assert!(!verify_slack_signature("body", &stale, &sig, &cfg));
}

#[test]
fn test_far_future_timestamp_is_rejected() {
    let cfg = config();
    let future = (SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
        + 1000)
        .to_string();
    let sig = compute_signature(&future, "body", &cfg.slack_signing_secret);

    assert!(!verify_slack_signature("body", &future, &sig, &cfg));
}
