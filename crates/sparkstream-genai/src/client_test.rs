use super::*;
use crate::error::FailureReason;
use crate::prompt::build_idea_prompt;

fn test_client(base_url: &str) -> GeminiClient {
    GeminiClient::with_base_url(Some("test-key"), DEFAULT_MODEL, None, base_url)
        .expect("client construction should not fail")
}

#[test]
fn endpoint_targets_generate_content_for_model() {
    let client = test_client("https://generativelanguage.googleapis.com");
    assert_eq!(
        client.endpoint().as_str(),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
    );
}

#[test]
fn endpoint_strips_trailing_slashes() {
    let client = test_client("http://localhost:8080/proxy//");
    assert_eq!(
        client.endpoint().as_str(),
        "http://localhost:8080/proxy/v1beta/models/gemini-2.5-flash:generateContent"
    );
}

#[test]
fn production_client_uses_configured_defaults() {
    let client = GeminiClient::new(Some("k"), DEFAULT_MODEL, None).expect("client");
    assert_eq!(client.model(), sparkstream_core::DEFAULT_GEMINI_MODEL);
    let endpoint = client.endpoint().as_str();
    assert!(endpoint.starts_with(sparkstream_core::DEFAULT_GEMINI_BASE_URL));
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = GeminiClient::with_base_url(Some("k"), DEFAULT_MODEL, None, "not a url");
    assert!(matches!(result, Err(GenaiError::InvalidBaseUrl { .. })));
}

#[test]
fn blank_api_key_counts_as_missing() {
    let client = GeminiClient::with_base_url(Some("  "), DEFAULT_MODEL, None, DEFAULT_BASE_URL)
        .expect("client");
    assert!(!client.has_api_key());
}

#[test]
fn status_error_classifies_auth_failures() {
    for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
        let err = GeminiClient::status_error(status, String::new());
        assert_eq!(err.reason(), FailureReason::Auth);
    }
    let err = GeminiClient::status_error(
        StatusCode::BAD_REQUEST,
        r#"{"error":{"status":"INVALID_ARGUMENT","details":[{"reason":"API_KEY_INVALID"}]}}"#
            .to_owned(),
    );
    assert_eq!(err.reason(), FailureReason::Auth);
}

#[test]
fn status_error_classifies_other_statuses_as_transport() {
    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::TOO_MANY_REQUESTS,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let err = GeminiClient::status_error(status, "nope".to_owned());
        assert_eq!(err.reason(), FailureReason::Transport, "{status}");
    }
}

#[tokio::test]
async fn missing_api_key_fails_before_sending() {
    // Port 9 (discard) is never contacted: the key check comes first.
    let client = GeminiClient::with_base_url(None, DEFAULT_MODEL, None, "http://127.0.0.1:9")
        .expect("client");
    let err = client
        .invoke(&build_idea_prompt("Exam stress", "Student Life"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenaiError::MissingApiKey));
}
