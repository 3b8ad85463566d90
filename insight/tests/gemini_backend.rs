//! Gemini backend and client behavior against a mock HTTP server.

use std::sync::Arc;

use insight::backend::GeminiBackend;
use insight::{
    BackendError, GenerationRequest, InsightClient, InsightConfig, TextBackend,
    EMPTY_RESPONSE_MESSAGE, FALLBACK_MESSAGE,
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "test-model";
const GENERATE_PATH: &str = "/models/test-model:generateContent";

fn backend_for(server: &MockServer) -> GeminiBackend {
    GeminiBackend::new(server.uri(), MODEL, "test-key").unwrap()
}

fn client_for(server: &MockServer) -> InsightClient {
    let config = InsightConfig::default()
        .with_api_key("test-key")
        .with_base_url(server.uri());
    InsightClient::with_backend(Arc::new(backend_for(server)), config)
}

#[tokio::test]
async fn test_generate_joins_candidate_parts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "莫奈的" }, { "text": "光影。" }]
                },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = backend_for(&server)
        .generate(GenerationRequest::new("Claude Monet"))
        .await
        .unwrap();

    assert_eq!(response.text, "莫奈的光影。");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Claude Monet");
}

#[tokio::test]
async fn test_rate_limit_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = backend_for(&server)
        .generate(GenerationRequest::new("topic"))
        .await;

    assert!(matches!(result, Err(BackendError::RateLimited)));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = backend_for(&server)
        .generate(GenerationRequest::new("topic"))
        .await;

    assert!(matches!(result, Err(BackendError::ParseError(_))));
}

#[tokio::test]
async fn test_client_retries_server_error_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(2)
        .mount(&server)
        .await;

    let text = client_for(&server).fetch_insight("topic").await;
    assert_eq!(text, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_client_does_not_retry_bad_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad key"))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server).fetch_insight("topic").await;
    assert_eq!(text, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_client_maps_no_candidates_to_empty_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let text = client_for(&server).fetch_insight("topic").await;
    assert_eq!(text, EMPTY_RESPONSE_MESSAGE);
}

#[tokio::test]
async fn test_client_sends_generation_settings() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = InsightConfig {
        max_output_tokens: Some(300),
        temperature: Some(0.5),
        ..InsightConfig::default()
            .with_api_key("test-key")
            .with_base_url(server.uri())
    };
    let client = InsightClient::with_backend(Arc::new(backend_for(&server)), config);
    assert_eq!(client.fetch_insight("topic").await, "ok");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 300);
    assert_eq!(body["generationConfig"]["temperature"], 0.5);
}

#[tokio::test]
async fn test_default_config_omits_generation_settings() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
        })))
        .mount(&server)
        .await;

    client_for(&server).fetch_insight("topic").await;

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("generationConfig").is_none());
}
