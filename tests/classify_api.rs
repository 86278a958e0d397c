//! End-to-end tests for the classify endpoint
//!
//! These tests drive the full router in-process against a mock fact
//! provider, covering validation failures, classification results, the
//! cache round-trip, and upstream degradation.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use httpmock::prelude::*;
use tower::ServiceExt;

use numfact::{build_router, ServerConfig, ServerState};

/// Create a router wired to the given mock provider
fn test_router(provider_url: &str) -> Router {
    let config = ServerConfig {
        fact_provider_url: provider_url.to_string(),
        fact_timeout_secs: 1,
        fact_cache_ttl_secs: 3600,
        ..ServerConfig::default()
    };
    let state = Arc::new(ServerState::new(config).expect("Failed to create test state"));
    build_router(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

fn mock_fact<'a>(server: &'a MockServer, number: i64, text: &str) -> httpmock::Mock<'a> {
    let text = text.to_string();
    server.mock(move |when, then| {
        when.method(GET).path(format!("/{number}"));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({ "text": text }));
    })
}

#[tokio::test]
async fn classify_armstrong_number() {
    let server = MockServer::start();
    mock_fact(&server, 153, "153 is an Armstrong number.");
    let app = test_router(&server.base_url());

    let (status, body) = get_json(&app, "/api/classify-number?number=153").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 153);
    assert_eq!(body["is_prime"], false);
    assert_eq!(body["is_perfect"], false);
    assert_eq!(body["is_armstrong"], true);
    assert_eq!(body["properties"], serde_json::json!(["odd", "armstrong"]));
    assert_eq!(body["digit_sum"], 9);
    assert_eq!(body["fun_fact"], "153 is an Armstrong number.");
}

#[tokio::test]
async fn classify_perfect_and_prime() {
    let server = MockServer::start();
    mock_fact(&server, 28, "28 is perfect.");
    mock_fact(&server, 7, "7 is prime.");
    let app = test_router(&server.base_url());

    let (status, body) = get_json(&app, "/api/classify-number?number=28").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_perfect"], true);
    assert_eq!(body["is_prime"], false);
    assert_eq!(body["properties"], serde_json::json!(["even"]));
    assert_eq!(body["digit_sum"], 10);

    let (status, body) = get_json(&app, "/api/classify-number?number=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_prime"], true);
    assert_eq!(body["properties"], serde_json::json!(["odd"]));
}

#[tokio::test]
async fn classify_negative_number() {
    let server = MockServer::start();
    mock_fact(&server, -6, "minus six");
    let app = test_router(&server.base_url());

    let (status, body) = get_json(&app, "/api/classify-number?number=-6").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], -6);
    assert_eq!(body["is_prime"], false);
    assert_eq!(body["is_perfect"], false);
    assert_eq!(body["is_armstrong"], false);
    assert_eq!(body["properties"], serde_json::json!(["even"]));
    assert_eq!(body["digit_sum"], 6);
}

#[tokio::test]
async fn missing_number_parameter_is_rejected() {
    let server = MockServer::start();
    let app = test_router(&server.base_url());

    let (status, body) = get_json(&app, "/api/classify-number").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_integer_input_is_rejected_with_offending_value() {
    let server = MockServer::start();
    let app = test_router(&server.base_url());

    for raw in ["abc", "3.5", "12e3", ""] {
        let (status, body) = get_json(&app, &format!("/api/classify-number?number={raw}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "input {raw:?}");
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains(raw), "message {message:?} misses {raw:?}");
    }
}

#[tokio::test]
async fn fun_fact_is_cached_within_ttl() {
    let server = MockServer::start();
    let mock = mock_fact(&server, 42, "42 is the answer.");
    let app = test_router(&server.base_url());

    let (_, first) = get_json(&app, "/api/classify-number?number=42").await;
    let (_, second) = get_json(&app, "/api/classify-number?number=42").await;

    assert_eq!(first["fun_fact"], "42 is the answer.");
    assert_eq!(first["fun_fact"], second["fun_fact"]);
    // Second request must be served from the cache.
    mock.assert_hits(1);
}

#[tokio::test]
async fn upstream_timeout_still_returns_ok() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/5");
        then.status(200)
            .header("content-type", "application/json")
            .delay(std::time::Duration::from_secs(3))
            .json_body(serde_json::json!({ "text": "too late" }));
    });
    let app = test_router(&server.base_url());

    let (status, body) = get_json(&app, "/api/classify-number?number=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fun_fact"], "Fun fact request timed out.");
    assert_eq!(body["is_prime"], true);
}

#[tokio::test]
async fn upstream_failure_still_returns_ok() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/11");
        then.status(500);
    });
    let app = test_router(&server.base_url());

    let (status, body) = get_json(&app, "/api/classify-number?number=11").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fun_fact"], "No fun fact available.");
}

#[tokio::test]
async fn root_returns_api_info() {
    let server = MockServer::start();
    let app = test_router(&server.base_url());

    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "numfact");
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("/api/classify-number")));
}

#[tokio::test]
async fn health_and_readiness_probes() {
    let server = MockServer::start();
    let app = test_router(&server.base_url());

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get_json(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let server = MockServer::start();
    let app = test_router(&server.base_url());

    let (status, body) = get_json(&app, "/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
