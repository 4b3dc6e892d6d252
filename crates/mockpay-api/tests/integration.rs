//! Integration tests exercising the full HTTP surface.
//!
//! Each test spins up the real router against an in-memory state, once per
//! session mode where the behavior differs.

use axum::http::StatusCode;
use axum_test::TestServer;
use mockpay_api::routes::create_router;
use mockpay_api::state::{AppConfig, AppState};
use mockpay_core::{
    CheckoutBase, SessionMode, SessionStore, StyleConfig, UserDirectory, DECLINE_METHOD_TOKEN,
};
use serde_json::{json, Value};
use uuid::Uuid;

const CHECKOUT_BASE: &str = "https://checkout.example.com/";

fn server_with_mode(mode: SessionMode) -> TestServer {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        checkout_base_url: CHECKOUT_BASE.to_string(),
        environment: "test".to_string(),
        session_mode: mode,
    };

    let state = AppState::with_components(
        config,
        SessionStore::new(mode, CheckoutBase::new(CHECKOUT_BASE)),
        UserDirectory::new(),
        StyleConfig::light(),
    );

    TestServer::new(create_router(state)).unwrap()
}

fn mock_server() -> TestServer {
    server_with_mode(SessionMode::Mock)
}

fn strict_server() -> TestServer {
    server_with_mode(SessionMode::Strict)
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_service() {
    let server = mock_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "mockpay");
}

// =============================================================================
// Payment flow, mock mode
// =============================================================================

#[tokio::test]
async fn start_issues_pending_session_with_redirect() {
    let server = mock_server();

    let response = server
        .post("/api/payments/start")
        .json(&json!({"method": "card", "amount": 49.99, "currency": "USD"}))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    let payment_id = body["paymentId"].as_str().unwrap();

    assert!(Uuid::parse_str(payment_id).is_ok());
    assert_eq!(body["status"], "PENDING");
    assert_eq!(
        body["redirectUrl"].as_str().unwrap(),
        format!("{CHECKOUT_BASE}{payment_id}")
    );
}

#[tokio::test]
async fn start_accepts_empty_request() {
    let server = mock_server();

    let response = server.post("/api/payments/start").json(&json!({})).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "PENDING");
}

#[tokio::test]
async fn start_issues_unique_ids() {
    let server = mock_server();

    let first = server.post("/api/payments/start").json(&json!({})).await;
    let second = server.post("/api/payments/start").json(&json!({})).await;

    assert_ne!(
        first.json::<Value>()["paymentId"],
        second.json::<Value>()["paymentId"]
    );
}

#[tokio::test]
async fn full_payment_flow() {
    let server = mock_server();

    let started = server
        .post("/api/payments/start")
        .json(&json!({"method": "card"}))
        .await
        .json::<Value>();
    let payment_id = started["paymentId"].as_str().unwrap();

    let continued = server
        .post("/api/payments/continue")
        .json(&json!({"paymentId": payment_id, "methodToken": "tok_visa"}))
        .await;
    continued.assert_status_ok();

    let body = continued.json::<Value>();
    assert_eq!(body["paymentId"].as_str().unwrap(), payment_id);
    assert_eq!(body["status"], "PROCESSING");
    assert_eq!(body["lastUpdated"], "2023-10-27T10:00:00Z");

    let status = server
        .get(&format!("/api/payments/status/{payment_id}"))
        .await;
    status.assert_status_ok();

    let body = status.json::<Value>();
    assert_eq!(body["status"], "COMPLETED");
    assert_eq!(body["lastUpdated"], "2023-10-27T10:05:00Z");
}

#[tokio::test]
async fn mock_mode_answers_for_unknown_ids() {
    let server = mock_server();

    let continued = server
        .post("/api/payments/continue")
        .json(&json!({"paymentId": "never-issued"}))
        .await;
    continued.assert_status_ok();
    assert_eq!(continued.json::<Value>()["status"], "PROCESSING");

    let status = server.get("/api/payments/status/never-issued").await;
    status.assert_status_ok();

    let body = status.json::<Value>();
    assert_eq!(body["paymentId"], "never-issued");
    assert_eq!(body["status"], "COMPLETED");
}

#[tokio::test]
async fn mock_timestamps_are_stable_across_calls() {
    let server = mock_server();

    let first = server
        .post("/api/payments/continue")
        .json(&json!({"paymentId": "a"}))
        .await
        .json::<Value>();
    let second = server
        .post("/api/payments/continue")
        .json(&json!({"paymentId": "b"}))
        .await
        .json::<Value>();

    assert_eq!(first["lastUpdated"], second["lastUpdated"]);
}

// =============================================================================
// Payment flow, strict mode
// =============================================================================

#[tokio::test]
async fn strict_lifecycle_settles_completed() {
    let server = strict_server();

    let started = server
        .post("/api/payments/start")
        .json(&json!({}))
        .await
        .json::<Value>();
    let payment_id = started["paymentId"].as_str().unwrap();

    let continued = server
        .post("/api/payments/continue")
        .json(&json!({"paymentId": payment_id, "methodToken": "tok_visa"}))
        .await;
    continued.assert_status_ok();
    assert_eq!(continued.json::<Value>()["status"], "PROCESSING");

    let status = server
        .get(&format!("/api/payments/status/{payment_id}"))
        .await;
    status.assert_status_ok();
    assert_eq!(status.json::<Value>()["status"], "COMPLETED");
}

#[tokio::test]
async fn strict_rejects_unknown_ids() {
    let server = strict_server();

    let continued = server
        .post("/api/payments/continue")
        .json(&json!({"paymentId": "ghost"}))
        .await;
    continued.assert_status(StatusCode::NOT_FOUND);

    let body = continued.json::<Value>();
    assert_eq!(body["code"], 404);
    assert!(body["error"].as_str().unwrap().contains("ghost"));

    let status = server.get("/api/payments/status/ghost").await;
    status.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn strict_rejects_double_continue() {
    let server = strict_server();

    let started = server
        .post("/api/payments/start")
        .json(&json!({}))
        .await
        .json::<Value>();
    let payment_id = started["paymentId"].as_str().unwrap();

    server
        .post("/api/payments/continue")
        .json(&json!({"paymentId": payment_id}))
        .await
        .assert_status_ok();

    let again = server
        .post("/api/payments/continue")
        .json(&json!({"paymentId": payment_id}))
        .await;
    again.assert_status(StatusCode::CONFLICT);
    assert_eq!(again.json::<Value>()["code"], 409);
}

#[tokio::test]
async fn strict_status_before_continue_is_pending() {
    let server = strict_server();

    let started = server
        .post("/api/payments/start")
        .json(&json!({}))
        .await
        .json::<Value>();
    let payment_id = started["paymentId"].as_str().unwrap();

    let status = server
        .get(&format!("/api/payments/status/{payment_id}"))
        .await;
    status.assert_status_ok();
    assert_eq!(status.json::<Value>()["status"], "PENDING");
}

#[tokio::test]
async fn strict_decline_token_settles_failed() {
    let server = strict_server();

    let started = server
        .post("/api/payments/start")
        .json(&json!({}))
        .await
        .json::<Value>();
    let payment_id = started["paymentId"].as_str().unwrap();

    server
        .post("/api/payments/continue")
        .json(&json!({"paymentId": payment_id, "methodToken": DECLINE_METHOD_TOKEN}))
        .await
        .assert_status_ok();

    let status = server
        .get(&format!("/api/payments/status/{payment_id}"))
        .await;
    status.assert_status_ok();
    assert_eq!(status.json::<Value>()["status"], "FAILED");
}

// =============================================================================
// Checkout style
// =============================================================================

#[tokio::test]
async fn style_serves_light_theme() {
    let server = mock_server();

    let response = server.get("/api/payments/style").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["theme"], "light");
    assert_eq!(body["primaryColor"], "#007bff");
    assert_eq!(body["customStyles"]["borderRadius"], "5px");
    assert_eq!(body["customStyles"]["fontFamily"], "Arial, sans-serif");
}

#[tokio::test]
async fn style_body_is_identical_across_requests() {
    let server = mock_server();

    let first = server.get("/api/payments/style").await.text();
    let second = server.get("/api/payments/style").await.text();
    assert_eq!(first, second);
}

// =============================================================================
// User directory
// =============================================================================

#[tokio::test]
async fn users_are_seeded() {
    let server = mock_server();

    let response = server.get("/api/users").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<String>>(), vec!["Alice", "Bob"]);
}

#[tokio::test]
async fn get_user_ignores_case() {
    let server = mock_server();

    let response = server.get("/api/users/alice").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Option<String>>().as_deref(), Some("Alice"));

    let response = server.get("/api/users/BOB").await;
    assert_eq!(response.json::<Option<String>>().as_deref(), Some("Bob"));
}

#[tokio::test]
async fn get_unknown_user_is_null() {
    let server = mock_server();

    let response = server.get("/api/users/dave").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Option<String>>(), None);
    assert_eq!(response.text(), "null");
}

#[tokio::test]
async fn create_user_appends_and_reports() {
    let server = mock_server();

    let response = server.post("/api/users").text("Carol").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "User Carol created");

    let listed = server.get("/api/users").await.json::<Vec<String>>();
    assert_eq!(listed, vec!["Alice", "Bob", "Carol"]);

    let found = server.get("/api/users/carol").await;
    assert_eq!(found.json::<Option<String>>().as_deref(), Some("Carol"));
}

#[tokio::test]
async fn create_user_accepts_duplicates() {
    let server = mock_server();

    server.post("/api/users").text("Alice").await.assert_status_ok();

    let listed = server.get("/api/users").await.json::<Vec<String>>();
    assert_eq!(listed, vec!["Alice", "Bob", "Alice"]);
}
