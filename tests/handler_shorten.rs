mod common;

use axum::http::StatusCode;
use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

use shortspan::api::handlers::shorten_handler;

fn test_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_shorten_returns_link_and_expiry(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_link = json["shortLink"].as_str().unwrap();
    assert!(short_link.starts_with("http://localhost:3000/"));

    let code = short_link.rsplit('/').next().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    // ISO-8601 UTC with second precision.
    let expiry = json["expiry"].as_str().unwrap();
    assert!(expiry.ends_with('Z'));
    assert_eq!(expiry.len(), "2026-08-21T12:00:00Z".len());
}

#[sqlx::test]
async fn test_shorten_with_custom_shortcode(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "promo1" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortLink"], "http://localhost:3000/promo1");
}

#[sqlx::test]
async fn test_shorten_duplicate_custom_shortcode_conflicts(pool: SqlitePool) {
    let server = test_server(pool);

    let first = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "abc" }))
        .await;
    first.assert_status_ok();

    let second = server
        .post("/shorturls")
        .json(&json!({ "url": "https://other.com", "shortcode": "abc" }))
        .await;
    second.assert_status(StatusCode::CONFLICT);

    let json = second.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_shorten_rejects_bad_destination(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_shorten_rejects_validity_out_of_range(pool: SqlitePool) {
    let server = test_server(pool);

    for validity in [0, 525_601] {
        let response = server
            .post("/shorturls")
            .json(&json!({ "url": "http://x.com", "validity": validity }))
            .await;

        response.assert_status_bad_request();
    }
}

#[sqlx::test]
async fn test_shorten_rejects_bad_shortcodes(pool: SqlitePool) {
    let server = test_server(pool);

    for shortcode in ["ab", "valid-code!", "a1b2c3d4e5f6g7h8i9j0x"] {
        let response = server
            .post("/shorturls")
            .json(&json!({ "url": "https://example.com", "shortcode": shortcode }))
            .await;

        response.assert_status_bad_request();
    }
}

#[sqlx::test]
async fn test_shorten_failed_request_inserts_nothing(pool: SqlitePool) {
    let server = test_server(pool.clone());

    server
        .post("/shorturls")
        .json(&json!({ "url": "not-a-url", "shortcode": "keepme" }))
        .await
        .assert_status_bad_request();

    assert_eq!(common::link_count(&pool).await, 0);
}
