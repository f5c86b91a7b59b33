#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode};
use axum::Router;
use memo_api::config::DatabaseSettings;
use memo_api::{app, connect, ensure_schema, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const ORIGIN: &str = "http://127.0.0.1:5500";

/// In-memory database; `connect` keeps it on one long-lived connection.
pub async fn memory_pool() -> SqlitePool {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".into(),
        max_connections: 1,
    };
    let pool = connect(&settings).await.expect("Failed to open in-memory database");
    ensure_schema(&pool).await.expect("Failed to create schema");
    pool
}

pub async fn test_app() -> (Router, SqlitePool) {
    let pool = memory_pool().await;
    let router = app(AppState::new(pool.clone()), HeaderValue::from_static(ORIGIN));
    (router, pool)
}

/// Send one request and decode the JSON response body (Null when empty).
pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap_or_else(|err| panic!("failed to build request: {err}"));

    let response = router
        .clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|err| panic!("router request failed: {err}"));
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_else(|err| panic!("failed to read response body: {err}"));
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let value: Value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|err| panic!("response body is not JSON ({err}): {:?}", bytes));
    (status, value)
}
