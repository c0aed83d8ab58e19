#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use rental_api::{ensure_tables, Settings};
use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tower::ServiceExt;

/// Pool that never connects successfully: nothing listens on port 1.
pub fn unreachable_pool() -> PgPool {
    let settings = Settings::from_lookup(|name| match name {
        "DB_HOST" => Some("127.0.0.1".into()),
        "DB_PORT" => Some("1".into()),
        _ => None,
    })
    .expect("settings");
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy_with(settings.database.connect_options())
}

/// Pool for the database named by TEST_DATABASE_URL, with tables created. None skips the test.
pub async fn test_pool() -> Option<PgPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("connect TEST_DATABASE_URL");
    ensure_tables(&pool).await.expect("ensure tables");
    Some(pool)
}

/// Name that does not collide across tests or runs.
pub fn unique(prefix: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{}-{}-{}", prefix, nanos, COUNTER.fetch_add(1, Ordering::Relaxed))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, HeaderMap, Value) {
    let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
    let request = Request::builder().method(method).uri(uri).body(body).expect("request");
    let response = app.clone().oneshot(request).await.expect("infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, json)
}
