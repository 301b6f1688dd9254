#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bookclub_server::{app, create_pool, migrations, ServerConfig, StoreConfig};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

/// Fresh migrated database in a temp dir. Keep the `TempDir` alive for
/// the duration of the test.
pub async fn test_pool(enforce_foreign_keys: bool) -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = StoreConfig {
        database_url: format!("sqlite://{}", dir.path().join("bookclub.db").display()),
        enforce_foreign_keys,
        ..StoreConfig::default()
    };
    let pool = create_pool(&config).await.expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");
    (pool, dir)
}

pub async fn test_app() -> (Router, TempDir) {
    let (pool, dir) = test_pool(false).await;
    (app(pool, &ServerConfig::default()), dir)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).expect("request"))
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}
