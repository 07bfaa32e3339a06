//! Shared helpers for the integration test suite.
//!
//! Tests exercise the full axum router in-process against a fresh in-memory
//! `SQLite` database, so no running server or external services are needed.

use std::net::{IpAddr, Ipv4Addr};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

use pet_store_server::app::build_router;
use pet_store_server::config::ServerConfig;
use pet_store_server::db;
use pet_store_server::state::AppState;

/// Build the application router backed by a fresh in-memory database.
///
/// The pool is capped at a single connection; an in-memory database lives and
/// dies with its connection, so a second one would see an empty schema.
///
/// # Panics
///
/// Panics if the database cannot be created or migrated.
pub async fn test_app() -> Router {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let config = ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
    };

    build_router(AppState::new(config, pool))
}

/// Send a request through the router and decode the response body as JSON.
///
/// Returns `Value::Null` for empty bodies so callers can assert on status
/// codes alone.
///
/// # Panics
///
/// Panics if the request cannot be served or the body is not valid JSON.
pub async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Failed to serve request");

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();

    if body.is_empty() {
        return (status, Value::Null);
    }

    let value = serde_json::from_slice(&body).expect("Response body was not valid JSON");
    (status, value)
}

/// Build a request carrying a JSON body.
///
/// # Panics
///
/// Panics if the request parts are invalid, which cannot happen for the
/// fixed URIs used in tests.
#[must_use]
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Build a request with an empty body.
///
/// # Panics
///
/// Panics if the request parts are invalid, which cannot happen for the
/// fixed URIs used in tests.
#[must_use]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}
