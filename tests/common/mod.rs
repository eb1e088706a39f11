#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use storefront_api::{app, apply_migrations, AppState, DatabaseHelper, Settings};
use tower::ServiceExt;

/// In-memory SQLite on a single pooled connection, so every session sees the same database.
pub fn memory_settings() -> Settings {
    let vars = [("DATABASE_URL", "sqlite::memory:"), ("DB_MAX_CONNECTIONS", "1")];
    Settings::from_lookup(|k| vars.iter().find(|(key, _)| *key == k).map(|(_, v)| v.to_string()))
        .expect("test settings")
}

pub async fn test_app_with(migrate: bool) -> (Router, DatabaseHelper) {
    let settings = memory_settings();
    let db = DatabaseHelper::connect(&settings).await.expect("connect");
    if migrate {
        apply_migrations(db.pool(), db.backend()).await.expect("migrations");
    }
    (app(AppState::new(db.clone())), db)
}

pub async fn test_app() -> Router {
    test_app_with(true).await.0
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(req.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}
