//! Common routes: root greeting, health, readiness, version.

use crate::extractors::DbSession;
use crate::state::AppState;
use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "Hello": "World" }))
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// Database round-trip on a private session.
async fn ready(DbSession(mut session): DbSession) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    let reachable = match session.connection().await {
        Ok(conn) => sqlx::query("SELECT 1").fetch_optional(conn).await.is_ok(),
        Err(_) => false,
    };
    if !reachable {
        tracing::warn!("readiness check failed: database unavailable");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /, GET /health, GET /ready, GET /version.
pub fn common_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
}
