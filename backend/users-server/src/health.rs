use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Service status, version and timestamp
pub async fn health(State(state): State<AppState>) -> Response {
    let status = if state.shutdown.is_cancelled() {
        "shutting_down"
    } else {
        "healthy"
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe, fails once shutdown has started
pub async fn readiness(State(state): State<AppState>) -> Response {
    if state.shutdown.is_cancelled() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}
