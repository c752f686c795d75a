//! Liveness plus database reachability

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" or "degraded"
    pub status: &'static str,
    /// "reachable" or "unreachable"
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health - 200 when the patient store answers a ping, 503 otherwise
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, store_status, database) = match state.store().ping().await {
        Ok(()) => (StatusCode::OK, "ok", "reachable"),
        Err(e) => {
            tracing::warn!("health check: patient store unreachable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: store_status,
            database,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
