//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes health checks.
//!
//! - GET /health/live - Liveness check (process is alive)
//! - GET /health/ready - Readiness check (dataset has records)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness check.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness check.
/// The dataset is loaded before the server binds, so the only way to be
/// unready is an empty dataset.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.dataset.is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// GET /health
///
/// Full health status.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if state.dataset.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        records: state.dataset.len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
