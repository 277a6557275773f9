//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Always 200: the server only starts after the dataset has loaded, and a
/// `Dataset` is never empty.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status with dataset details. Status is always `healthy` for
/// the same reason readiness is unconditional.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let range = state.dataset.year_range();

    Json(HealthResponse {
        status: "healthy".to_string(),
        records: state.dataset.len(),
        min_year: range.min,
        max_year: range.max,
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
