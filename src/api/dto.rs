//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Serialize};

// ============================================
// CHART DTOs
// ============================================

/// Query parameters for the chart-update endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// Selected year; the slider's initial value when omitted
    #[serde(default)]
    pub year: Option<i32>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status; `healthy` whenever the server is up
    pub status: String,
    /// Number of records loaded
    pub records: usize,
    /// Earliest year in the dataset
    pub min_year: i32,
    /// Latest year in the dataset
    pub max_year: i32,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server start time (RFC 3339)
    pub started_at: String,
    /// Application version
    pub version: String,
}
