//! Chart Routes
//!
//! Endpoint the year slider calls on every change.
//!
//! - GET /api/v1/charts?year=2020 - Map, bar and pie figures for a year

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::{update_charts, ChartSet};

/// GET /api/v1/charts
///
/// Recompute all three figures for the selected year. A year outside the
/// dataset yields empty figures rather than an error.
pub async fn get_charts(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ChartParams>, QueryRejection>,
) -> ApiResult<Json<ChartSet>> {
    let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;

    let year = params.year.unwrap_or(state.layout.slider.value);

    Ok(Json(update_charts(&state.dataset, year)))
}
