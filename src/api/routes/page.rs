//! Page Routes
//!
//! - GET / - Dashboard HTML
//! - GET /api/v1/layout - Page description as JSON

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::layout::{render_html, PageLayout};

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    render_html(&state.layout)
        .map(Html)
        .map_err(|e| ApiError::Internal(format!("Failed to render page: {}", e)))
}

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<PageLayout> {
    Json(state.layout.as_ref().clone())
}
