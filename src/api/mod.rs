//! Dashboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard HTML (slider plus map, bar and pie regions)
//! - `GET /api/v1/layout` - Page description as JSON
//!
//! ## Charts
//! - `GET /api/v1/charts?year=2020` - Figures for the selected year
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use africa_gdp_dashboard::api::{serve, AppState};
//! use africa_gdp_dashboard::config::ServerConfig;
//! use africa_gdp_dashboard::dataset::DatasetLoader;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = DatasetLoader::new().load(Path::new("africa_economics_v2.csv"))?;
//!     let config = ServerConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/charts", get(routes::charts::get_charts))
        .route("/layout", get(routes::page::get_layout));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, EconomicRecord};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let dataset = Dataset::new(vec![
            EconomicRecord::new("Nigeria", "NGA", 2020, 450.0),
            EconomicRecord::new("Egypt", "EGY", 2020, 400.0),
            EconomicRecord::new("SouthAfrica", "ZAF", 2020, 350.0),
            EconomicRecord::new("Kenya", "KEN", 2020, 100.0),
            EconomicRecord::new("Ghana", "GHA", 2020, 70.0),
            EconomicRecord::new("Ethiopia", "ETH", 2020, 60.0),
            EconomicRecord::new("Nigeria", "NGA", 2018, 421.0),
        ])
        .unwrap();

        build_router(AppState::new(dataset, ServerConfig::default()))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["records"], 7);
        assert_eq!(body["min_year"], 2018);
        assert_eq!(body["max_year"], 2020);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("African GDP Dashboard"));
        assert!(html.contains(r#"id="year-slider""#));
    }

    #[tokio::test]
    async fn test_layout() {
        let response = get(create_test_app(), "/api/v1/layout").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["slider"]["min"], 2018);
        assert_eq!(body["slider"]["max"], 2020);
        assert_eq!(body["slider"]["marks"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_charts_for_year() {
        let response = get(create_test_app(), "/api/v1/charts?year=2020").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["year"], 2020);
        assert_eq!(
            body["bar"]["data"][0]["x"],
            serde_json::json!(["Nigeria", "Egypt", "SouthAfrica", "Kenya", "Ghana"])
        );
        assert_eq!(body["pie"]["data"][0]["labels"][5], "Other");
        assert_eq!(body["map"]["data"][0]["locations"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_charts_default_to_first_year() {
        let response = get(create_test_app(), "/api/v1/charts").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["year"], 2018);
        assert_eq!(body["bar"]["data"][0]["x"], serde_json::json!(["Nigeria"]));
    }

    #[tokio::test]
    async fn test_charts_year_without_rows() {
        let response = get(create_test_app(), "/api/v1/charts?year=1999").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["map"]["data"][0]["locations"], serde_json::json!([]));
        assert_eq!(body["pie"]["data"][0]["values"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_charts_invalid_year() {
        let response = get(create_test_app(), "/api/v1/charts?year=latest").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = get(create_test_app(), "/api/v1/records").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
