//! Application State
//!
//! Shared state accessible by all API handlers.
//! Everything here is read-only after startup, so handlers share it
//! through an `Arc` without locking.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::layout::{build_layout, PageLayout};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Economic table, loaded once at startup
    pub dataset: Arc<Dataset>,
    /// Page description derived from the dataset
    pub layout: Arc<PageLayout>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state for a loaded dataset
    pub fn new(dataset: Dataset, config: ServerConfig) -> Self {
        let layout = build_layout(&dataset);

        Self {
            dataset: Arc::new(dataset),
            layout: Arc::new(layout),
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
