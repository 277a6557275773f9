//! # African GDP Dashboard
//!
//! An interactive dashboard of African economies: pick a year on the slider
//! and three linked views redraw from the rows for that year.
//!
//! ## Features
//!
//! - **Choropleth map**: every economy colored by GDP on a globe centered on Africa
//! - **Top five**: bar chart of the five largest economies
//! - **Shares**: pie chart with everything outside the top five labelled `Other`
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the immutable in-memory table
//! - [`charts`]: year filter to Plotly figure transformation
//! - [`layout`]: static page description and HTML rendering
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use africa_gdp_dashboard::charts::update_charts;
//! use africa_gdp_dashboard::dataset::DatasetLoader;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = DatasetLoader::new().load(Path::new("africa_economics_v2.csv"))?;
//!
//!     let charts = update_charts(&dataset, dataset.max_year());
//!     println!("{}", serde_json::to_string_pretty(&charts.bar)?);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod layout;

pub use dataset::{
    ColumnNames, Dataset, DatasetError, DatasetLoader, DatasetResult, EconomicRecord, YearRange,
};

pub use charts::{update_charts, ChartSet, MapFigure};

pub use layout::{build_layout, render_html, PageLayout};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    CliOverrides, Config, ConfigError, ConfigSource, DatasetConfig, LoggingConfig, ResolvedConfig,
    ServerConfig,
};
