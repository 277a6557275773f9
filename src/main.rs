//! African GDP Dashboard
//!
//! Loads the GDP table and serves the dashboard.
//!
//! Run with: cargo run -- serve --data africa_economics_v2.csv

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use africa_gdp_dashboard::api::{serve, AppState};
use africa_gdp_dashboard::charts::update_charts;
use africa_gdp_dashboard::config::{
    generate_default_config, CliOverrides, Config, ConfigSource, LoggingConfig,
};
use africa_gdp_dashboard::dataset::{Dataset, DatasetLoader};

#[derive(Parser)]
#[command(name = "africa-gdp-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard of African GDP by year")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// CSV dataset path
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard server (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the chart figures for a year as JSON
    Charts {
        /// Selected year (default: first year in the dataset)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Print a default config file
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    match command {
        Commands::InitConfig => {
            print!("{}", generate_default_config());
        }
        Commands::Serve { host, port } => {
            let overrides = CliOverrides {
                data: cli.data,
                host,
                port,
            };
            let config = resolve_config(cli.config.as_deref(), &overrides)?;

            tracing::info!("Starting African GDP Dashboard v{}", env!("CARGO_PKG_VERSION"));

            let dataset = load_dataset(&config)?;
            let state = AppState::new(dataset, config.server.clone());
            serve(state, &config.server).await?;
        }
        Commands::Charts { year } => {
            let overrides = CliOverrides {
                data: cli.data,
                ..Default::default()
            };
            let config = resolve_config(cli.config.as_deref(), &overrides)?;
            let dataset = load_dataset(&config)?;
            let year = year.unwrap_or(dataset.min_year());
            let charts = update_charts(&dataset, year);
            println!("{}", serde_json::to_string_pretty(&charts)?);
        }
    }

    Ok(())
}

/// Resolve config, then start logging from it and report where it came from
fn resolve_config(path: Option<&Path>, overrides: &CliOverrides) -> anyhow::Result<Config> {
    let resolved = Config::resolve_from_env(path, overrides)?;

    init_logging(&resolved.config.logging);
    match &resolved.source {
        ConfigSource::File(path) => tracing::info!("Loaded config from {}", path.display()),
        ConfigSource::Defaults => tracing::info!("No config file found, using defaults"),
    }

    Ok(resolved.config)
}

/// Load the dataset or fail startup
fn load_dataset(config: &Config) -> anyhow::Result<Dataset> {
    DatasetLoader::new()
        .with_columns(config.dataset.columns())
        .load(&config.dataset.path)
        .with_context(|| format!("cannot start without dataset {:?}", config.dataset.path))
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("africa_gdp_dashboard={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
