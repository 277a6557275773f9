//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dataset::ColumnNames;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,

    #[serde(default = "default_country_column")]
    pub country_column: String,

    #[serde(default = "default_code_column")]
    pub code_column: String,

    #[serde(default = "default_year_column")]
    pub year_column: String,

    #[serde(default = "default_gdp_column")]
    pub gdp_column: String,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("africa_economics_v2.csv")
}

fn default_country_column() -> String {
    ColumnNames::default().country
}

fn default_code_column() -> String {
    ColumnNames::default().code
}

fn default_year_column() -> String {
    ColumnNames::default().year
}

fn default_gdp_column() -> String {
    ColumnNames::default().gdp
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            country_column: default_country_column(),
            code_column: default_code_column(),
            year_column: default_year_column(),
            gdp_column: default_gdp_column(),
        }
    }
}

impl DatasetConfig {
    /// Column names the loader should look for
    pub fn columns(&self) -> ColumnNames {
        ColumnNames {
            country: self.country_column.clone(),
            code: self.code_column.clone(),
            year: self.year_column.clone(),
            gdp: self.gdp_column.clone(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Values given on the command line; they win over file and environment
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl CliOverrides {
    fn apply(&self, config: &mut Config) {
        if let Some(data) = &self.data {
            config.dataset.path = data.clone();
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

/// Where the base configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config` or found in a standard location
    File(PathBuf),
    /// No file; built-in defaults
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Fully resolved configuration plus its origin, so the caller can report
/// it once logging is up
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Standard config file locations, in search order
pub fn default_locations() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("africa-gdp-dashboard").join("config.toml")),
        Some(PathBuf::from("./config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Resolve configuration in precedence order:
    /// config file, then environment (`lookup`), then command line.
    ///
    /// The file is `explicit` if given, else the first existing path in
    /// `search`. A file that exists but cannot be read or parsed is an error
    /// either way.
    pub fn resolve<F>(
        explicit: Option<&Path>,
        search: &[PathBuf],
        lookup: F,
        cli: &CliOverrides,
    ) -> Result<ResolvedConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = explicit
            .map(Path::to_path_buf)
            .or_else(|| search.iter().find(|p| p.exists()).cloned());

        let (mut config, source) = match file {
            Some(path) => (Self::load(&path)?, ConfigSource::File(path)),
            None => (Config::default(), ConfigSource::Defaults),
        };

        config.apply_overrides(lookup)?;
        cli.apply(&mut config);

        Ok(ResolvedConfig { config, source })
    }

    /// [`Config::resolve`] against the standard locations and the process environment
    pub fn resolve_from_env(
        explicit: Option<&Path>,
        cli: &CliOverrides,
    ) -> Result<ResolvedConfig, ConfigError> {
        Self::resolve(explicit, &default_locations(), |key| std::env::var(key).ok(), cli)
    }

    /// Apply overrides from any key lookup (the process environment in production)
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("GDP_DASHBOARD_DATA") {
            self.dataset.path = PathBuf::from(path);
        }

        if let Some(host) = lookup("GDP_DASHBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GDP_DASHBOARD_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::Env {
                key: "GDP_DASHBOARD_PORT".to_string(),
                value: port,
            })?;
        }

        if let Some(level) = lookup("GDP_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("GDP_DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: {value:?}")]
    Env { key: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# African GDP Dashboard Configuration
#
# Environment variables override these settings:
# - GDP_DASHBOARD_DATA
# - GDP_DASHBOARD_HOST
# - GDP_DASHBOARD_PORT
# - GDP_DASHBOARD_LOG_LEVEL
# - GDP_DASHBOARD_LOG_FORMAT

[dataset]
# CSV file with one row per country and year
path = "africa_economics_v2.csv"

# Header names of the required columns
country_column = "Country"
code_column = "Code"
year_column = "Year"
gdp_column = "GDP (USD)"

[server]
# Dashboard host
host = "127.0.0.1"

# Dashboard port
port = 8050

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
