//! Dashboard Configuration

use crate::rate_limit::RateLimitConfig;
use serde::{Deserialize, Serialize};
use stats_engine::ReportOptions;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "IPL_DASHBOARD_CONFIG";

/// Prefix for per-field environment overrides, e.g. `IPL_DASHBOARD__BIND_ADDR`
pub const ENV_PREFIX: &str = "IPL_DASHBOARD";

const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Listen address
    pub bind_addr: String,
    /// Match table CSV
    pub matches_path: PathBuf,
    /// Delivery table CSV
    pub deliveries_path: PathBuf,
    /// Maximum tracing level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    pub rate_limit: RateLimitConfig,
    /// Default limits used by the dashboard report
    pub report: ReportOptions,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            matches_path: PathBuf::from("data/matches.csv"),
            deliveries_path: PathBuf::from("data/deliveries.csv"),
            log_level: "info".to_string(),
            rate_limit: RateLimitConfig::default(),
            report: ReportOptions::default(),
        }
    }
}

impl DashboardConfig {
    /// Load from `dashboard.toml` (or `$IPL_DASHBOARD_CONFIG`) and the environment
    ///
    /// The file is optional; any field missing everywhere keeps its default.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    /// Load from an explicit file path plus environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
