//! IPL Season Dashboard API Server
//!
//! JSON endpoints behind the season analytics dashboard. Every request
//! recomputes its statistics from the shared, read-only dataset.

use anyhow::Context;
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use cricket_data::{Dataset, Season};
use serde::Serialize;
use stats_engine::{ReportOptions, StatsEngine};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::GovernorLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
pub mod controls;
mod error;
pub mod rate_limit;
mod routes;

pub use config::DashboardConfig;
pub use controls::{ControlConfig, ControlError, Controls};
pub use error::ApiError;

/// Application state shared across handlers
///
/// Nothing in it changes after startup, so handlers read it without locking.
pub struct AppState {
    pub engine: StatsEngine,
    /// Default limits and strike-rate filter
    pub report: ReportOptions,
    pub controls: Controls,
    pub version: String,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, report: ReportOptions) -> Self {
        Self {
            engine: StatsEngine::new(dataset),
            report,
            controls: Controls::default(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Requested season, or the latest one when none is given
    pub fn resolve_season(&self, requested: Option<&str>) -> Result<Season, ApiError> {
        match requested.map(str::trim).filter(|s| !s.is_empty()) {
            Some(label) => Ok(Season::new(label)),
            None => self.engine.latest_season().ok_or(ApiError::NoSeasons),
        }
    }
}

pub type SharedState = Arc<AppState>;

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub dataset: DatasetStats,
}

/// Row counts of the loaded dataset
#[derive(Debug, Serialize)]
pub struct DatasetStats {
    pub matches: usize,
    pub deliveries: usize,
    pub enriched_deliveries: usize,
    pub dropped_deliveries: usize,
    pub seasons: usize,
}

/// Create the application router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/seasons", get(routes::seasons::get_seasons))
        .route("/api/v1/matches", get(routes::matches::get_matches))
        .route("/api/v1/batting", get(routes::batting::get_season_batting))
        .route("/api/v1/batting/overall", get(routes::batting::get_overall))
        .route("/api/v1/bowling", get(routes::bowling::get_season_bowling))
        .route("/api/v1/strike-rate", get(routes::batting::get_strike_rate))
        .route("/api/v1/dashboard", get(routes::dashboard::get_dashboard))
        .with_state(state)
}

/// Router with tracing, CORS and rate limiting layers
pub fn build_app(state: SharedState, config: &DashboardConfig) -> anyhow::Result<Router> {
    let governor = rate_limit::create_governor_config(&config.rate_limit)
        .context("rate_limit.per_second and rate_limit.burst_size must be non-zero")?;

    Ok(create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(GovernorLayer { config: governor }),
    ))
}

/// Health check handler
async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let dataset = state.engine.dataset();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        dataset: DatasetStats {
            matches: dataset.match_count(),
            deliveries: dataset.delivery_count(),
            enriched_deliveries: dataset.enriched_count(),
            dropped_deliveries: dataset.dropped_deliveries(),
            seasons: dataset.seasons().len(),
        },
    })
}

/// Initialize logging at the given level name
///
/// Unknown level names fall back to `info`.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let parsed = level.parse::<Level>();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(*parsed.as_ref().unwrap_or(&Level::INFO))
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    if parsed.is_err() {
        warn!("Unknown log level {:?}, using info", level);
    }
    Ok(())
}

/// Load the dataset and serve the dashboard API until shutdown
pub async fn run_server(config: DashboardConfig) -> anyhow::Result<()> {
    let matches_path = config.matches_path.clone();
    let deliveries_path = config.deliveries_path.clone();
    let dataset = tokio::task::spawn_blocking(move || Dataset::load(&matches_path, &deliveries_path))
        .await
        .context("Dataset loader task failed")?
        .context("Failed to load dataset")?;

    let state = Arc::new(AppState::new(Arc::new(dataset), config.report.clone()));
    let app = build_app(state, &config)?;

    info!("Starting dashboard server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
