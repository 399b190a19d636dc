//! Full Season Dashboard Route

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use stats_engine::{ReportOptions, SeasonReport, StrikeRateFilter};

use crate::{ApiError, SharedState};

/// Query parameters for the dashboard endpoint
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub season: Option<String>,
    pub min_strike_rate: Option<u32>,
}

/// Every dashboard section for one season
pub async fn get_dashboard(
    State(state): State<SharedState>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<SeasonReport>, ApiError> {
    let season = state.resolve_season(params.season.as_deref())?;
    let options = ReportOptions {
        strike_rate: StrikeRateFilter {
            min_strike_rate: state.controls.strike_rate(params.min_strike_rate)?,
            ..state.report.strike_rate
        },
        ..state.report.clone()
    };

    Ok(Json(state.engine.report(&season, &options)))
}
