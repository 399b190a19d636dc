//! Batting Routes

use axum::{
    extract::{Query, State},
    Json,
};
use cricket_data::Season;
use serde::{Deserialize, Serialize};
use stats_engine::{PlayerTotal, StrikeRateFilter, StrikeRateRow, NO_BATTING_DATA, NO_STRIKE_RATE_DATA};
use tracing::debug;

use crate::{ApiError, SharedState};

/// Query parameters for overall run scorers
#[derive(Debug, Default, Deserialize)]
pub struct OverallQuery {
    pub limit: Option<usize>,
}

/// Query parameters for season rankings
#[derive(Debug, Default, Deserialize)]
pub struct RankingQuery {
    pub season: Option<String>,
    pub limit: Option<usize>,
}

/// Query parameters for the strike-rate table
#[derive(Debug, Default, Deserialize)]
pub struct StrikeRateQuery {
    pub season: Option<String>,
    /// Slider value, 100..=200 in steps of 5
    pub min_strike_rate: Option<u32>,
    pub limit: Option<usize>,
}

/// Overall run scorers, every season combined
#[derive(Debug, Serialize)]
pub struct OverallResponse {
    pub data: Vec<PlayerTotal>,
    pub count: usize,
}

/// Season leader and ranking for runs or wickets
#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub season: Season,
    pub top: Option<PlayerTotal>,
    pub data: Vec<PlayerTotal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

/// Batters above the selected strike rate
#[derive(Debug, Serialize)]
pub struct StrikeRateResponse {
    pub season: Season,
    pub filter: StrikeRateFilter,
    pub data: Vec<StrikeRateRow>,
    /// Qualifying batters before the row limit
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

/// Get the overall top run scorers
pub async fn get_overall(
    State(state): State<SharedState>,
    Query(params): Query<OverallQuery>,
) -> Result<Json<OverallResponse>, ApiError> {
    let limit = state.controls.limit(params.limit, state.report.overall_limit)?;
    let data = state.engine.top_run_scorers_overall(limit);

    Ok(Json(OverallResponse {
        count: data.len(),
        data,
    }))
}

/// Get the season's top batsman and top-N batsmen
pub async fn get_season_batting(
    State(state): State<SharedState>,
    Query(params): Query<RankingQuery>,
) -> Result<Json<RankingResponse>, ApiError> {
    let season = state.resolve_season(params.season.as_deref())?;
    let limit = state.controls.limit(params.limit, state.report.season_limit)?;

    let data = state.engine.top_batsmen(&season, limit);
    let top = data.first().cloned();
    debug!("Batting ranking for {}: {} batters", season, data.len());

    Ok(Json(RankingResponse {
        notice: top.is_none().then_some(NO_BATTING_DATA),
        season,
        top,
        data,
    }))
}

/// Get batsmen at or above the strike-rate threshold
pub async fn get_strike_rate(
    State(state): State<SharedState>,
    Query(params): Query<StrikeRateQuery>,
) -> Result<Json<StrikeRateResponse>, ApiError> {
    let season = state.resolve_season(params.season.as_deref())?;
    let filter = StrikeRateFilter {
        min_strike_rate: state.controls.strike_rate(params.min_strike_rate)?,
        ..state.report.strike_rate
    };
    let limit = state.controls.limit(params.limit, state.report.strike_rate_rows)?;

    let mut data = state.engine.high_strike_rate_batsmen(&season, filter);
    let total = data.len();
    data.truncate(limit);

    Ok(Json(StrikeRateResponse {
        notice: data.is_empty().then_some(NO_STRIKE_RATE_DATA),
        season,
        filter,
        data,
        total,
    }))
}
