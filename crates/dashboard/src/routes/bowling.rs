//! Bowling Routes

use axum::{
    extract::{Query, State},
    Json,
};
use stats_engine::NO_BOWLING_DATA;
use tracing::debug;

use super::batting::{RankingQuery, RankingResponse};
use crate::{ApiError, SharedState};

/// Get the season's top bowler and top-N bowlers
pub async fn get_season_bowling(
    State(state): State<SharedState>,
    Query(params): Query<RankingQuery>,
) -> Result<Json<RankingResponse>, ApiError> {
    let season = state.resolve_season(params.season.as_deref())?;
    let limit = state.controls.limit(params.limit, state.report.season_limit)?;

    let data = state.engine.top_bowlers(&season, limit);
    let top = data.first().cloned();
    debug!("Bowling ranking for {}: {} bowlers", season, data.len());

    Ok(Json(RankingResponse {
        notice: top.is_none().then_some(NO_BOWLING_DATA),
        season,
        top,
        data,
    }))
}
