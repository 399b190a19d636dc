//! Match Summary Route

use axum::{
    extract::{Query, State},
    Json,
};
use cricket_data::Season;
use serde::{Deserialize, Serialize};
use stats_engine::{count_matches, toss_advantage_percentage, win_counts, WinCounts, NO_MATCHES};
use tracing::debug;

use crate::{ApiError, SharedState};

/// Query parameters for season-scoped endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SeasonQuery {
    /// Season label; latest season when absent
    pub season: Option<String>,
}

/// Match count, win distribution and toss advantage for a season
#[derive(Debug, Serialize)]
pub struct MatchSummaryResponse {
    pub season: Season,
    pub total_matches: usize,
    pub wins: WinCounts,
    pub toss_advantage_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

/// Get the match summary
pub async fn get_matches(
    State(state): State<SharedState>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<MatchSummaryResponse>, ApiError> {
    let season = state.resolve_season(params.season.as_deref())?;
    let season_matches = state.engine.season_matches(&season);
    let total_matches = count_matches(&season_matches);

    debug!("Match summary for {}: {} matches", season, total_matches);

    Ok(Json(MatchSummaryResponse {
        wins: win_counts(&season_matches),
        toss_advantage_pct: toss_advantage_percentage(&season_matches),
        notice: (total_matches == 0).then_some(NO_MATCHES),
        total_matches,
        season,
    }))
}
