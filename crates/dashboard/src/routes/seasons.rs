//! Season Selector Route

use axum::{extract::State, Json};
use cricket_data::Season;
use serde::Serialize;

use crate::SharedState;

/// Options for the season selector
#[derive(Debug, Serialize)]
pub struct SeasonsResponse {
    /// Distinct seasons, latest first
    pub seasons: Vec<Season>,
    /// Initially selected season
    pub default: Option<Season>,
}

/// List seasons present in the match table
pub async fn get_seasons(State(state): State<SharedState>) -> Json<SeasonsResponse> {
    let seasons = state.engine.seasons();

    Json(SeasonsResponse {
        default: seasons.first().cloned(),
        seasons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn test_seasons_latest_first() {
        let Json(response) = get_seasons(State(test_support::state())).await;
        assert_eq!(response.seasons, vec![Season::from("2011"), Season::from("2010")]);
        assert_eq!(response.default, Some(Season::from("2011")));
    }
}
