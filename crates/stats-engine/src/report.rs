//! Season Report Assembly

use crate::batting::{StrikeRateFilter, StrikeRateRow};
use crate::engine::StatsEngine;
use crate::matches::WinCounts;
use crate::ranking::PlayerTotal;
use cricket_data::Season;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const NO_MATCHES: &str = "No matches recorded for this season.";
pub const NO_BATTING_DATA: &str = "No data available for this season.";
pub const NO_BOWLING_DATA: &str = "No bowling data available for this season.";
pub const NO_STRIKE_RATE_DATA: &str = "No batsmen found with strike rate above selected threshold.";

/// Limits and thresholds for a report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Overall run scorers listed
    pub overall_limit: usize,
    /// Batsmen and bowlers listed for the season
    pub season_limit: usize,
    /// Rows shown in the strike-rate table
    pub strike_rate_rows: usize,
    pub strike_rate: StrikeRateFilter,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            overall_limit: 10,
            season_limit: 5,
            strike_rate_rows: 10,
            strike_rate: StrikeRateFilter::default(),
        }
    }
}

/// User-facing notices for sections with nothing to show
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportNotices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batting: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowling: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_rate: Option<&'static str>,
}

impl ReportNotices {
    pub fn is_empty(&self) -> bool {
        self.matches.is_none()
            && self.batting.is_none()
            && self.bowling.is_none()
            && self.strike_rate.is_none()
    }
}

/// All dashboard sections for one season
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonReport {
    pub season: Season,
    pub total_matches: usize,
    pub wins: WinCounts,
    pub toss_advantage_pct: f64,
    pub top_run_scorers: Vec<PlayerTotal>,
    pub top_batsman: Option<PlayerTotal>,
    pub top_batsmen: Vec<PlayerTotal>,
    pub top_bowler: Option<PlayerTotal>,
    pub top_bowlers: Vec<PlayerTotal>,
    pub strike_rate_filter: StrikeRateFilter,
    pub high_strike_rate: Vec<StrikeRateRow>,
    pub notices: ReportNotices,
}

impl SeasonReport {
    pub fn build(engine: &StatsEngine, season: &Season, options: &ReportOptions) -> Self {
        let season_matches = engine.season_matches(season);
        let total_matches = season_matches.len();
        let wins = crate::matches::win_counts(&season_matches);
        let toss_advantage_pct = crate::matches::toss_advantage_percentage(&season_matches);

        let top_batsmen = engine.top_batsmen(season, options.season_limit.max(1));
        let top_batsman = top_batsmen.first().cloned();
        let top_bowlers = engine.top_bowlers(season, options.season_limit.max(1));
        let top_bowler = top_bowlers.first().cloned();

        let mut high_strike_rate = engine.high_strike_rate_batsmen(season, options.strike_rate);
        high_strike_rate.truncate(options.strike_rate_rows);

        let notices = ReportNotices {
            matches: (total_matches == 0).then_some(NO_MATCHES),
            batting: top_batsman.is_none().then_some(NO_BATTING_DATA),
            bowling: top_bowler.is_none().then_some(NO_BOWLING_DATA),
            strike_rate: high_strike_rate.is_empty().then_some(NO_STRIKE_RATE_DATA),
        };

        debug!("Built report for {} ({} matches)", season, total_matches);

        Self {
            season: season.clone(),
            total_matches,
            wins,
            toss_advantage_pct,
            top_run_scorers: engine.top_run_scorers_overall(options.overall_limit),
            top_batsman,
            top_batsmen: top_batsmen.into_iter().take(options.season_limit).collect(),
            top_bowler,
            top_bowlers: top_bowlers.into_iter().take(options.season_limit).collect(),
            strike_rate_filter: options.strike_rate,
            high_strike_rate,
            notices,
        }
    }
}
