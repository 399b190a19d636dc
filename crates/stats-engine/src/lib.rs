//! Season Statistics Engine
//!
//! Pure groupby/aggregate/sort queries over the cricket dataset: match
//! counts, win distribution, toss advantage, run scorers, wicket takers and
//! strike-rate filtering.
//!
//! Rankings are deterministic: descending by the aggregate, ties broken by
//! name in ascending order.

mod batting;
mod bowling;
mod engine;
mod matches;
mod ranking;
mod report;

#[cfg(test)]
mod properties;

pub use batting::{
    high_strike_rate_batsmen, top_batsman_of_season, top_n_batsmen_of_season,
    top_run_scorers_overall, StrikeRateFilter, StrikeRateRow,
};
pub use bowling::{top_bowler_of_season, top_n_bowlers_of_season};
pub use engine::StatsEngine;
pub use matches::{
    count_matches, filter_matches_by_season, toss_advantage_percentage, win_counts, TeamWins,
    WinCounts,
};
pub use ranking::PlayerTotal;
pub use report::{
    ReportNotices, ReportOptions, SeasonReport, NO_BATTING_DATA, NO_BOWLING_DATA, NO_MATCHES,
    NO_STRIKE_RATE_DATA,
};
