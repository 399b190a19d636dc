//! Stats Engine bound to a Dataset

use crate::batting::{
    high_strike_rate_batsmen, top_batsman_of_season, top_n_batsmen_of_season,
    top_run_scorers_overall, StrikeRateFilter, StrikeRateRow,
};
use crate::bowling::{top_bowler_of_season, top_n_bowlers_of_season};
use crate::matches::{filter_matches_by_season, toss_advantage_percentage, win_counts, WinCounts};
use crate::ranking::PlayerTotal;
use crate::report::{ReportOptions, SeasonReport};
use cricket_data::{Dataset, Match, Season};
use std::sync::Arc;

/// Query front-end over a shared, immutable dataset
///
/// Every method is a pure function of the dataset and its arguments.
#[derive(Debug, Clone)]
pub struct StatsEngine {
    dataset: Arc<Dataset>,
}

impl StatsEngine {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Season selector options, latest first
    pub fn seasons(&self) -> Vec<Season> {
        self.dataset.seasons()
    }

    pub fn latest_season(&self) -> Option<Season> {
        self.dataset.latest_season()
    }

    pub fn season_matches(&self, season: &Season) -> Vec<&Match> {
        filter_matches_by_season(self.dataset.matches(), season)
    }

    pub fn count_matches(&self, season: &Season) -> usize {
        self.season_matches(season).len()
    }

    pub fn win_counts(&self, season: &Season) -> WinCounts {
        win_counts(&self.season_matches(season))
    }

    pub fn toss_advantage_percentage(&self, season: &Season) -> f64 {
        toss_advantage_percentage(&self.season_matches(season))
    }

    pub fn top_run_scorers_overall(&self, n: usize) -> Vec<PlayerTotal> {
        top_run_scorers_overall(self.dataset.deliveries(), n)
    }

    pub fn top_batsman(&self, season: &Season) -> Option<PlayerTotal> {
        top_batsman_of_season(self.dataset.enriched(), season)
    }

    pub fn top_batsmen(&self, season: &Season, n: usize) -> Vec<PlayerTotal> {
        top_n_batsmen_of_season(self.dataset.enriched(), season, n)
    }

    pub fn top_bowler(&self, season: &Season) -> Option<PlayerTotal> {
        top_bowler_of_season(self.dataset.enriched(), season)
    }

    pub fn top_bowlers(&self, season: &Season, n: usize) -> Vec<PlayerTotal> {
        top_n_bowlers_of_season(self.dataset.enriched(), season, n)
    }

    pub fn high_strike_rate_batsmen(
        &self,
        season: &Season,
        filter: StrikeRateFilter,
    ) -> Vec<StrikeRateRow> {
        high_strike_rate_batsmen(self.dataset.enriched(), season, filter)
    }

    /// Every dashboard section for `season` in one pass
    pub fn report(&self, season: &Season, options: &ReportOptions) -> SeasonReport {
        SeasonReport::build(self, season, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_data::{Delivery, DismissalKind};

    fn engine() -> StatsEngine {
        let matches = vec![
            Match::new(1, "2017", Some("MI"), "MI"),
            Match::new(2, "2017", Some("RPS"), "MI"),
            Match::new(3, "2018", Some("CSK"), "SRH"),
        ];
        let deliveries = vec![
            Delivery::new(1, "Rohit", "Tahir", 6),
            Delivery::new(2, "Smith", "Bumrah", 4),
            Delivery::new(2, "Rahane", "Bumrah", 0).with_dismissal(DismissalKind::Bowled),
            Delivery::new(3, "Watson", "Kaul", 6),
        ];
        StatsEngine::new(Arc::new(Dataset::from_records(matches, deliveries).unwrap()))
    }

    #[test]
    fn test_season_scoped_queries() {
        let engine = engine();
        let season = Season::from("2017");

        assert_eq!(engine.count_matches(&season), 2);
        assert_eq!(engine.win_counts(&season).total_wins(), 2);
        assert!((engine.toss_advantage_percentage(&season) - 50.0).abs() < 1e-9);
        assert_eq!(engine.top_batsman(&season).unwrap().player, "Rohit");
        assert_eq!(engine.top_bowler(&season).unwrap().player, "Bumrah");
        assert_eq!(engine.top_batsmen(&season, 5).len(), 3);
    }

    #[test]
    fn test_overall_scorers_span_seasons() {
        let engine = engine();
        let top = engine.top_run_scorers_overall(10);
        assert_eq!(top[0].player, "Rohit");
        assert_eq!(top[1].player, "Watson");
    }

    #[test]
    fn test_seasons() {
        let engine = engine();
        assert_eq!(engine.seasons(), vec![Season::from("2018"), Season::from("2017")]);
        assert_eq!(engine.latest_season(), Some(Season::from("2018")));
    }

    #[test]
    fn test_clones_share_dataset() {
        let engine = engine();
        let other = engine.clone();
        assert!(std::ptr::eq(engine.dataset(), other.dataset()));
    }
}
