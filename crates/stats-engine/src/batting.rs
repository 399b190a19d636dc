//! Batting Queries

use crate::ranking::{by_total_then_name, PlayerTotal, Tally};
use cricket_data::{Delivery, EnrichedDelivery, Season};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Thresholds for the strike-rate table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrikeRateFilter {
    /// Minimum runs per 100 balls
    pub min_strike_rate: f64,
    /// Minimum balls faced to qualify
    pub min_balls_faced: u32,
}

impl Default for StrikeRateFilter {
    fn default() -> Self {
        Self {
            min_strike_rate: 130.0,
            min_balls_faced: 10,
        }
    }
}

impl StrikeRateFilter {
    /// Default ball minimum with a custom strike-rate threshold
    pub fn with_min_strike_rate(min_strike_rate: f64) -> Self {
        Self {
            min_strike_rate,
            ..Default::default()
        }
    }
}

/// One batter's row in the strike-rate table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrikeRateRow {
    pub batter: String,
    pub runs: u64,
    /// Delivery rows with this batter on strike
    pub balls_faced: u64,
    pub strike_rate: f64,
}

/// Deliveries of matches played in `season`
pub(crate) fn season_deliveries<'a>(
    enriched: &'a [EnrichedDelivery],
    season: &'a Season,
) -> impl Iterator<Item = &'a Delivery> + 'a {
    enriched
        .iter()
        .filter(move |e| &e.season == season)
        .map(|e| &e.delivery)
}

/// Highest run totals across every season
pub fn top_run_scorers_overall(deliveries: &[Delivery], n: usize) -> Vec<PlayerTotal> {
    let mut tally = Tally::new();
    for d in deliveries {
        tally.add(&d.batter, u64::from(d.batsman_runs));
    }
    tally.into_players(n)
}

/// Season's leading run scorer, `None` when the season has no deliveries
pub fn top_batsman_of_season(enriched: &[EnrichedDelivery], season: &Season) -> Option<PlayerTotal> {
    top_n_batsmen_of_season(enriched, season, 1).into_iter().next()
}

pub fn top_n_batsmen_of_season(
    enriched: &[EnrichedDelivery],
    season: &Season,
    n: usize,
) -> Vec<PlayerTotal> {
    let mut tally = Tally::new();
    for d in season_deliveries(enriched, season) {
        tally.add(&d.batter, u64::from(d.batsman_runs));
    }
    tally.into_players(n)
}

/// Batters at or above the strike-rate threshold, fastest first
///
/// Balls faced is the number of delivery rows for the batter, extras
/// included. This overcounts against a strict legal-ball definition.
pub fn high_strike_rate_batsmen(
    enriched: &[EnrichedDelivery],
    season: &Season,
    filter: StrikeRateFilter,
) -> Vec<StrikeRateRow> {
    let mut stats: HashMap<&str, (u64, u64)> = HashMap::new();
    for d in season_deliveries(enriched, season) {
        let entry = stats.entry(d.batter.as_str()).or_insert((0, 0));
        entry.0 += u64::from(d.batsman_runs);
        entry.1 += 1;
    }

    let mut rows: Vec<StrikeRateRow> = stats
        .into_iter()
        .filter(|(_, (_, balls))| *balls >= u64::from(filter.min_balls_faced) && *balls > 0)
        .map(|(batter, (runs, balls_faced))| StrikeRateRow {
            batter: batter.to_string(),
            runs,
            balls_faced,
            strike_rate: runs as f64 / balls_faced as f64 * 100.0,
        })
        .filter(|row| row.strike_rate >= filter.min_strike_rate)
        .collect();

    rows.sort_by(|a, b| by_total_then_name(a.strike_rate, &a.batter, b.strike_rate, &b.batter));

    debug!(
        "Strike rate >= {} in {}: {} batters",
        filter.min_strike_rate,
        season,
        rows.len()
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enriched(season: &str, deliveries: Vec<Delivery>) -> Vec<EnrichedDelivery> {
        deliveries
            .into_iter()
            .map(|delivery| EnrichedDelivery {
                season: Season::from(season),
                delivery,
            })
            .collect()
    }

    /// `balls` deliveries to `batter` totalling `runs`
    fn innings(batter: &str, balls: u32, runs: u32) -> Vec<Delivery> {
        (0..balls)
            .map(|i| {
                let share = runs / balls + u32::from(i < runs % balls);
                Delivery::new(1, batter, "Bowler", share)
            })
            .collect()
    }

    #[test]
    fn test_top_run_scorers_overall_ignores_season() {
        let deliveries = vec![
            Delivery::new(1, "Kohli", "X", 6),
            Delivery::new(2, "Kohli", "X", 4),
            Delivery::new(3, "Raina", "Y", 6),
            Delivery::new(3, "Dhoni", "Y", 1),
        ];
        let top = top_run_scorers_overall(&deliveries, 2);
        assert_eq!(
            top,
            vec![
                PlayerTotal { player: "Kohli".to_string(), total: 10 },
                PlayerTotal { player: "Raina".to_string(), total: 6 },
            ]
        );
    }

    #[test]
    fn test_top_batsman_of_season() {
        let mut rows = enriched("2016", innings("Kohli", 4, 20));
        rows.extend(enriched("2016", innings("Warner", 4, 12)));
        rows.extend(enriched("2015", innings("Warner", 4, 40)));

        let season = Season::from("2016");
        let top = top_batsman_of_season(&rows, &season).unwrap();
        assert_eq!(top.player, "Kohli");
        assert_eq!(top.total, 20);

        let top5 = top_n_batsmen_of_season(&rows, &season, 5);
        assert_eq!(top5.len(), 2);
        assert_eq!(top5[1].total, 12);
    }

    #[test]
    fn test_top_batsman_empty_season() {
        let rows = enriched("2016", innings("Kohli", 4, 20));
        assert_eq!(top_batsman_of_season(&rows, &Season::from("2030")), None);
        assert!(top_n_batsmen_of_season(&rows, &Season::from("2030"), 5).is_empty());
    }

    #[test]
    fn test_top_batsman_with_zero_runs_still_reported() {
        let rows = enriched("2016", innings("Tailender", 3, 0));
        let top = top_batsman_of_season(&rows, &Season::from("2016")).unwrap();
        assert_eq!(top.total, 0);
    }

    #[test]
    fn test_strike_rate_threshold_and_minimum_balls() {
        let mut rows = enriched("2019", innings("Russell", 15, 25));
        rows.extend(enriched("2019", innings("Cameo", 5, 20)));
        rows.extend(enriched("2019", innings("Anchor", 20, 20)));

        let table = high_strike_rate_batsmen(&rows, &Season::from("2019"), StrikeRateFilter::default());
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].batter, "Russell");
        assert_eq!(table[0].runs, 25);
        assert_eq!(table[0].balls_faced, 15);
        assert!((table[0].strike_rate - 166.666).abs() < 0.01);
    }

    #[test]
    fn test_strike_rate_sorted_descending() {
        let mut rows = enriched("2019", innings("A", 10, 14));
        rows.extend(enriched("2019", innings("B", 10, 20)));
        rows.extend(enriched("2019", innings("C", 12, 18)));

        let table = high_strike_rate_batsmen(
            &rows,
            &Season::from("2019"),
            StrikeRateFilter::with_min_strike_rate(100.0),
        );
        let names: Vec<&str> = table.iter().map(|r| r.batter.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert!(table.windows(2).all(|w| w[0].strike_rate > w[1].strike_rate));
    }

    #[test]
    fn test_strike_rate_boundary_inclusive() {
        let rows = enriched("2019", innings("Exact", 10, 13));
        let table = high_strike_rate_batsmen(&rows, &Season::from("2019"), StrikeRateFilter::default());
        assert_eq!(table.len(), 1);
        assert!((table[0].strike_rate - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_strike_rate_empty_season() {
        let rows = enriched("2019", innings("A", 10, 30));
        assert!(high_strike_rate_batsmen(&rows, &Season::from("2008"), StrikeRateFilter::default()).is_empty());
    }
}
