//! Property tests over generated datasets

use crate::*;
use cricket_data::{Dataset, Delivery, DismissalKind, Match, Season};
use proptest::prelude::*;
use std::sync::Arc;

const SEASONS: [&str; 3] = ["2008", "2009", "2010/11"];
const TEAMS: [&str; 4] = ["CSK", "MI", "KKR", "RCB"];
const PLAYERS: [&str; 6] = ["Dhoni", "Gayle", "Kohli", "Malinga", "Narine", "Rohit"];

fn dismissal() -> impl Strategy<Value = Option<DismissalKind>> {
    prop_oneof![
        4 => Just(None),
        1 => Just(Some(DismissalKind::Bowled)),
        1 => Just(Some(DismissalKind::Caught)),
        1 => Just(Some(DismissalKind::RunOut)),
        1 => Just(Some(DismissalKind::RetiredHurt)),
        1 => Just(Some(DismissalKind::ObstructingTheField)),
    ]
}

fn matches() -> impl Strategy<Value = Vec<Match>> {
    prop::collection::vec((0..SEASONS.len(), prop::option::of(0..TEAMS.len()), 0..TEAMS.len()), 0..20)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(id, (season, winner, toss))| {
                    Match::new(id as u64, SEASONS[season], winner.map(|w| TEAMS[w]), TEAMS[toss])
                })
                .collect()
        })
}

fn deliveries() -> impl Strategy<Value = Vec<Delivery>> {
    prop::collection::vec(
        (0u64..25, 0..PLAYERS.len(), 0..PLAYERS.len(), 0u32..7, dismissal()),
        0..200,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(match_id, batter, bowler, runs, kind)| {
                let delivery = Delivery::new(match_id, PLAYERS[batter], PLAYERS[bowler], runs);
                match kind {
                    Some(kind) => delivery.with_dismissal(kind),
                    None => delivery,
                }
            })
            .collect()
    })
}

fn engine() -> impl Strategy<Value = StatsEngine> {
    (matches(), deliveries()).prop_map(|(m, d)| {
        let dataset = Dataset::from_records(m, d).expect("generated ids are unique");
        StatsEngine::new(Arc::new(dataset))
    })
}

fn season() -> impl Strategy<Value = Season> {
    prop_oneof![
        (0..SEASONS.len()).prop_map(|i| Season::from(SEASONS[i])),
        Just(Season::from("1999")),
    ]
}

proptest! {
    #[test]
    fn count_matches_equals_season_rows(engine in engine(), season in season()) {
        let expected = engine.dataset().matches().iter().filter(|m| m.season == season).count();
        prop_assert_eq!(engine.count_matches(&season), expected);
    }

    #[test]
    fn win_sum_bounded_by_match_count(engine in engine(), season in season()) {
        let wins = engine.win_counts(&season);
        let count = engine.count_matches(&season) as u64;
        prop_assert!(wins.total_wins() <= count);
        prop_assert_eq!(wins.total_wins() + wins.no_result as u64, count);
    }

    #[test]
    fn toss_percentage_in_range(engine in engine(), season in season()) {
        let pct = engine.toss_advantage_percentage(&season);
        prop_assert!((0.0..=100.0).contains(&pct));
        if engine.count_matches(&season) == 0 {
            prop_assert_eq!(pct, 0.0);
        }
    }

    #[test]
    fn top_batsman_matches_ranking_head(engine in engine(), season in season()) {
        let has_rows = engine.dataset().enriched().iter().any(|e| e.season == season);
        let top = engine.top_batsman(&season);
        prop_assert_eq!(top.is_some(), has_rows);

        if let Some(top) = top {
            let all = engine.top_batsmen(&season, usize::MAX);
            let max = all.iter().map(|p| p.total).max().unwrap_or(0);
            prop_assert_eq!(top.total, max);
            prop_assert_eq!(&all[0], &top);
        }
    }

    #[test]
    fn bowler_counts_exclude_non_bowler_dismissals(engine in engine(), season in season()) {
        for bowler in engine.top_bowlers(&season, usize::MAX) {
            let credited = engine
                .dataset()
                .enriched()
                .iter()
                .filter(|e| e.season == season && e.delivery.bowler == bowler.player)
                .filter(|e| {
                    matches!(
                        e.delivery.dismissal_kind,
                        Some(DismissalKind::Bowled) | Some(DismissalKind::Caught)
                    )
                })
                .count() as u64;
            prop_assert_eq!(bowler.total, credited);
        }
    }

    #[test]
    fn strike_rate_rows_sorted_and_thresholded(
        engine in engine(),
        season in season(),
        threshold in (20u32..=40).prop_map(|s| f64::from(s * 5)),
    ) {
        let filter = StrikeRateFilter::with_min_strike_rate(threshold);
        let rows = engine.high_strike_rate_batsmen(&season, filter);
        for row in &rows {
            prop_assert!(row.balls_faced >= 10);
            prop_assert!(row.strike_rate >= threshold);
        }
        prop_assert!(rows.windows(2).all(|w| w[0].strike_rate >= w[1].strike_rate));
    }

    #[test]
    fn queries_are_idempotent(engine in engine(), season in season()) {
        let options = ReportOptions::default();
        prop_assert_eq!(engine.report(&season, &options), engine.report(&season, &options));
    }
}
