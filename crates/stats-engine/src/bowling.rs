//! Bowling Queries

use crate::batting::season_deliveries;
use crate::ranking::{PlayerTotal, Tally};
use cricket_data::{EnrichedDelivery, Season};

/// Season's leading wicket taker, `None` when no bowler took a wicket
pub fn top_bowler_of_season(enriched: &[EnrichedDelivery], season: &Season) -> Option<PlayerTotal> {
    top_n_bowlers_of_season(enriched, season, 1).into_iter().next()
}

/// Bowlers ranked by wickets credited to them in `season`
pub fn top_n_bowlers_of_season(
    enriched: &[EnrichedDelivery],
    season: &Season,
    n: usize,
) -> Vec<PlayerTotal> {
    let mut tally = Tally::new();
    let credited = season_deliveries(enriched, season)
        .filter(|d| d.is_bowler_wicket() && d.player_dismissed.is_some());
    for d in credited {
        tally.add(&d.bowler, 1);
    }
    tally.into_players(n)
}
