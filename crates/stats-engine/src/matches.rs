//! Match-Level Season Queries

use crate::ranking::Tally;
use cricket_data::{Match, Season};
use serde::Serialize;

/// Wins for one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamWins {
    pub team: String,
    pub wins: u64,
}

/// Win distribution for a set of matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WinCounts {
    /// Teams ranked by wins
    pub teams: Vec<TeamWins>,
    /// Matches with no winner
    pub no_result: usize,
}

impl WinCounts {
    /// Sum of wins over all teams
    pub fn total_wins(&self) -> u64 {
        self.teams.iter().map(|t| t.wins).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Matches played in `season`, in table order
pub fn filter_matches_by_season<'a>(matches: &'a [Match], season: &Season) -> Vec<&'a Match> {
    matches.iter().filter(|m| &m.season == season).collect()
}

pub fn count_matches(season_matches: &[&Match]) -> usize {
    season_matches.len()
}

/// Count wins per team; no-result matches go to [`WinCounts::no_result`]
pub fn win_counts(season_matches: &[&Match]) -> WinCounts {
    let mut tally = Tally::new();
    let mut no_result = 0;

    for m in season_matches {
        match m.winner.as_deref() {
            Some(team) => tally.add(team, 1),
            None => no_result += 1,
        }
    }

    let teams = tally
        .top(usize::MAX)
        .into_iter()
        .map(|(team, wins)| TeamWins { team, wins })
        .collect();

    WinCounts { teams, no_result }
}

/// Percentage of matches won by the toss winner, in [0, 100]
///
/// A season with no matches yields 0.0.
pub fn toss_advantage_percentage(season_matches: &[&Match]) -> f64 {
    if season_matches.is_empty() {
        return 0.0;
    }

    let converted = season_matches.iter().filter(|m| m.toss_winner_won()).count();
    converted as f64 / season_matches.len() as f64 * 100.0
}
