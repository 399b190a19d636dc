//! Grouped Totals and Deterministic Ranking

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Aggregate for one player (runs scored or wickets taken)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerTotal {
    pub player: String,
    pub total: u64,
}

/// Running totals keyed by name
#[derive(Debug, Default)]
pub(crate) struct Tally<'a> {
    totals: HashMap<&'a str, u64>,
}

impl<'a> Tally<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the total for `name`
    pub(crate) fn add(&mut self, name: &'a str, amount: u64) {
        *self.totals.entry(name).or_insert(0) += amount;
    }

    /// Totals sorted descending, names ascending on ties, truncated to `n`
    pub(crate) fn top(self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.totals.into_iter().collect();
        ranked.sort_by(|a, b| by_total_then_name(a.1, a.0, b.1, b.0));
        ranked
            .into_iter()
            .take(n)
            .map(|(name, total)| (name.to_string(), total))
            .collect()
    }

    pub(crate) fn into_players(self, n: usize) -> Vec<PlayerTotal> {
        self.top(n)
            .into_iter()
            .map(|(player, total)| PlayerTotal { player, total })
            .collect()
    }
}

/// Ordering for rankings: larger total first, then name ascending
pub(crate) fn by_total_then_name<T: PartialOrd>(
    a_total: T,
    a_name: &str,
    b_total: T,
    b_name: &str,
) -> Ordering {
    b_total
        .partial_cmp(&a_total)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a_name.cmp(b_name))
}
