//! Immutable Dataset Context

use crate::record::{Delivery, Match, Season};
use crate::DataError;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Delivery joined with the season of its match
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedDelivery {
    pub season: Season,
    pub delivery: Delivery,
}

/// The two base tables plus the season-enriched join
///
/// Built once, never mutated afterwards. Share it across queries behind an
/// `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    matches: Vec<Match>,
    deliveries: Vec<Delivery>,
    enriched: Vec<EnrichedDelivery>,
    /// Deliveries whose match id has no match row
    dropped: usize,
}

impl Dataset {
    /// Load both tables from CSV files with header rows
    pub fn load(
        matches_path: impl AsRef<Path>,
        deliveries_path: impl AsRef<Path>,
    ) -> Result<Self, DataError> {
        let matches_file = open(matches_path.as_ref())?;
        let deliveries_file = open(deliveries_path.as_ref())?;

        info!(
            "Loading dataset from {} and {}",
            matches_path.as_ref().display(),
            deliveries_path.as_ref().display()
        );
        Self::from_readers(matches_file, deliveries_file)
    }

    /// Parse both tables from CSV readers
    pub fn from_readers<M: Read, D: Read>(matches: M, deliveries: D) -> Result<Self, DataError> {
        let matches = read_table::<Match, _>("matches", matches)?;
        let deliveries = read_table::<Delivery, _>("deliveries", deliveries)?;
        Self::from_records(matches, deliveries)
    }

    /// Build the dataset from already-parsed records
    pub fn from_records(matches: Vec<Match>, deliveries: Vec<Delivery>) -> Result<Self, DataError> {
        let mut season_by_id: HashMap<u64, &Season> = HashMap::with_capacity(matches.len());
        for m in &matches {
            if season_by_id.insert(m.id, &m.season).is_some() {
                return Err(DataError::DuplicateMatchId(m.id));
            }
        }

        let enriched: Vec<EnrichedDelivery> = deliveries
            .iter()
            .filter_map(|d| {
                season_by_id.get(&d.match_id).map(|season| EnrichedDelivery {
                    season: (*season).clone(),
                    delivery: d.clone(),
                })
            })
            .collect();

        let dropped = deliveries.len() - enriched.len();
        if dropped > 0 {
            warn!("Dropped {} deliveries with no matching match id", dropped);
        }

        info!(
            "Dataset ready: {} matches, {} deliveries ({} enriched)",
            matches.len(),
            deliveries.len(),
            enriched.len()
        );

        Ok(Self {
            matches,
            deliveries,
            enriched,
            dropped,
        })
    }

    /// All match rows
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// All delivery rows, including those without a match
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Deliveries carrying their match season
    pub fn enriched(&self) -> &[EnrichedDelivery] {
        &self.enriched
    }

    /// Distinct seasons, latest first
    pub fn seasons(&self) -> Vec<Season> {
        let distinct: BTreeSet<&Season> = self.matches.iter().map(|m| &m.season).collect();
        distinct.into_iter().rev().cloned().collect()
    }

    /// Most recent season, the default selection
    pub fn latest_season(&self) -> Option<Season> {
        self.matches.iter().map(|m| &m.season).max().cloned()
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.len()
    }

    pub fn enriched_count(&self) -> usize {
        self.enriched.len()
    }

    pub fn dropped_deliveries(&self) -> usize {
        self.dropped
    }
}

fn open(path: &Path) -> Result<File, DataError> {
    File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_table<T, R>(table: &'static str, reader: R) -> Result<Vec<T>, DataError>
where
    T: serde::de::DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in reader.deserialize::<T>() {
        rows.push(row.map_err(|source| DataError::Csv { table, source })?);
    }

    debug!("Parsed {} rows from {} table", rows.len(), table);
    Ok(rows)
}
