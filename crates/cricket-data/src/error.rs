//! Data Loading Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading the base tables
#[derive(Debug, Error)]
pub enum DataError {
    /// Input file missing or unreadable
    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Row or header that does not fit the expected columns
    #[error("Malformed {table} table: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    /// Two match rows share an id
    #[error("Duplicate match id {0}")]
    DuplicateMatchId(u64),
}
