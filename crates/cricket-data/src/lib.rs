//! Cricket Data Layer
//!
//! Loads the match and ball-by-ball delivery tables and holds them, together
//! with the season-enriched join, as an immutable dataset.

mod dataset;
mod error;
mod record;

pub use dataset::{Dataset, EnrichedDelivery};
pub use error::DataError;
pub use record::{Delivery, DismissalKind, Match, Season};
