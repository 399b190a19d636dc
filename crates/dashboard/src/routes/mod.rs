//! Dashboard Routes

pub mod batting;
pub mod bowling;
pub mod dashboard;
pub mod matches;
pub mod seasons;
