//! Per-client Rate Limiting
//!
//! GCRA limiter keyed on the peer IP via tower_governor. The server must be
//! started with `into_make_service_with_connect_info::<SocketAddr>()` so the
//! peer address is available to the key extractor.

use governor::middleware::StateInformationMiddleware;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;

/// Governor config with X-RateLimit-* headers enabled
pub type DashboardGovernorConfig =
    tower_governor::governor::GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Seconds to replenish one request
    pub per_second: u64,
    /// Requests allowed at once
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // One page render fans out to about eight requests
        Self {
            per_second: 1,
            burst_size: 20,
        }
    }
}

/// Build the governor config, `None` if either setting is zero
pub fn create_governor_config(config: &RateLimitConfig) -> Option<Arc<DashboardGovernorConfig>> {
    GovernorConfigBuilder::default()
        .per_second(config.per_second)
        .burst_size(config.burst_size)
        .use_headers()
        .finish()
        .map(Arc::new)
}
