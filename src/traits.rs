//! Core seams for the route planner.
//!
//! Strategies are interchangeable route producers (local heuristic or
//! external provider); the dispatcher picks one and owns the fallback
//! policy. Failure reporting is injected so callers can assert on it
//! instead of scraping process logs.

use tracing::warn;

use crate::error::ProviderError;
use crate::planner::RoutePlan;
use crate::request::{AidRequest, GeoPoint};

/// A route computation strategy.
pub trait RouteStrategy {
    /// Short name used in fallback reports.
    fn name(&self) -> &'static str;

    /// Order `requests` into a visit plan starting from `start`.
    ///
    /// An `Err` tells the dispatcher to answer with the local heuristic;
    /// implementations never need to fall back themselves.
    fn plan(&self, requests: &[AidRequest], start: GeoPoint) -> Result<RoutePlan, ProviderError>;
}

/// Receives provider-failure notifications when the planner falls back.
pub trait FallbackObserver {
    fn provider_failed(&self, provider: &'static str, error: &ProviderError);
}

/// Default observer: reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FallbackObserver for TracingObserver {
    fn provider_failed(&self, provider: &'static str, error: &ProviderError) {
        warn!(provider, %error, "route provider failed, falling back to nearest-neighbor");
    }
}
