//! Route planning dispatcher.
//!
//! One entry point over three interchangeable strategies: the local
//! nearest-neighbor heuristic and the two external directions providers.
//! Provider failures of any kind degrade to the local heuristic, so the
//! caller always receives a usable plan.

use serde::Serialize;

use crate::config::PlannerConfig;
use crate::error::ProviderError;
use crate::geometry::RouteGeometry;
use crate::google::{GoogleMapsClient, GoogleMapsConfig};
use crate::ors::{OrsClient, OrsConfig};
use crate::request::{AidRequest, GeoPoint};
use crate::solver::{PlannedStop, nearest_neighbor};
use crate::traits::{FallbackObserver, RouteStrategy, TracingObserver};

/// Estimated travel seconds per kilometer for locally computed routes.
/// Crude placeholder (1 km ≈ 1 minute), not a traffic model.
const SECS_PER_KM: f64 = 60.0;

/// Route computation method requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteMethod {
    #[default]
    Nearest,
    OpenRouteService,
    GoogleMaps,
}

impl RouteMethod {
    /// Unrecognized names select the local heuristic.
    pub fn parse(name: &str) -> Self {
        match name {
            "openrouteservice" => Self::OpenRouteService,
            "googlemaps" => Self::GoogleMaps,
            _ => Self::Nearest,
        }
    }
}

impl From<&str> for RouteMethod {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// Ordered visit plan with travel estimates.
///
/// The same shape comes back from every method: ordered stops, total
/// distance in kilometers, total duration in seconds, and provider geometry
/// when one supplied it.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub stops: Vec<PlannedStop>,
    pub distance_km: f64,
    pub duration_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<RouteGeometry>,
}

/// Sequences with the greedy heuristic and prices the plan from its legs:
/// total distance is the sum of consecutive haversine legs (the first leg
/// leaves from `start`), duration is the fixed per-kilometer estimate.
pub fn nearest_plan(requests: &[AidRequest], start: GeoPoint) -> RoutePlan {
    let stops = nearest_neighbor(requests, start);
    let distance_km: f64 = stops
        .iter()
        .filter_map(|stop| stop.distance_from_previous_km)
        .sum();

    RoutePlan {
        distance_km,
        duration_secs: distance_km * SECS_PER_KM,
        stops,
        geometry: None,
    }
}

/// The local heuristic as a strategy. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborStrategy;

impl RouteStrategy for NearestNeighborStrategy {
    fn name(&self) -> &'static str {
        "nearest"
    }

    fn plan(&self, requests: &[AidRequest], start: GeoPoint) -> Result<RoutePlan, ProviderError> {
        Ok(nearest_plan(requests, start))
    }
}

/// Dispatches route requests to the configured strategies.
pub struct RoutePlanner {
    ors: OrsClient,
    google: GoogleMapsClient,
    observer: Box<dyn FallbackObserver>,
}

impl RoutePlanner {
    pub fn new(config: PlannerConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            ors: OrsClient::new(OrsConfig::from_planner(&config))?,
            google: GoogleMapsClient::new(GoogleMapsConfig::from_planner(&config))?,
            observer: Box::new(TracingObserver),
        })
    }

    /// Replaces the default tracing observer.
    pub fn with_observer(mut self, observer: impl FallbackObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Orders `requests` from `start` with the requested method.
    ///
    /// Never fails: provider problems are reported to the observer and
    /// answered with the local heuristic. One attempt per provider, no
    /// retries.
    pub fn plan_route(
        &self,
        requests: &[AidRequest],
        start: GeoPoint,
        method: RouteMethod,
    ) -> RoutePlan {
        match method {
            RouteMethod::Nearest => nearest_plan(requests, start),
            RouteMethod::OpenRouteService => self.plan_with_fallback(&self.ors, requests, start),
            RouteMethod::GoogleMaps => self.plan_with_fallback(&self.google, requests, start),
        }
    }

    fn plan_with_fallback(
        &self,
        strategy: &dyn RouteStrategy,
        requests: &[AidRequest],
        start: GeoPoint,
    ) -> RoutePlan {
        match strategy.plan(requests, start) {
            Ok(plan) => plan,
            Err(error) => {
                self.observer.provider_failed(strategy.name(), &error);
                nearest_plan(requests, start)
            }
        }
    }
}
