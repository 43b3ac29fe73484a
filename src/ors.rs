//! OpenRouteService directions adapter.
//!
//! Sends one round-trip directions request (start → each valid stop in
//! insertion order → start) and normalizes the summary into a [`RoutePlan`].
//! The provider keeps the submitted waypoint order, so stops map back onto
//! the valid requests positionally, skipping the synthetic start and end
//! waypoints.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PlannerConfig;
use crate::error::ProviderError;
use crate::geometry::RouteGeometry;
use crate::planner::RoutePlan;
use crate::request::{AidRequest, GeoPoint};
use crate::solver::PlannedStop;
use crate::traits::RouteStrategy;

#[derive(Debug, Clone)]
pub struct OrsConfig {
    pub base_url: String,
    /// Routing profile, e.g. "driving-car".
    pub profile: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openrouteservice.org".to_string(),
            profile: "driving-car".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl OrsConfig {
    pub fn from_planner(config: &PlannerConfig) -> Self {
        Self {
            base_url: config.open_route_service_url.clone(),
            api_key: config.open_route_service_key.clone(),
            timeout_secs: config.timeout_secs,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

#[derive(Debug, Serialize)]
struct DirectionsRequest {
    /// `[lng, lat]` pairs, round trip.
    coordinates: Vec<[f64; 2]>,
    format: &'static str,
    geometry: bool,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<OrsRoute>,
}

#[derive(Debug, Deserialize)]
struct OrsRoute {
    summary: OrsSummary,
    #[serde(default)]
    geometry: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct OrsSummary {
    /// Meters.
    distance: f64,
    /// Seconds.
    duration: f64,
}

impl RouteStrategy for OrsClient {
    fn name(&self) -> &'static str {
        "openrouteservice"
    }

    fn plan(&self, requests: &[AidRequest], start: GeoPoint) -> Result<RoutePlan, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ProviderError::MissingCredential)?;

        let valid: Vec<(&AidRequest, GeoPoint)> = requests
            .iter()
            .filter_map(|request| request.coordinates().map(|coords| (request, coords)))
            .collect();

        let mut coordinates = Vec::with_capacity(valid.len() + 2);
        coordinates.push([start.lng, start.lat]);
        coordinates.extend(valid.iter().map(|(_, coords)| [coords.lng, coords.lat]));
        coordinates.push([start.lng, start.lat]);

        let url = format!("{}/v2/directions/{}", self.config.base_url, self.config.profile);
        let body = DirectionsRequest {
            coordinates,
            format: "json",
            geometry: true,
        };

        let response: DirectionsResponse = self
            .client
            .post(url)
            .header(AUTHORIZATION, api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        let route = response.routes.into_iter().next().ok_or_else(|| {
            ProviderError::MalformedResponse("no routes in directions response".to_string())
        })?;

        let stops = valid
            .into_iter()
            .map(|(request, _)| PlannedStop {
                request: request.clone(),
                distance_from_previous_km: None,
            })
            .collect();

        Ok(RoutePlan {
            stops,
            distance_km: route.summary.distance / 1000.0,
            duration_secs: route.summary.duration,
            geometry: route.geometry.map(RouteGeometry::new),
        })
    }
}
