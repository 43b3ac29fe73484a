//! Google Directions adapter (waypoint-optimization mode).
//!
//! Requests a round trip with origin = destination = the start location and
//! `optimize:true` waypoints. Unlike OpenRouteService, the provider reorders
//! the stops itself and reports per-leg totals, so the plan follows the
//! returned `waypoint_order` and sums across all legs.

use std::time::Duration;

use serde::Deserialize;

use crate::config::PlannerConfig;
use crate::error::ProviderError;
use crate::planner::RoutePlan;
use crate::request::{AidRequest, GeoPoint};
use crate::solver::PlannedStop;
use crate::traits::RouteStrategy;

#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for GoogleMapsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl GoogleMapsConfig {
    pub fn from_planner(config: &PlannerConfig) -> Self {
        Self {
            base_url: config.google_maps_url.clone(),
            api_key: config.google_maps_key.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    config: GoogleMapsConfig,
    client: reqwest::blocking::Client,
}

impl GoogleMapsClient {
    pub fn new(config: GoogleMapsConfig) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<GoogleRoute>,
}

#[derive(Debug, Deserialize)]
struct GoogleRoute {
    /// Indices into the submitted waypoint list, in visit order.
    #[serde(default)]
    waypoint_order: Vec<usize>,
    #[serde(default)]
    legs: Vec<RouteLeg>,
}

#[derive(Debug, Deserialize)]
struct RouteLeg {
    distance: LegValue,
    duration: LegValue,
}

#[derive(Debug, Deserialize)]
struct LegValue {
    /// Meters for distance, seconds for duration.
    value: f64,
}

impl RouteStrategy for GoogleMapsClient {
    fn name(&self) -> &'static str {
        "googlemaps"
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

        let origin = format!("{},{}", start.lat, start.lng);
        let waypoints = std::iter::once("optimize:true".to_string())
            .chain(valid.iter().map(|(_, coords)| format!("{},{}", coords.lat, coords.lng)))
            .collect::<Vec<_>>()
            .join("|");

        let url = format!("{}/maps/api/directions/json", self.config.base_url);
        let response: DirectionsResponse = self
            .client
            .get(url)
            .query(&[
                ("origin", origin.as_str()),
                ("destination", origin.as_str()),
                ("waypoints", waypoints.as_str()),
                ("key", api_key),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        if response.status != "OK" {
            return Err(ProviderError::Status(response.status));
        }

        let route = response.routes.into_iter().next().ok_or_else(|| {
            ProviderError::MalformedResponse("no routes in directions response".to_string())
        })?;

        let mut stops = Vec::with_capacity(route.waypoint_order.len());
        for index in route.waypoint_order {
            let (request, _) = valid.get(index).ok_or_else(|| {
                ProviderError::MalformedResponse(format!("waypoint index {index} out of range"))
            })?;
            stops.push(PlannedStop {
                request: (*request).clone(),
                distance_from_previous_km: None,
            });
        }

        let distance_km: f64 = route.legs.iter().map(|leg| leg.distance.value).sum::<f64>() / 1000.0;
        let duration_secs: f64 = route.legs.iter().map(|leg| leg.duration.value).sum();

        Ok(RoutePlan {
            stops,
            distance_km,
            duration_secs,
            geometry: None,
        })
    }
}
