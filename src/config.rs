//! Planner configuration.
//!
//! Credentials and endpoints are injected as a value; the planning core
//! never reads ambient process state. `from_env` exists for the application
//! boundary, where missing credentials are a normal, logged condition.

use std::env;

use tracing::info;

pub const OPENROUTESERVICE_KEY_VAR: &str = "OPENROUTESERVICE_API_KEY";
pub const GOOGLE_MAPS_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// OpenRouteService credential; absent means that strategy falls back.
    pub open_route_service_key: Option<String>,
    /// Google Directions credential; absent means that strategy falls back.
    pub google_maps_key: Option<String>,
    pub open_route_service_url: String,
    pub google_maps_url: String,
    /// Per-call timeout for provider requests. A timed-out call is handled
    /// like any other provider failure.
    pub timeout_secs: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            open_route_service_key: None,
            google_maps_key: None,
            open_route_service_url: "https://api.openrouteservice.org".to_string(),
            google_maps_url: "https://maps.googleapis.com".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PlannerConfig {
    /// Reads provider credentials from the environment. Empty values count
    /// as absent.
    pub fn from_env() -> Self {
        Self {
            open_route_service_key: optional_key(OPENROUTESERVICE_KEY_VAR),
            google_maps_key: optional_key(GOOGLE_MAPS_KEY_VAR),
            ..Self::default()
        }
    }

    pub fn with_open_route_service_key(mut self, key: impl Into<String>) -> Self {
        self.open_route_service_key = Some(key.into());
        self
    }

    pub fn with_google_maps_key(mut self, key: impl Into<String>) -> Self {
        self.google_maps_key = Some(key.into());
        self
    }
}

fn optional_key(var: &str) -> Option<String> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            info!("{var} not set, routes fall back to the local heuristic");
            None
        }
    }
}
