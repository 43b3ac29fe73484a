//! Shared test fixtures.
//!
//! A builder for aid requests with sensible defaults, plus real Las Vegas
//! relief sites for realistic coordinates.

pub mod relief_sites;

#[allow(unused_imports)]
pub use relief_sites::*;

use chrono::{DateTime, Utc};
use relief_planner::request::{AidRequest, AidType, Priority, RequestStatus};

/// Builder for test requests with sensible defaults.
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    request: AidRequest,
}

#[allow(dead_code)]
impl RequestBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            request: AidRequest {
                id: id.to_string(),
                name: format!("Requester {id}"),
                contact: String::new(),
                aid_type: AidType::Other,
                priority: Priority::Medium,
                description: String::new(),
                location: String::new(),
                latitude: None,
                longitude: None,
                created_at: None,
                timestamp: None,
                status: RequestStatus::Pending,
                assigned_to: None,
                route_order: None,
            },
        }
    }

    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.request.latitude = Some(lat);
        self.request.longitude = Some(lng);
        self
    }

    pub fn site(self, site: &relief_sites::Site) -> Self {
        self.at(site.lat, site.lng)
    }

    pub fn aid_type(mut self, aid_type: AidType) -> Self {
        self.request.aid_type = aid_type;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.request.priority = priority;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.request.created_at = Some(at);
        self
    }

    pub fn build(self) -> AidRequest {
        self.request
    }

    /// Builds a record with a latitude but no longitude (half-geocoded).
    pub fn build_without_longitude(mut self) -> AidRequest {
        self.request.longitude = None;
        self.request
    }
}
