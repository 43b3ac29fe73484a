//! Real Las Vegas area relief sites for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Not every suite uses every site.
#![allow(dead_code)]

use relief_planner::request::GeoPoint;

/// A named site with coordinates.
#[derive(Debug, Clone)]
pub struct Site {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Site {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Volunteer staging area, a good start location.
pub const DISTRIBUTION_HUB: Site =
    Site::new("Downtown distribution hub", 36.1699, -115.1398);

// ============================================================================
// Shelters and missions (delivery destinations)
// ============================================================================

pub const SHELTERS: &[Site] = &[
    Site::new("Las Vegas Rescue Mission", 36.1785, -115.1534),
    Site::new("The Shade Tree", 36.1820, -115.1306),
    Site::new("Catholic Charities of Southern Nevada", 36.1856, -115.1344),
    Site::new("Shannon West Homeless Youth Center", 36.1569, -115.1221),
    Site::new("SafeNest Henderson", 36.0397, -114.9819),
];

// ============================================================================
// Clinics and pharmacies (medicine runs)
// ============================================================================

pub const CLINICS: &[Site] = &[
    Site::new("UMC Emergency", 36.1599, -115.1653),
    Site::new("Volunteers in Medicine Clinic", 36.1067, -115.2062),
    Site::new("Huntridge Family Clinic", 36.1581, -115.1313),
    Site::new("Henderson Community Clinic", 36.0306, -115.0247),
];

// ============================================================================
// Food banks and pantries
// ============================================================================

pub const FOOD_BANKS: &[Site] = &[
    Site::new("Three Square Food Bank", 36.2296, -115.0866),
    Site::new("City Impact Center Pantry", 36.1931, -115.1604),
    Site::new("Vegas Roots Community Garden", 36.1882, -115.1766),
];
