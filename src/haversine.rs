//! Great-circle distance math.
//!
//! The single distance primitive shared by the nearest-neighbor sequencer
//! and the radius pre-filter. Straight-line distance ignores roads; the
//! external directions providers exist for callers who need road distances.

use crate::request::GeoPoint;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
///
/// Uses the atan2 form, which stays stable for coincident (→ 0) and
/// near-antipodal points. Non-finite input coordinates yield NaN; callers
/// must filter NaN distances before comparing them.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
