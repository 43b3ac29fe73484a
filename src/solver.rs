//! Greedy route construction over valid-coordinate requests.

use serde::Serialize;

use crate::haversine::haversine_km;
use crate::request::{AidRequest, GeoPoint};

/// A request placed in a route.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedStop {
    pub request: AidRequest,
    /// Leg distance from the previous position, when computed locally.
    /// External providers report only route totals, so their stops carry
    /// `None` here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_from_previous_km: Option<f64>,
}

/// Orders requests by repeatedly visiting the nearest unvisited stop.
///
/// Starts at `start` and greedily extends the route one cheapest leg at a
/// time. Requests without valid coordinates are silently dropped. Ties break
/// by input order (the linear scan keeps the first minimum), so results are
/// deterministic for a fixed input. O(n²); an empty or all-invalid input
/// yields an empty route.
pub fn nearest_neighbor(requests: &[AidRequest], start: GeoPoint) -> Vec<PlannedStop> {
    let valid: Vec<(&AidRequest, GeoPoint)> = requests
        .iter()
        .filter_map(|request| request.coordinates().map(|coords| (request, coords)))
        .collect();

    let mut visited = vec![false; valid.len()];
    let mut current = start;
    let mut route = Vec::with_capacity(valid.len());

    for _ in 0..valid.len() {
        let mut nearest: Option<(usize, f64)> = None;
        for (index, (_, coords)) in valid.iter().enumerate() {
            if visited[index] {
                continue;
            }
            let distance = haversine_km(current, *coords);
            if distance.is_nan() {
                continue;
            }
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }

        let Some((index, distance)) = nearest else {
            break;
        };
        visited[index] = true;
        let (request, coords) = valid[index];
        route.push(PlannedStop {
            request: request.clone(),
            distance_from_previous_km: Some(distance),
        });
        current = coords;
    }

    route
}

/// Requests with valid coordinates within `max_km` of `center`, input order
/// preserved. Callers use this to pre-filter candidates before sequencing.
pub fn within_radius(requests: &[AidRequest], center: GeoPoint, max_km: f64) -> Vec<AidRequest> {
    requests
        .iter()
        .filter(|request| {
            request
                .coordinates()
                .is_some_and(|coords| haversine_km(center, coords) <= max_km)
        })
        .cloned()
        .collect()
}
