//! Relief request records as handed over by the persistence layer.
//!
//! Upstream storage is stringly-typed in places (coordinates arrive as text
//! or numbers, timestamps as RFC 3339 strings), so deserialization is
//! deliberately tolerant: a field that cannot be parsed becomes absent
//! rather than failing the whole record.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Kind of aid being requested. Unknown values parse as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AidType {
    Food,
    Medicine,
    Shelter,
    Clothing,
    Transportation,
    #[default]
    #[serde(other)]
    Other,
}

/// Request priority as entered by the requester or an admin.
///
/// Intake forms only offer low/medium/high; `Urgent` is set by triage staff.
/// Unknown values parse as `Medium`, the scorer's default weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    High,
    Urgent,
    #[default]
    #[serde(other)]
    Medium,
}

/// Fulfillment status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Fulfilled,
    Resolved,
    #[default]
    #[serde(other)]
    Open,
}

/// A latitude/longitude pair in degrees.
///
/// Validity (-90..90, -180..180) is the caller's contract; out-of-range
/// values are not rejected but distances computed from them are meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One relief request, as stored by the coordination app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AidRequest {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub aid_type: AidType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
    /// Free-text address or landmark; geocoding happens upstream.
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    /// Legacy records carry `timestamp` instead of `created_at`.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub route_order: Option<u32>,
}

impl AidRequest {
    /// Routable position, if the record carries finite coordinates.
    ///
    /// A request without valid coordinates is ineligible for routing and is
    /// skipped by every sequencing path.
    pub fn coordinates(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Some(GeoPoint::new(lat, lng))
            }
            _ => None,
        }
    }

    /// Creation instant, falling back to the legacy `timestamp` field.
    pub fn created_instant(&self) -> Option<DateTime<Utc>> {
        self.created_at.or(self.timestamp)
    }
}

/// Accepts a number or numeric string; anything else (including non-finite
/// values) becomes `None`.
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let parsed = match raw {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|value| value.is_finite()))
}

/// Accepts an RFC 3339 string or unix epoch milliseconds; unparseable
/// values become `None`.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(text)) => DateTime::parse_from_rfc3339(text.trim())
            .ok()
            .map(|parsed| parsed.with_timezone(&Utc)),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> AidRequest {
        serde_json::from_value(value).expect("record should deserialize")
    }

    #[test]
    fn parses_full_record_with_string_coordinates() {
        let request = parse(json!({
            "id": "req-1",
            "name": "A. Farmer",
            "contact": "555-0100",
            "aid_type": "medicine",
            "priority": "high",
            "description": "insulin",
            "location": "4th and Main",
            "latitude": "36.17",
            "longitude": "-115.14",
            "created_at": "2026-08-01T08:30:00Z",
            "status": "in-progress",
            "assigned_to": "vol-9",
            "route_order": 2
        }));

        assert_eq!(request.aid_type, AidType::Medicine);
        assert_eq!(request.priority, Priority::High);
        assert_eq!(request.status, RequestStatus::InProgress);
        assert_eq!(request.latitude, Some(36.17));
        assert_eq!(request.longitude, Some(-115.14));
        assert!(request.created_at.is_some());
        assert_eq!(request.route_order, Some(2));
        assert!(request.coordinates().is_some());
    }

    #[test]
    fn minimal_record_fills_defaults() {
        let request = parse(json!({ "id": "req-2" }));

        assert_eq!(request.priority, Priority::Medium);
        assert_eq!(request.aid_type, AidType::Other);
        assert_eq!(request.status, RequestStatus::Open);
        assert!(request.coordinates().is_none());
        assert!(request.created_instant().is_none());
    }

    #[test]
    fn unknown_enum_values_fall_back() {
        let request = parse(json!({
            "id": "req-3",
            "aid_type": "water",
            "priority": "asap",
            "status": "archived"
        }));

        assert_eq!(request.aid_type, AidType::Other);
        assert_eq!(request.priority, Priority::Medium);
        assert_eq!(request.status, RequestStatus::Open);
    }

    #[test]
    fn junk_coordinates_become_absent() {
        let request = parse(json!({
            "id": "req-4",
            "latitude": "not-a-number",
            "longitude": true
        }));

        assert_eq!(request.latitude, None);
        assert_eq!(request.longitude, None);
        assert!(request.coordinates().is_none());
    }

    #[test]
    fn coordinates_require_both_axes() {
        let request = parse(json!({ "id": "req-5", "latitude": 36.1 }));
        assert!(request.coordinates().is_none());
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let request = AidRequest {
            latitude: Some(f64::NAN),
            longitude: Some(10.0),
            ..parse(json!({ "id": "req-6" }))
        };
        assert!(request.coordinates().is_none());
    }

    #[test]
    fn bad_timestamp_becomes_absent() {
        let request = parse(json!({ "id": "req-7", "created_at": "last tuesday" }));
        assert!(request.created_at.is_none());
    }

    #[test]
    fn epoch_millis_timestamp_is_accepted() {
        let request = parse(json!({ "id": "req-8", "created_at": 1_754_000_000_000_i64 }));
        assert!(request.created_at.is_some());
    }

    #[test]
    fn created_instant_falls_back_to_timestamp_field() {
        let request = parse(json!({ "id": "req-9", "timestamp": "2026-08-01T00:00:00Z" }));
        assert!(request.created_at.is_none());
        assert!(request.created_instant().is_some());
    }
}
