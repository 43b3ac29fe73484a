//! Opaque route geometry passed through from a directions provider.
//!
//! Providers return geometry in their own encodings (OpenRouteService sends
//! an encoded polyline string). The planner never interprets it; decoding
//! belongs to the display layer, not the routing core.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provider geometry as an opaque JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteGeometry(Value);

impl RouteGeometry {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}
