//! Normalization of caller-supplied locations.
//!
//! Callers hand over destinations in two shapes: a place object with a
//! nested `location`, or bare coordinates. Both become a [`GeoPoint`]
//! here, before anything else happens.

use serde_json::Value;

use crate::domain::GeoPoint;

use super::plan::PlanError;

/// Extract a point from `{"location": {"lat", "lng"}}` or `{"lat", "lng"}`.
///
/// Coordinates may be JSON numbers or numeric strings; `lon` is accepted
/// for `lng`. The nested shape wins when both are present.
///
/// # Examples
///
/// ```
/// use jeepney_planner::planner::normalize_location;
/// use serde_json::json;
///
/// let nested = normalize_location(&json!({"location": {"lat": 10.3, "lng": 123.9}})).unwrap();
/// let flat = normalize_location(&json!({"lat": "10.3", "lon": 123.9})).unwrap();
/// assert_eq!(nested, flat);
///
/// assert!(normalize_location(&json!({"name": "Ayala"})).is_err());
/// ```
pub fn normalize_location(value: &Value) -> Result<GeoPoint, PlanError> {
    let coords = match value.get("location") {
        Some(nested) if nested.is_object() => nested,
        _ => value,
    };

    let lat = coordinate(coords, &["lat"]);
    let lng = coordinate(coords, &["lng", "lon"]);

    let (Some(lat), Some(lng)) = (lat, lng) else {
        return Err(PlanError::InvalidInput(
            "expected {location: {lat, lng}} or {lat, lng}".to_string(),
        ));
    };

    GeoPoint::try_new(lat, lng).map_err(|e| PlanError::InvalidInput(e.to_string()))
}

fn coordinate(obj: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| match obj.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
