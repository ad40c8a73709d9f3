//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, JeepneyRoute, Journey, JourneySegment, SegmentKind};

/// Request to plan a journey.
#[derive(Debug, Deserialize)]
pub struct PlanJourneyRequest {
    /// Where the rider is now
    pub origin: GeoPoint,

    /// Either `{"location": {"lat", "lng"}}` or `{"lat", "lng"}`
    pub destination: serde_json::Value,
}

/// Response from journey planning.
#[derive(Debug, Serialize)]
pub struct PlanJourneyResponse {
    /// `null` when no jeepney option exists
    pub journey: Option<JourneyResult>,
}

/// A planned journey.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    /// "external_transit", "local_single_ride" or "local_multi_ride"
    pub source: &'static str,

    /// Total distance in meters
    pub total_distance_m: f64,

    /// Total duration in seconds
    pub total_duration_secs: i64,

    /// Number of jeepney rides
    pub jeepney_count: usize,

    /// Number of transfers
    pub transfer_count: usize,

    /// Encoded overview polyline, when the directions provider gave one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyline: Option<String>,

    /// Segments in travel order
    pub segments: Vec<SegmentResult>,
}

impl JourneyResult {
    /// Convert a domain Journey to a JourneyResult.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            source: journey.source().as_str(),
            total_distance_m: journey.total_distance_m(),
            total_duration_secs: journey.total_duration().num_seconds(),
            jeepney_count: journey.jeepney_count(),
            transfer_count: journey.transfer_count(),
            polyline: journey.polyline().map(str::to_string),
            segments: journey
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
        }
    }
}

/// One segment of a planned journey.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// "jeepney" or "walking"
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// Route code, for jeepney segments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub from: GeoPoint,
    pub to: GeoPoint,

    /// Distance in meters
    pub distance_m: f64,

    /// Duration in seconds
    pub duration_secs: i64,

    pub description: String,
}

impl SegmentResult {
    fn from_segment(segment: &JourneySegment) -> Self {
        let kind = match segment.kind {
            SegmentKind::Jeepney => "jeepney",
            SegmentKind::Walking => "walking",
        };

        Self {
            kind,
            code: segment.code.clone(),
            from: segment.from,
            to: segment.to,
            distance_m: segment.distance_m,
            duration_secs: segment.duration.num_seconds(),
            description: segment.description.clone(),
        }
    }
}

/// A route in the catalog listing.
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: String,
    pub stop_count: usize,
}

impl RouteSummary {
    pub fn from_route(route: &JeepneyRoute) -> Self {
        Self {
            code: route.code().to_string(),
            name: route.name().map(str::to_string),
            color: route.color().to_string(),
            stop_count: route.stop_count(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JourneySource;
    use chrono::Duration;
    use serde_json::json;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng)
    }

    fn make_journey() -> Journey {
        let segments = vec![
            JourneySegment::walk(
                p(10.30, 123.88),
                p(10.301, 123.881),
                150.0,
                Duration::seconds(107),
                "Walk to jeepney 04B stop",
            ),
            JourneySegment::jeepney(
                "04B",
                p(10.301, 123.881),
                p(10.32, 123.90),
                2800.0,
                Duration::seconds(509),
                "Ride jeepney 04B",
            ),
            JourneySegment::walk(
                p(10.32, 123.90),
                p(10.3201, 123.9001),
                15.0,
                Duration::seconds(11),
                "Walk to destination",
            ),
        ];
        Journey::new(segments, JourneySource::LocalSingleRide).unwrap()
    }

    #[test]
    fn journey_result_from_journey() {
        let result = JourneyResult::from_journey(&make_journey());

        assert_eq!(result.source, "local_single_ride");
        assert_eq!(result.segments.len(), 3);
        assert_eq!(result.total_duration_secs, 627);
        assert_eq!(result.jeepney_count, 1);
        assert_eq!(result.transfer_count, 0);
        assert!((result.total_distance_m - 2965.0).abs() < 1e-9);
    }

    #[test]
    fn segment_serializes_type_and_code() {
        let result = JourneyResult::from_journey(&make_journey());
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["segments"][0]["type"], "walking");
        assert!(value["segments"][0].get("code").is_none());
        assert_eq!(value["segments"][1]["type"], "jeepney");
        assert_eq!(value["segments"][1]["code"], "04B");
        assert_eq!(value["segments"][1]["from"], json!({"lat": 10.301, "lng": 123.881}));
        assert!(value.get("polyline").is_none());
    }

    #[test]
    fn empty_response_serializes_null_journey() {
        let value = serde_json::to_value(PlanJourneyResponse { journey: None }).unwrap();
        assert_eq!(value, json!({"journey": null}));
    }

    #[test]
    fn plan_request_accepts_either_destination_shape() {
        let nested: PlanJourneyRequest = serde_json::from_value(json!({
            "origin": {"lat": 10.30, "lng": 123.88},
            "destination": {"name": "IT Park", "location": {"lat": 10.33, "lng": 123.90}}
        }))
        .unwrap();
        assert!(nested.destination.get("location").is_some());

        let flat: PlanJourneyRequest = serde_json::from_value(json!({
            "origin": {"lat": 10.30, "lon": 123.88},
            "destination": {"lat": 10.33, "lng": 123.90}
        }))
        .unwrap();
        assert_eq!(flat.origin, p(10.30, 123.88));
    }

    #[test]
    fn route_summary_from_route() {
        let route = JeepneyRoute::new("04B", "red", vec![p(10.30, 123.88), p(10.32, 123.90)])
            .unwrap()
            .with_name("Lahug - Carbon");

        let summary = RouteSummary::from_route(&route);

        assert_eq!(summary.code, "04B");
        assert_eq!(summary.name.as_deref(), Some("Lahug - Carbon"));
        assert_eq!(summary.stop_count, 2);
    }
}
