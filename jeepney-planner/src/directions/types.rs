//! Directions API response DTOs.
//!
//! These types map directly to the Google Directions JSON response for
//! `mode=transit`. They use `Option` and `#[serde(default)]` liberally
//! because the API omits fields rather than sending null values.

use serde::Deserialize;

use crate::domain::GeoPoint;

/// Top-level response from `/directions/json`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// "OK", "ZERO_RESULTS", "REQUEST_DENIED", ...
    pub status: String,

    /// Human-readable detail for non-OK statuses.
    pub error_message: Option<String>,

    /// Alternative routes, best first.
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

/// One alternative route.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    /// Short textual summary.
    pub summary: Option<String>,

    /// One leg per origin/waypoint/destination pair. Transit requests
    /// have no waypoints, so this is a single leg in practice.
    #[serde(default)]
    pub legs: Vec<RouteLeg>,

    /// Encoded polyline of the whole route.
    pub overview_polyline: Option<EncodedPolyline>,
}

/// A leg between two requested locations.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteLeg {
    /// Ordered steps (walks and transit rides).
    #[serde(default)]
    pub steps: Vec<Step>,

    pub distance: Option<TextValue>,

    pub duration: Option<TextValue>,

    pub start_address: Option<String>,

    pub end_address: Option<String>,
}

/// A single step: one walk or one transit ride.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// "WALKING", "TRANSIT", "DRIVING", ...
    pub travel_mode: String,

    pub start_location: GeoPoint,

    pub end_location: GeoPoint,

    /// Distance in meters (`value`) with display text.
    pub distance: Option<TextValue>,

    /// Duration in seconds (`value`) with display text.
    pub duration: Option<TextValue>,

    /// Instruction text. May contain HTML markup.
    pub html_instructions: Option<String>,

    /// Present on transit steps only.
    pub transit_details: Option<TransitDetails>,
}

/// Transit-specific information for a step.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitDetails {
    pub line: Option<TransitLine>,

    /// Direction shown on the vehicle.
    pub headsign: Option<String>,

    pub num_stops: Option<u32>,
}

/// The transit line a step rides.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitLine {
    /// Full line name (e.g., "MRT Line 3").
    pub name: Option<String>,

    /// Short code (e.g., "12C").
    pub short_name: Option<String>,

    pub color: Option<String>,

    pub vehicle: Option<Vehicle>,
}

/// Vehicle category of a transit line.
#[derive(Debug, Clone, Deserialize)]
pub struct Vehicle {
    /// "BUS", "SUBWAY", "SHARE_TAXI", ...
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,

    pub name: Option<String>,
}

/// A numeric value paired with display text.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: Option<String>,
    pub value: f64,
}

/// Encoded polyline.
#[derive(Debug, Clone, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}
