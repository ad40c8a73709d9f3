//! Provider-neutral transit itinerary.
//!
//! The gateway converts whatever the directions API returns into these
//! types; the planner only ever sees an itinerary, never the wire DTOs.

use chrono::Duration;

use crate::domain::GeoPoint;

/// How a leg is travelled, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelMode {
    Walking,
    Transit,
    /// Any other mode (driving, bicycling, ...), kept verbatim.
    Other(String),
}

impl TravelMode {
    /// Parse a provider mode string, case-insensitively.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "WALKING" => TravelMode::Walking,
            "TRANSIT" => TravelMode::Transit,
            other => TravelMode::Other(other.to_string()),
        }
    }
}

/// Line metadata for a transit leg. Every field is optional because
/// providers fill them in inconsistently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInfo {
    /// Full line name (e.g., "MRT Line 3").
    pub name: Option<String>,
    /// Short code (e.g., "12C").
    pub short_name: Option<String>,
    /// Vehicle category (e.g., "BUS", "SUBWAY").
    pub vehicle_type: Option<String>,
}

/// One leg of an external itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitLeg {
    pub travel_mode: TravelMode,
    /// Present on transit legs.
    pub line: Option<LineInfo>,
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub distance_m: f64,
    pub duration: Duration,
    /// Plain-text instruction, if the provider gave one.
    pub instructions: Option<String>,
}

/// An ordered multi-leg itinerary from the directions gateway.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitItinerary {
    pub legs: Vec<TransitLeg>,
    /// Encoded overview polyline.
    pub polyline: Option<String>,
}
