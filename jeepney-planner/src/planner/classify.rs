//! Jeepney extraction from external transit itineraries.
//!
//! Directions providers have no jeepney category. Jeepneys appear as
//! buses, as lines with a short numeric code, or occasionally with
//! "jeepney" in the line name. [`is_jeepney_line`] accepts a line if any
//! of those signals is present. It is deliberately permissive, and is the
//! most fragile rule in the planner.

use tracing::debug;

use crate::directions::{LineInfo, TransitItinerary, TransitLeg, TravelMode};
use crate::domain::{Journey, JourneySegment, JourneySource, RouteCode};

/// Short codes at or below this length count as jeepney codes.
const MAX_SHORT_CODE_LEN: usize = 3;

/// Decide whether a transit line is a jeepney.
///
/// True if any of:
/// - the vehicle type is `BUS`
/// - the line name contains "jeepney"
/// - the short code or the line name is a [`RouteCode`] (e.g. "12C")
/// - the short code is at most three characters long
///
/// All comparisons ignore case and surrounding whitespace.
pub fn is_jeepney_line(line: &LineInfo) -> bool {
    let vehicle = line.vehicle_type.as_deref().map(str::trim);
    let name = line.name.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let short = line
        .short_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    vehicle.is_some_and(|v| v.eq_ignore_ascii_case("BUS"))
        || name.is_some_and(|n| n.to_lowercase().contains("jeepney"))
        || short.is_some_and(|s| RouteCode::parse(s).is_some())
        || name.is_some_and(|n| RouteCode::parse(n).is_some())
        || short.is_some_and(|s| s.chars().count() <= MAX_SHORT_CODE_LEN)
}

/// Label to show for a jeepney leg: short code, else line name.
fn line_label(line: &LineInfo) -> String {
    line.short_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| line.name.as_deref().map(str::trim).filter(|s| !s.is_empty()))
        .unwrap_or("jeepney")
        .to_string()
}

fn walk_segment(leg: &TransitLeg) -> JourneySegment {
    JourneySegment::walk(
        leg.start,
        leg.end,
        leg.distance_m,
        leg.duration,
        leg.instructions.clone().unwrap_or_else(|| "Walk".to_string()),
    )
}

fn jeepney_segment(leg: &TransitLeg, line: &LineInfo) -> JourneySegment {
    let code = line_label(line);
    let description = leg
        .instructions
        .clone()
        .unwrap_or_else(|| format!("Ride jeepney {code}"));

    JourneySegment::jeepney(
        code,
        leg.start,
        leg.end,
        leg.distance_m,
        leg.duration,
        description,
    )
}

/// Turn an external itinerary into a jeepney journey.
///
/// Walking legs are kept, jeepney legs become jeepney segments, and
/// everything else (trains, ferries, unclassifiable transit, other modes)
/// is dropped. Returns `None` if no leg is a jeepney: a transit answer
/// without a jeepney in it is not a jeepney journey.
pub fn classify_itinerary(itinerary: &TransitItinerary) -> Option<Journey> {
    let mut segments = Vec::with_capacity(itinerary.legs.len());
    let mut dropped = 0usize;

    for leg in &itinerary.legs {
        match (&leg.travel_mode, &leg.line) {
            (TravelMode::Walking, _) => segments.push(walk_segment(leg)),
            (TravelMode::Transit, Some(line)) if is_jeepney_line(line) => {
                segments.push(jeepney_segment(leg, line))
            }
            _ => dropped += 1,
        }
    }

    if !segments.iter().any(|s| s.is_jeepney()) {
        debug!(
            legs = itinerary.legs.len(),
            "itinerary has no jeepney legs, rejecting"
        );
        return None;
    }

    if dropped > 0 {
        debug!(dropped, "dropped non-jeepney legs from itinerary");
    }

    let journey = Journey::new(segments, JourneySource::ExternalTransit).ok()?;

    Some(match &itinerary.polyline {
        Some(polyline) => journey.with_polyline(polyline.clone()),
        None => journey,
    })
}
