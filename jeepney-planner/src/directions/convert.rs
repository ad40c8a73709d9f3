//! Conversion from directions DTOs to an itinerary.

use chrono::Duration;
use tracing::debug;

use super::error::DirectionsError;
use super::itinerary::{LineInfo, TransitItinerary, TransitLeg, TravelMode};
use super::types::{DirectionsResponse, Step};

/// Convert a directions response into an itinerary.
///
/// Uses the first (best) route and flattens the steps of all its legs in
/// order. Non-OK statuses are mapped onto [`DirectionsError`].
pub fn convert_response(response: &DirectionsResponse) -> Result<TransitItinerary, DirectionsError> {
    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" | "NOT_FOUND" => return Err(DirectionsError::NoRoute),
        "REQUEST_DENIED" => return Err(DirectionsError::Unauthorized),
        "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => return Err(DirectionsError::RateLimited),
        other => {
            return Err(DirectionsError::ApiError {
                status: 200,
                message: match &response.error_message {
                    Some(msg) => format!("{other}: {msg}"),
                    None => other.to_string(),
                },
            });
        }
    }

    let route = response.routes.first().ok_or(DirectionsError::NoRoute)?;

    let legs: Vec<TransitLeg> = route
        .legs
        .iter()
        .flat_map(|leg| leg.steps.iter())
        .map(convert_step)
        .collect();

    debug!(
        steps = legs.len(),
        summary = route.summary.as_deref().unwrap_or(""),
        "converted directions route"
    );

    Ok(TransitItinerary {
        legs,
        polyline: route.overview_polyline.as_ref().map(|p| p.points.clone()),
    })
}

fn convert_step(step: &Step) -> TransitLeg {
    let line = step
        .transit_details
        .as_ref()
        .and_then(|t| t.line.as_ref())
        .map(|line| LineInfo {
            name: line.name.clone(),
            short_name: line.short_name.clone(),
            vehicle_type: line.vehicle.as_ref().and_then(|v| v.vehicle_type.clone()),
        });

    TransitLeg {
        travel_mode: TravelMode::parse(&step.travel_mode),
        line,
        start: step.start_location,
        end: step.end_location,
        distance_m: step.distance.as_ref().map_or(0.0, |d| d.value),
        duration: step
            .duration
            .as_ref()
            .map_or(Duration::zero(), |d| Duration::seconds(d.value.round() as i64)),
        instructions: step
            .html_instructions
            .as_deref()
            .map(strip_html)
            .filter(|s| !s.is_empty()),
    }
}

/// Remove markup tags and collapse whitespace.
fn strip_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
