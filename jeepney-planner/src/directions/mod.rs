//! External directions gateway.
//!
//! This module provides an HTTP client for a third-party multi-modal
//! directions API (Google Directions, `mode=transit`), plus a mock for
//! offline use.
//!
//! Key characteristics of the provider:
//! - There is no jeepney category; jeepneys show up (if at all) as buses
//!   or as lines with short numeric codes
//! - Distances are meters and durations seconds, in `value` fields
//! - Failures come back as HTTP 200 with a non-OK `status`

mod client;
mod convert;
mod error;
mod itinerary;
mod mock;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::convert_response;
pub use error::DirectionsError;
pub use itinerary::{LineInfo, TransitItinerary, TransitLeg, TravelMode};
pub use mock::MockDirectionsClient;
pub use types::{DirectionsResponse, DirectionsRoute, RouteLeg, Step, TransitDetails, TransitLine};
