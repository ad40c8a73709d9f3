//! Domain types for the jeepney journey planner.
//!
//! This module contains the core domain model types: coordinates, route
//! geometry and the journeys returned to callers. Types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod error;
mod journey;
mod point;
mod route;
mod route_code;

pub use error::DomainError;
pub use journey::{Journey, JourneySegment, JourneySource, SegmentKind};
pub use point::GeoPoint;
pub use route::JeepneyRoute;
pub use route_code::RouteCode;
