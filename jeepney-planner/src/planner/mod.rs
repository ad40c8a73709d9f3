//! Jeepney journey planner.
//!
//! This module answers: "how do I get from here to there by jeepney?"
//!
//! The planner first asks an external directions provider for a transit
//! itinerary and keeps it if any leg looks like a jeepney. Otherwise it
//! matches the trip against the local route catalog: the best single
//! route, or the best pair of routes with one transfer, scored by total
//! walk + ride distance.

mod classify;
mod config;
mod input;
mod multi;
mod nearest;
mod plan;
mod single;
mod transfer;


pub use classify::{classify_itinerary, is_jeepney_line};
pub use config::PlannerConfig;
pub use input::normalize_location;
pub use multi::{LegDistances, MultiRideCandidate, find_multi_ride};
pub use nearest::{StopProjection, nearest_stop, path_distance, project};
pub use plan::{DirectionsGateway, JourneyPlanner, PlanError};
pub use single::{SingleRideCandidate, find_single_ride};
pub use transfer::{TransferPoint, find_transfer_point};
