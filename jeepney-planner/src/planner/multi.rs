//! One-transfer matching: the best pair of routes with a change between them.
//!
//! Every ordered pair of distinct routes is tried, which is quadratic in
//! catalog size (and each pair runs a quadratic transfer search). Fine for
//! a city's worth of jeepney lines, not for a national network.

use tracing::trace;

use crate::domain::{
    DomainError, GeoPoint, JeepneyRoute, Journey, JourneySegment, JourneySource,
};

use super::config::PlannerConfig;
use super::nearest::{StopProjection, path_distance, project};
use super::single::ride_description;
use super::transfer::{TransferPoint, find_transfer_point};

/// Distances making up a one-transfer journey, in travel order (m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegDistances {
    pub walk_to_first: f64,
    pub first_ride: f64,
    pub transfer_walk: f64,
    pub second_ride: f64,
    pub walk_from_second: f64,
}

impl LegDistances {
    pub fn total(&self) -> f64 {
        self.walk_to_first
            + self.first_ride
            + self.transfer_walk
            + self.second_ride
            + self.walk_from_second
    }
}

/// A scored two-route journey with one transfer.
#[derive(Debug, Clone)]
pub struct MultiRideCandidate<'a> {
    pub route1: &'a JeepneyRoute,
    pub route2: &'a JeepneyRoute,
    /// Origin projected onto the first route.
    pub from: StopProjection,
    /// Destination projected onto the second route.
    pub to: StopProjection,
    pub transfer: TransferPoint,
    pub legs: LegDistances,
    pub total_distance_m: f64,
}

impl MultiRideCandidate<'_> {
    /// Build the walk / ride / transfer walk / ride / walk journey.
    pub fn to_journey(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        config: &PlannerConfig,
    ) -> Result<Journey, DomainError> {
        let code1 = self.route1.code();
        let code2 = self.route2.code();

        let board1 = self.route1.stops()[self.from.stop_index];
        let alight1 = self.route1.stops()[self.transfer.route1_stop_index];
        let board2 = self.route2.stops()[self.transfer.route2_stop_index];
        let alight2 = self.route2.stops()[self.to.stop_index];

        let legs = &self.legs;
        let segments = vec![
            JourneySegment::walk(
                origin,
                board1,
                legs.walk_to_first,
                config.walk_time(legs.walk_to_first),
                format!("Walk to jeepney {code1} stop"),
            ),
            JourneySegment::jeepney(
                code1,
                board1,
                alight1,
                legs.first_ride,
                config.ride_time(legs.first_ride),
                ride_description(self.route1),
            ),
            JourneySegment::walk(
                alight1,
                board2,
                legs.transfer_walk,
                config.walk_time(legs.transfer_walk),
                format!("Transfer to jeepney {code2}"),
            ),
            JourneySegment::jeepney(
                code2,
                board2,
                alight2,
                legs.second_ride,
                config.ride_time(legs.second_ride),
                ride_description(self.route2),
            ),
            JourneySegment::walk(
                alight2,
                destination,
                legs.walk_from_second,
                config.walk_time(legs.walk_from_second),
                "Walk to destination",
            ),
        ];

        Journey::new(segments, JourneySource::LocalMultiRide)
    }
}

/// Find the pair of distinct routes minimizing total one-transfer distance.
///
/// A route is never paired with itself. The first minimal pair in
/// `(route1, route2)` iteration order wins ties. Returns `None` when the
/// catalog has fewer than two routes.
pub fn find_multi_ride<'a>(
    routes: &'a [JeepneyRoute],
    origin: &GeoPoint,
    destination: &GeoPoint,
) -> Option<MultiRideCandidate<'a>> {
    let mut best: Option<MultiRideCandidate<'a>> = None;

    for (i, route1) in routes.iter().enumerate() {
        let Some(from) = project(origin, route1, i) else {
            continue;
        };

        for (j, route2) in routes.iter().enumerate() {
            if i == j {
                continue;
            }

            let Some(to) = project(destination, route2, j) else {
                continue;
            };

            let Some(transfer) = find_transfer_point(route1, i, route2, j) else {
                continue;
            };

            let legs = LegDistances {
                walk_to_first: from.distance_m,
                first_ride: path_distance(route1, from.stop_index, transfer.route1_stop_index),
                transfer_walk: transfer.distance_m,
                second_ride: path_distance(route2, transfer.route2_stop_index, to.stop_index),
                walk_from_second: to.distance_m,
            };
            let total_distance_m = legs.total();

            trace!(
                route1 = route1.code(),
                route2 = route2.code(),
                total_distance_m,
                "multi-ride candidate"
            );

            if best
                .as_ref()
                .is_some_and(|b| b.total_distance_m <= total_distance_m)
            {
                continue;
            }

            best = Some(MultiRideCandidate {
                route1,
                route2,
                from,
                to,
                transfer,
                legs,
                total_distance_m,
            });
        }
    }

    best
}
