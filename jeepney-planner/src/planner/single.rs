//! Single-ride matching: the best route to ride end to end.

use tracing::trace;

use crate::domain::{
    DomainError, GeoPoint, JeepneyRoute, Journey, JourneySegment, JourneySource,
};

use super::config::PlannerConfig;
use super::nearest::{StopProjection, path_distance, project};

/// A scored direct ride on one route.
#[derive(Debug, Clone)]
pub struct SingleRideCandidate<'a> {
    pub route: &'a JeepneyRoute,
    /// Origin projected onto the route (boarding stop).
    pub from: StopProjection,
    /// Destination projected onto the route (alighting stop).
    pub to: StopProjection,
    /// Along-route distance between boarding and alighting stops (m).
    pub ride_distance_m: f64,
    /// Walk to the boarding stop plus walk from the alighting stop (m).
    pub walk_distance_m: f64,
    /// `ride_distance_m + walk_distance_m`, the selection score.
    pub total_distance_m: f64,
}

impl SingleRideCandidate<'_> {
    /// Build the walk / ride / walk journey for this candidate.
    pub fn to_journey(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        config: &PlannerConfig,
    ) -> Result<Journey, DomainError> {
        let code = self.route.code();
        let board = self.route.stops()[self.from.stop_index];
        let alight = self.route.stops()[self.to.stop_index];

        let segments = vec![
            JourneySegment::walk(
                origin,
                board,
                self.from.distance_m,
                config.walk_time(self.from.distance_m),
                format!("Walk to jeepney {code} stop"),
            ),
            JourneySegment::jeepney(
                code,
                board,
                alight,
                self.ride_distance_m,
                config.ride_time(self.ride_distance_m),
                ride_description(self.route),
            ),
            JourneySegment::walk(
                alight,
                destination,
                self.to.distance_m,
                config.walk_time(self.to.distance_m),
                "Walk to destination",
            ),
        ];

        Journey::new(segments, JourneySource::LocalSingleRide)
    }
}

/// "Ride jeepney 04L", with the line name appended when known.
pub(super) fn ride_description(route: &JeepneyRoute) -> String {
    match route.name() {
        Some(name) => format!("Ride jeepney {} ({})", route.code(), name),
        None => format!("Ride jeepney {}", route.code()),
    }
}

/// Find the route minimizing walk + ride distance between two points.
///
/// The first minimal route in catalog order wins ties. Returns `None` for
/// an empty catalog.
pub fn find_single_ride<'a>(
    routes: &'a [JeepneyRoute],
    origin: &GeoPoint,
    destination: &GeoPoint,
) -> Option<SingleRideCandidate<'a>> {
    let mut best: Option<SingleRideCandidate<'a>> = None;

    for (idx, route) in routes.iter().enumerate() {
        let (Some(from), Some(to)) = (project(origin, route, idx), project(destination, route, idx))
        else {
            continue;
        };

        let ride_distance_m = path_distance(route, from.stop_index, to.stop_index);
        let walk_distance_m = from.distance_m + to.distance_m;
        let total_distance_m = ride_distance_m + walk_distance_m;

        trace!(
            route = route.code(),
            total_distance_m, "single-ride candidate"
        );

        if best
            .as_ref()
            .is_some_and(|b| b.total_distance_m <= total_distance_m)
        {
            continue;
        }

        best = Some(SingleRideCandidate {
            route,
            from,
            to,
            ride_distance_m,
            walk_distance_m,
            total_distance_m,
        });
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng)
    }

    fn route(code: &str, stops: &[(f64, f64)]) -> JeepneyRoute {
        JeepneyRoute::new(code, "red", stops.iter().map(|&(a, b)| p(a, b)).collect()).unwrap()
    }

    #[test]
    fn selects_nearest_boarding_and_alighting_stops() {
        let routes = vec![route("01A", &[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)])];

        let c = find_single_ride(&routes, &p(0.0, 0.1), &p(0.0, 1.9)).unwrap();

        assert_eq!(c.from.stop_index, 0);
        assert_eq!(c.to.stop_index, 2);
        assert_eq!(c.route.code(), "01A");
    }

    #[test]
    fn empty_catalog_has_no_candidate() {
        assert!(find_single_ride(&[], &p(0.0, 0.0), &p(0.0, 1.0)).is_none());
    }

    #[test]
    fn total_is_ride_plus_walks() {
        let routes = vec![route("01A", &[(10.30, 123.88), (10.31, 123.89), (10.32, 123.90)])];
        let c = find_single_ride(&routes, &p(10.3005, 123.88), &p(10.3195, 123.90)).unwrap();

        assert!((c.total_distance_m - (c.ride_distance_m + c.walk_distance_m)).abs() < 1e-9);
        assert!((c.walk_distance_m - (c.from.distance_m + c.to.distance_m)).abs() < 1e-9);
    }

    #[test]
    fn picks_lowest_total_route() {
        let routes = vec![
            route("FAR", &[(10.50, 124.10), (10.52, 124.12)]),
            route("NEAR", &[(10.30, 123.88), (10.32, 123.90)]),
        ];

        let c = find_single_ride(&routes, &p(10.30, 123.88), &p(10.32, 123.90)).unwrap();

        assert_eq!(c.route.code(), "NEAR");
        assert_eq!(c.from.route_index, 1);
    }

    #[test]
    fn tie_goes_to_first_route() {
        let stops = [(10.30, 123.88), (10.32, 123.90)];
        let routes = vec![route("FIRST", &stops), route("SECOND", &stops)];

        let c = find_single_ride(&routes, &p(10.30, 123.88), &p(10.32, 123.90)).unwrap();

        assert_eq!(c.route.code(), "FIRST");
    }

    #[test]
    fn journey_is_walk_ride_walk() {
        let routes = vec![route("04L", &[(10.30, 123.88), (10.32, 123.90)]).with_name("Lahug")];
        let origin = p(10.3001, 123.88);
        let destination = p(10.3201, 123.90);
        let c = find_single_ride(&routes, &origin, &destination).unwrap();

        let journey = c
            .to_journey(origin, destination, &PlannerConfig::default())
            .unwrap();

        let segs = journey.segments();
        assert_eq!(segs.len(), 3);
        assert!(segs[0].is_walk());
        assert!(segs[1].is_jeepney());
        assert!(segs[2].is_walk());
        assert_eq!(segs[1].code.as_deref(), Some("04L"));
        assert_eq!(segs[1].description, "Ride jeepney 04L (Lahug)");
        assert_eq!(journey.source(), JourneySource::LocalSingleRide);
        assert!((journey.total_distance_m() - c.total_distance_m).abs() < 1e-6);
        assert_eq!(journey.origin(), origin);
        assert_eq!(journey.destination(), destination);
    }
}
