//! Nearest-stop projection and along-route distance.
//!
//! These are the geometric primitives the matchers are built from. Both
//! work on a route's recorded stop sequence only; there is no road
//! network or interpolation between stops.

use crate::domain::{GeoPoint, JeepneyRoute};

/// A query point projected onto a route's stop sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopProjection {
    /// Index of the route in the catalog snapshot.
    pub route_index: usize,
    /// Index of the nearest stop on that route.
    pub stop_index: usize,
    /// Straight-line distance from the query point to that stop (m).
    pub distance_m: f64,
}

/// Find the stop in `stops` nearest to `point`.
///
/// Ties go to the lowest index. Returns `None` only for an empty slice.
pub fn nearest_stop(point: &GeoPoint, stops: &[GeoPoint]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, stop) in stops.iter().enumerate() {
        let d = point.distance_to(stop);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((idx, d)),
        }
    }

    best
}

/// Project `point` onto the route at `route_index`.
pub fn project(point: &GeoPoint, route: &JeepneyRoute, route_index: usize) -> Option<StopProjection> {
    let (stop_index, distance_m) = nearest_stop(point, route.stops())?;
    Some(StopProjection {
        route_index,
        stop_index,
        distance_m,
    })
}

/// Along-route distance between two stop indices, in meters.
///
/// Sums the consecutive stop-to-stop lengths spanning the range. Direction
/// is ignored: `path_distance(r, i, j) == path_distance(r, j, i)`.
///
/// Both indices must be valid stop indices on `route`, as returned by
/// [`project`].
pub fn path_distance(route: &JeepneyRoute, from: usize, to: usize) -> f64 {
    let stops = route.stops();
    debug_assert!(
        from < stops.len() && to < stops.len(),
        "stop index out of range: {from}, {to} on route {} with {} stops",
        route.code(),
        stops.len()
    );

    let lo = from.min(to);
    let hi = from.max(to);

    stops[lo..=hi]
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng)
    }

    fn straight_route() -> JeepneyRoute {
        JeepneyRoute::new("01A", "red", vec![p(0.0, 0.0), p(0.0, 1.0), p(0.0, 2.0)]).unwrap()
    }

    #[test]
    fn nearest_picks_closest() {
        let stops = [p(0.0, 0.0), p(0.0, 1.0), p(0.0, 2.0)];
        let (idx, d) = nearest_stop(&p(0.0, 1.9), &stops).unwrap();
        assert_eq!(idx, 2);
        assert!(d < 12_000.0);
    }

    #[test]
    fn nearest_tie_goes_to_lowest_index() {
        let stops = [p(0.0, 1.0), p(0.0, 0.0), p(0.0, 1.0)];
        let (idx, _) = nearest_stop(&p(0.0, 1.0), &stops).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn nearest_on_empty_is_none() {
        assert!(nearest_stop(&p(0.0, 0.0), &[]).is_none());
    }

    #[test]
    fn project_records_route_index() {
        let route = straight_route();
        let proj = project(&p(0.0, 0.1), &route, 7).unwrap();
        assert_eq!(proj.route_index, 7);
        assert_eq!(proj.stop_index, 0);
    }

    #[test]
    fn path_distance_sums_segments() {
        let route = straight_route();
        let one_hop = p(0.0, 0.0).distance_to(&p(0.0, 1.0));
        let total = path_distance(&route, 0, 2);
        assert!((total - 2.0 * one_hop).abs() < 1e-6);
    }

    #[test]
    fn path_distance_same_index_is_zero() {
        let route = straight_route();
        assert_eq!(path_distance(&route, 1, 1), 0.0);
    }

    #[test]
    fn path_distance_is_direction_agnostic() {
        let route = straight_route();
        assert_eq!(path_distance(&route, 0, 2), path_distance(&route, 2, 0));
    }

    #[test]
    fn path_distance_last_stop_is_in_range() {
        let route = straight_route();
        let last = route.stop_count() - 1;
        assert_eq!(path_distance(&route, last, 0), path_distance(&route, 0, 2));
    }

    #[test]
    #[should_panic(expected = "stop index out of range")]
    #[cfg(debug_assertions)]
    fn path_distance_rejects_out_of_range_index() {
        let route = straight_route();
        path_distance(&route, 0, 99);
    }
}
