//! Transfer point search between two routes.

use crate::domain::JeepneyRoute;

/// Where to change from one route to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferPoint {
    /// Catalog index of the route being left.
    pub route1: usize,
    /// Stop on the first route where the rider alights.
    pub route1_stop_index: usize,
    /// Catalog index of the route being joined.
    pub route2: usize,
    /// Stop on the second route where the rider boards.
    pub route2_stop_index: usize,
    /// Walk between the two stops (m).
    pub distance_m: f64,
}

/// Find the closest pair of stops between two routes.
///
/// Checks every pair, so cost is `|stops1| * |stops2|`. Ties go to the
/// lowest first-route index, then the lowest second-route index.
pub fn find_transfer_point(
    route1: &JeepneyRoute,
    route1_index: usize,
    route2: &JeepneyRoute,
    route2_index: usize,
) -> Option<TransferPoint> {
    let mut best: Option<TransferPoint> = None;

    for (i, a) in route1.stops().iter().enumerate() {
        for (j, b) in route2.stops().iter().enumerate() {
            let d = a.distance_to(b);
            if best.is_some_and(|t| t.distance_m <= d) {
                continue;
            }
            best = Some(TransferPoint {
                route1: route1_index,
                route1_stop_index: i,
                route2: route2_index,
                route2_stop_index: j,
                distance_m: d,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;

    fn route(code: &str, stops: &[(f64, f64)]) -> JeepneyRoute {
        JeepneyRoute::new(
            code,
            "red",
            stops.iter().map(|&(a, b)| GeoPoint::new(a, b)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn shared_stop_is_zero_walk() {
        let r1 = route("R1", &[(10.30, 123.88), (10.32, 123.90)]);
        let r2 = route("R2", &[(10.32, 123.90), (10.34, 123.92)]);

        let t = find_transfer_point(&r1, 0, &r2, 1).unwrap();

        assert_eq!(t.route1, 0);
        assert_eq!(t.route2, 1);
        assert_eq!(t.route1_stop_index, 1);
        assert_eq!(t.route2_stop_index, 0);
        assert!(t.distance_m < 1e-6);
    }

    #[test]
    fn picks_closest_pair() {
        let r1 = route("R1", &[(10.30, 123.88), (10.31, 123.89), (10.35, 123.95)]);
        let r2 = route("R2", &[(10.40, 124.00), (10.311, 123.891)]);

        let t = find_transfer_point(&r1, 0, &r2, 1).unwrap();

        assert_eq!(t.route1_stop_index, 1);
        assert_eq!(t.route2_stop_index, 1);
        assert!(t.distance_m > 0.0);
        assert!(t.distance_m < 200.0);
    }

    #[test]
    fn ties_prefer_lowest_indices() {
        let r1 = route("R1", &[(10.30, 123.88), (10.30, 123.88)]);
        let r2 = route("R2", &[(10.30, 123.88), (10.30, 123.88)]);

        let t = find_transfer_point(&r1, 0, &r2, 1).unwrap();

        assert_eq!((t.route1_stop_index, t.route2_stop_index), (0, 0));
    }
}
