//! Geographic point type and great-circle distance.

use std::fmt;

use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

use super::DomainError;

/// A WGS84 coordinate.
///
/// `GeoPoint` is a plain value: two points with the same latitude and
/// longitude are interchangeable.
///
/// # Examples
///
/// ```
/// use jeepney_planner::domain::GeoPoint;
///
/// let a = GeoPoint::new(10.2966, 123.9019);
/// assert!(a.distance_to(&a) < 1e-6);
///
/// // Latitude outside [-90, 90] is rejected
/// assert!(GeoPoint::try_new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    #[serde(alias = "lon")]
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a point without range checks.
    ///
    /// Use [`GeoPoint::try_new`] for coordinates from untrusted input.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a point, rejecting non-finite or out-of-range coordinates.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        let point = Self { lat, lng };
        point.validate()?;
        Ok(point)
    }

    /// Checks that both coordinates are finite and within WGS84 bounds.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(DomainError::InvalidCoordinate(format!(
                "latitude {} out of range",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(DomainError::InvalidCoordinate(format!(
                "longitude {} out of range",
                self.lng
            )));
        }
        Ok(())
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        Haversine.distance(self.to_point(), other.to_point())
    }

    fn to_point(self) -> Point<f64> {
        // geo uses (x, y) = (lng, lat)
        Point::new(self.lng, self.lat)
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = GeoPoint::new(10.3157, 123.8854);
        assert!(p.distance_to(&p) < 1e-6);
    }

    #[test]
    fn one_degree_latitude_is_about_111km() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let d = a.distance_to(&b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(10.30, 123.88);
        let b = GeoPoint::new(10.34, 123.92);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn try_new_accepts_valid() {
        assert!(GeoPoint::try_new(10.3, 123.9).is_ok());
        assert!(GeoPoint::try_new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(GeoPoint::try_new(90.5, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, -180.5).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn deserialize_accepts_lon_alias() {
        let p: GeoPoint = serde_json::from_str(r#"{"lat": 10.3, "lon": 123.9}"#).unwrap();
        assert_eq!(p, GeoPoint::new(10.3, 123.9));
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(10.5, 123.25).to_string(), "10.5,123.25");
    }
}
