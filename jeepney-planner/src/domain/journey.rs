//! Journey types.
//!
//! A `Journey` is the only value that leaves a planning call: an ordered
//! list of jeepney rides and walks from origin to destination.

use chrono::Duration;

use super::{DomainError, GeoPoint};

/// What a segment of a journey is travelled by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Jeepney,
    Walking,
}

/// One ride or walk within a journey.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneySegment {
    /// Jeepney ride or walk
    pub kind: SegmentKind,
    /// Route code for jeepney segments
    pub code: Option<String>,
    /// Where the segment starts
    pub from: GeoPoint,
    /// Where the segment ends
    pub to: GeoPoint,
    /// Distance covered in meters
    pub distance_m: f64,
    /// Time taken
    pub duration: Duration,
    /// Human-readable instruction
    pub description: String,
}

impl JourneySegment {
    /// Creates a walking segment.
    pub fn walk(
        from: GeoPoint,
        to: GeoPoint,
        distance_m: f64,
        duration: Duration,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: SegmentKind::Walking,
            code: None,
            from,
            to,
            distance_m,
            duration,
            description: description.into(),
        }
    }

    /// Creates a jeepney segment on the given route code.
    pub fn jeepney(
        code: impl Into<String>,
        from: GeoPoint,
        to: GeoPoint,
        distance_m: f64,
        duration: Duration,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: SegmentKind::Jeepney,
            code: Some(code.into()),
            from,
            to,
            distance_m,
            duration,
            description: description.into(),
        }
    }

    /// Returns true if this is a jeepney segment.
    pub fn is_jeepney(&self) -> bool {
        self.kind == SegmentKind::Jeepney
    }

    /// Returns true if this is a walking segment.
    pub fn is_walk(&self) -> bool {
        self.kind == SegmentKind::Walking
    }
}

/// Where a journey came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneySource {
    /// Extracted from the external directions provider's transit itinerary
    ExternalTransit,
    /// Computed locally: one continuous ride
    LocalSingleRide,
    /// Computed locally: two rides with one transfer
    LocalMultiRide,
}

impl JourneySource {
    /// Wire name of the source.
    pub fn as_str(&self) -> &'static str {
        match self {
            JourneySource::ExternalTransit => "external_transit",
            JourneySource::LocalSingleRide => "local_single_ride",
            JourneySource::LocalMultiRide => "local_multi_ride",
        }
    }
}

/// A complete journey from origin to destination.
///
/// # Invariants
///
/// - At least one segment
/// - `total_distance_m` and `total_duration` are the sums over segments
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    segments: Vec<JourneySegment>,
    total_distance_m: f64,
    total_duration: Duration,
    source: JourneySource,
    polyline: Option<String>,
}

impl Journey {
    /// Constructs a journey, computing its totals.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `segments` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Duration;
    /// use jeepney_planner::domain::{GeoPoint, Journey, JourneySegment, JourneySource};
    ///
    /// let a = GeoPoint::new(10.30, 123.88);
    /// let b = GeoPoint::new(10.32, 123.90);
    /// let ride = JourneySegment::jeepney("04L", a, b, 3100.0, Duration::minutes(9), "Ride jeepney 04L");
    ///
    /// let journey = Journey::new(vec![ride], JourneySource::LocalSingleRide).unwrap();
    /// assert_eq!(journey.jeepney_count(), 1);
    /// assert_eq!(journey.total_duration(), Duration::minutes(9));
    /// ```
    pub fn new(segments: Vec<JourneySegment>, source: JourneySource) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyJourney);
        }

        let total_distance_m = segments.iter().map(|s| s.distance_m).sum();
        let total_duration = segments
            .iter()
            .fold(Duration::zero(), |acc, s| acc + s.duration);

        Ok(Journey {
            segments,
            total_distance_m,
            total_duration,
            source,
            polyline: None,
        })
    }

    /// Attach an encoded overview polyline.
    pub fn with_polyline(mut self, polyline: impl Into<String>) -> Self {
        self.polyline = Some(polyline.into());
        self
    }

    /// Returns all segments in travel order.
    pub fn segments(&self) -> &[JourneySegment] {
        &self.segments
    }

    /// Total distance in meters.
    pub fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    pub fn source(&self) -> JourneySource {
        self.source
    }

    /// Encoded overview polyline, when the provider supplied one.
    pub fn polyline(&self) -> Option<&str> {
        self.polyline.as_deref()
    }

    /// Returns the number of jeepney rides.
    pub fn jeepney_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_jeepney()).count()
    }

    /// Returns the number of transfers between jeepneys.
    pub fn transfer_count(&self) -> usize {
        self.jeepney_count().saturating_sub(1)
    }

    /// Total walking distance in meters.
    pub fn walk_distance_m(&self) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.is_walk())
            .map(|s| s.distance_m)
            .sum()
    }

    /// Where the journey starts.
    pub fn origin(&self) -> GeoPoint {
        self.segments[0].from
    }

    /// Where the journey ends.
    pub fn destination(&self) -> GeoPoint {
        self.segments[self.segments.len() - 1].to
    }
}
