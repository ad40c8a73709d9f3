//! Jeepney route geometry.

use super::{DomainError, GeoPoint};

/// A fixed jeepney line with its ordered stop sequence.
///
/// The stop sequence approximates the physical path and is used both for
/// display and for nearest-point search. Order is significant: it is the
/// order in which the line was recorded.
///
/// # Invariants
///
/// - At least two stops
/// - Every stop is a valid coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct JeepneyRoute {
    code: String,
    name: Option<String>,
    color: String,
    stops: Vec<GeoPoint>,
}

impl JeepneyRoute {
    /// Creates a route, validating its geometry.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the route has fewer than two stops or any stop is
    /// not a valid coordinate.
    pub fn new(
        code: impl Into<String>,
        color: impl Into<String>,
        stops: Vec<GeoPoint>,
    ) -> Result<Self, DomainError> {
        let code = code.into();

        if stops.len() < 2 {
            return Err(DomainError::TooFewStops {
                code,
                count: stops.len(),
            });
        }

        for stop in &stops {
            stop.validate()?;
        }

        Ok(Self {
            code,
            name: None,
            color: color.into(),
            stops,
        })
    }

    /// Attach a human-readable line name (e.g., "Talamban - Carbon").
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The route code as published on the vehicle (e.g., "04L").
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Display color (CSS color string).
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The ordered stop sequence.
    pub fn stops(&self) -> &[GeoPoint] {
        &self.stops
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Returns the stop at `index`, if in range.
    pub fn stop(&self, index: usize) -> Option<&GeoPoint> {
        self.stops.get(index)
    }
}
