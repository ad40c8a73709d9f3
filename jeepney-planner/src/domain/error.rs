//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from API/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A latitude or longitude is non-finite or out of range
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// A route has too few stops to be ridden
    #[error("route {code} has {count} stops, need at least 2")]
    TooFewStops { code: String, count: usize },

    /// Journey has no segments
    #[error("journey must have at least one segment")]
    EmptyJourney,
}
