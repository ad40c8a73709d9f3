//! Journey planning: external transit first, local route matching second.

use std::future::Future;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::directions::{DirectionsError, TransitItinerary};
use crate::domain::{GeoPoint, JeepneyRoute, Journey};

use super::classify::classify_itinerary;
use super::config::PlannerConfig;
use super::input::normalize_location;
use super::multi::find_multi_ride;
use super::single::find_single_ride;

/// Error from journey planning.
///
/// Only bad input is an error. Gateway failures trigger the local
/// fallback, and finding no route is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Origin or destination missing or unparseable
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Trait for requesting transit itineraries from an external provider.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait DirectionsGateway {
    /// Request a transit itinerary between two points.
    fn request_transit_itinerary(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> impl Future<Output = Result<TransitItinerary, DirectionsError>> + Send;
}

/// Jeepney journey planner.
///
/// Borrows one catalog snapshot for its whole lifetime, so every candidate
/// considered during a call sees the same routes.
pub struct JourneyPlanner<'a, G: DirectionsGateway> {
    gateway: &'a G,
    routes: &'a [JeepneyRoute],
    config: &'a PlannerConfig,
}

impl<'a, G: DirectionsGateway> JourneyPlanner<'a, G> {
    /// Create a new planner.
    pub fn new(gateway: &'a G, routes: &'a [JeepneyRoute], config: &'a PlannerConfig) -> Self {
        Self {
            gateway,
            routes,
            config,
        }
    }

    /// Plan a jeepney journey from `origin` to a caller-supplied destination.
    ///
    /// `destination` may be `{"location": {"lat", "lng"}}` or
    /// `{"lat", "lng"}`. Input is validated before the gateway is contacted.
    ///
    /// Returns `Ok(None)` when no jeepney option exists; callers should
    /// fall back to walking directions.
    pub async fn plan_journey(
        &self,
        origin: &GeoPoint,
        destination: &Value,
    ) -> Result<Option<Journey>, PlanError> {
        origin
            .validate()
            .map_err(|e| PlanError::InvalidInput(format!("origin: {e}")))?;
        let destination = normalize_location(destination)?;

        let journey = self.plan_between(origin, &destination).await;

        match &journey {
            Some(j) => info!(
                source = j.source().as_str(),
                segments = j.segments().len(),
                distance_m = j.total_distance_m(),
                "planned jeepney journey"
            ),
            None => info!(%origin, %destination, "no jeepney route available"),
        }

        Ok(journey)
    }

    /// Plan between two already-validated points.
    pub async fn plan_between(&self, origin: &GeoPoint, destination: &GeoPoint) -> Option<Journey> {
        if let Some(journey) = self.plan_external(origin, destination).await {
            return Some(journey);
        }

        self.plan_locally(origin, destination)
    }

    /// Ask the gateway and keep the answer only if it contains a jeepney.
    async fn plan_external(&self, origin: &GeoPoint, destination: &GeoPoint) -> Option<Journey> {
        let request = self.gateway.request_transit_itinerary(origin, destination);

        let result = match self.config.gateway_timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .unwrap_or_else(|_| Err(DirectionsError::Timeout)),
            None => request.await,
        };

        match result {
            Ok(itinerary) => {
                let journey = classify_itinerary(&itinerary);
                if journey.is_none() {
                    debug!("external itinerary has no jeepney legs, using local routes");
                }
                journey
            }
            Err(e) => {
                warn!(error = %e, "directions gateway failed, using local routes");
                None
            }
        }
    }

    /// Best local candidate: single ride or one transfer, by total distance.
    ///
    /// The single ride wins ties.
    pub fn plan_locally(&self, origin: &GeoPoint, destination: &GeoPoint) -> Option<Journey> {
        let single = find_single_ride(self.routes, origin, destination);
        let multi = find_multi_ride(self.routes, origin, destination);

        let journey = match (single, multi) {
            (Some(s), Some(m)) if m.total_distance_m < s.total_distance_m => {
                m.to_journey(*origin, *destination, self.config)
            }
            (Some(s), _) => s.to_journey(*origin, *destination, self.config),
            (None, Some(m)) => m.to_journey(*origin, *destination, self.config),
            (None, None) => {
                debug!(routes = self.routes.len(), "no local jeepney candidate");
                return None;
            }
        };

        match journey {
            Ok(j) => {
                debug!(source = j.source().as_str(), "local candidate selected");
                Some(j)
            }
            Err(e) => {
                warn!(error = %e, "failed to assemble local journey");
                None
            }
        }
    }
}
