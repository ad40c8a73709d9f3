//! Mock directions gateway for testing without API access.
//!
//! Serves a canned response, loaded from a JSON file or built in code, as
//! if it were a live API reply. Can also be told to fail, to exercise the
//! planner's local fallback.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::GeoPoint;
use crate::planner::DirectionsGateway;

use super::convert::convert_response;
use super::error::DirectionsError;
use super::itinerary::TransitItinerary;
use super::types::DirectionsResponse;

#[derive(Debug, Clone)]
enum MockReply {
    Itinerary(TransitItinerary),
    NoRoute,
    Unavailable,
}

/// Mock directions client.
///
/// Useful for development and testing without real API credentials.
/// Counts requests so tests can check whether the gateway was consulted.
#[derive(Debug, Clone)]
pub struct MockDirectionsClient {
    reply: MockReply,
    calls: Arc<AtomicUsize>,
}

impl MockDirectionsClient {
    /// Load a Directions API JSON response from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DirectionsError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| DirectionsError::ApiError {
            status: 0,
            message: format!("Failed to read {:?}: {}", path, e),
        })?;

        Self::from_json(&json)
    }

    /// Parse a Directions API JSON response.
    ///
    /// Non-OK statuses in the payload are replayed as the matching error.
    pub fn from_json(json: &str) -> Result<Self, DirectionsError> {
        let response: DirectionsResponse =
            serde_json::from_str(json).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(json.chars().take(500).collect()),
            })?;

        let reply = match convert_response(&response) {
            Ok(itinerary) => MockReply::Itinerary(itinerary),
            Err(DirectionsError::NoRoute) => MockReply::NoRoute,
            Err(_) => MockReply::Unavailable,
        };

        Ok(Self::with_reply(reply))
    }

    /// Always return the given itinerary.
    pub fn with_itinerary(itinerary: TransitItinerary) -> Self {
        Self::with_reply(MockReply::Itinerary(itinerary))
    }

    /// Always report that no route exists.
    pub fn no_route() -> Self {
        Self::with_reply(MockReply::NoRoute)
    }

    /// Always fail as if the provider were unreachable.
    pub fn unavailable() -> Self {
        Self::with_reply(MockReply::Unavailable)
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of requests served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DirectionsGateway for MockDirectionsClient {
    async fn request_transit_itinerary(
        &self,
        _origin: &GeoPoint,
        _destination: &GeoPoint,
    ) -> Result<TransitItinerary, DirectionsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            MockReply::Itinerary(itinerary) => Ok(itinerary.clone()),
            MockReply::NoRoute => Err(DirectionsError::NoRoute),
            MockReply::Unavailable => Err(DirectionsError::ApiError {
                status: 503,
                message: "mock gateway unavailable".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "status": "OK",
        "routes": [{
            "legs": [{
                "steps": [{
                    "travel_mode": "TRANSIT",
                    "start_location": {"lat": 10.30, "lng": 123.88},
                    "end_location": {"lat": 10.33, "lng": 123.91},
                    "distance": {"value": 4000},
                    "duration": {"value": 900},
                    "transit_details": {"line": {"short_name": "12C", "vehicle": {"type": "BUS"}}}
                }]
            }]
        }]
    }"#;

    fn points() -> (GeoPoint, GeoPoint) {
        (GeoPoint::new(10.30, 123.88), GeoPoint::new(10.33, 123.91))
    }

    #[tokio::test]
    async fn load_mock_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let client = MockDirectionsClient::from_file(file.path()).unwrap();
        let (o, d) = points();

        let itinerary = client.request_transit_itinerary(&o, &d).await.unwrap();

        assert_eq!(itinerary.legs.len(), 1);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn replays_zero_results_as_no_route() {
        let client = MockDirectionsClient::from_json(r#"{"status": "ZERO_RESULTS"}"#).unwrap();
        let (o, d) = points();

        let result = client.request_transit_itinerary(&o, &d).await;

        assert!(matches!(result, Err(DirectionsError::NoRoute)));
    }

    #[tokio::test]
    async fn unavailable_fails() {
        let client = MockDirectionsClient::unavailable();
        let (o, d) = points();

        assert!(client.request_transit_itinerary(&o, &d).await.is_err());
        assert!(client.request_transit_itinerary(&o, &d).await.is_err());
        assert_eq!(client.call_count(), 2);
    }

    #[test]
    fn missing_file_is_error() {
        assert!(MockDirectionsClient::from_file("/nonexistent/directions.json").is_err());
    }

    #[test]
    fn invalid_json_is_error() {
        assert!(matches!(
            MockDirectionsClient::from_json("not json"),
            Err(DirectionsError::Json { .. })
        ));
    }
}
