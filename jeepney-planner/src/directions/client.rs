//! Directions API HTTP client.
//!
//! Requests transit directions between two points and converts the
//! response into a [`TransitItinerary`]. Handles authentication and
//! bounds the number of concurrent requests.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::GeoPoint;
use crate::planner::DirectionsGateway;

use super::convert::convert_response;
use super::error::DirectionsError;
use super::itinerary::TransitItinerary;
use super::types::DirectionsResponse;

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
///
/// Uses a semaphore to limit concurrent requests and avoid hitting the
/// provider's rate limits.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Request a transit itinerary between two points.
    ///
    /// Without an API key this fails with [`DirectionsError::Unauthorized`]
    /// and sends nothing.
    pub async fn get_transit_directions(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> Result<TransitItinerary, DirectionsError> {
        if self.api_key.is_empty() {
            debug!("no directions API key, skipping request");
            return Err(DirectionsError::Unauthorized);
        }

        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DirectionsError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/directions/json", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("origin", origin.to_string()),
                ("destination", destination.to_string()),
                ("mode", "transit".to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectionsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        debug!(status = %parsed.status, routes = parsed.routes.len(), "directions response");

        convert_response(&parsed)
    }
}

impl DirectionsGateway for DirectionsClient {
    async fn request_transit_itinerary(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> Result<TransitItinerary, DirectionsError> {
        self.get_transit_directions(origin, destination).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = DirectionsConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_max_concurrent(10)
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = DirectionsConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation_trims_trailing_slash() {
        let config = DirectionsConfig::new("test-key").with_base_url("http://localhost:8080/");
        let client = DirectionsClient::new(config).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let config = DirectionsConfig::new("test-key")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(2);
        let client = DirectionsClient::new(config).unwrap();

        let result = client
            .get_transit_directions(&GeoPoint::new(10.3, 123.9), &GeoPoint::new(10.31, 123.91))
            .await;

        assert!(matches!(result, Err(DirectionsError::Http(_))));
    }

    #[tokio::test]
    async fn empty_api_key_fails_without_request() {
        // Same closed port: a request would surface as Http, not Unauthorized
        let config = DirectionsConfig::new("")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(2);
        let client = DirectionsClient::new(config).unwrap();

        let result = client
            .get_transit_directions(&GeoPoint::new(10.3, 123.9), &GeoPoint::new(10.31, 123.91))
            .await;

        assert!(matches!(result, Err(DirectionsError::Unauthorized)));
    }
}
