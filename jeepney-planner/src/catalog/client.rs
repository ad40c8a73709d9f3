//! Route geometry provider client.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::domain::GeoPoint;

use super::error::CatalogError;

/// One route record as served by the provider (or stored in a routes file).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteDto {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: String,
    pub points: Vec<GeoPoint>,
}

/// Configuration for the route provider client.
#[derive(Debug, Clone)]
pub struct RouteClientConfig {
    /// Base URL; routes are read from `{base_url}/routes`
    pub base_url: String,
    /// Optional API key, sent as `x-apikey`
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RouteClientConfig {
    /// Create a new config for the given provider URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: 30,
        }
    }

    /// Authenticate with an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the route geometry provider.
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RouteClient {
    /// Create a new route provider client.
    pub fn new(config: RouteClientConfig) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| CatalogError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert(HeaderName::from_static("x-apikey"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch every route record from the provider.
    pub async fn fetch_all(&self) -> Result<Vec<RouteDto>, CatalogError> {
        let url = format!("{}/routes", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        parse_routes(&body)
    }
}

/// Parse a JSON array of route records.
pub fn parse_routes(json: &str) -> Result<Vec<RouteDto>, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::Json {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = RouteClientConfig::new("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = RouteClient::new(RouteClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn rejects_unprintable_api_key() {
        let config = RouteClientConfig::new("http://localhost").with_api_key("bad\nkey");
        assert!(matches!(
            RouteClient::new(config),
            Err(CatalogError::Api { status: 0, .. })
        ));
    }

    #[test]
    fn parses_route_records() {
        let routes = parse_routes(
            r#"[
                {"code": "04B", "name": "Lahug - Carbon", "color": "red",
                 "points": [{"lat": 10.30, "lng": 123.88}, {"lat": 10.32, "lon": 123.90}]},
                {"code": "12C", "color": "blue", "points": []}
            ]"#,
        )
        .unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].name.as_deref(), Some("Lahug - Carbon"));
        assert_eq!(routes[0].points[1], GeoPoint::new(10.32, 123.90));
        assert!(routes[1].name.is_none());
    }

    #[test]
    fn malformed_payload_is_json_error() {
        assert!(matches!(
            parse_routes(r#"{"routes": []}"#),
            Err(CatalogError::Json { .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_provider_is_http_error() {
        let client = RouteClient::new(
            RouteClientConfig::new("http://127.0.0.1:9").with_timeout_secs(2),
        )
        .unwrap();

        assert!(matches!(client.fetch_all().await, Err(CatalogError::Http(_))));
    }
}
