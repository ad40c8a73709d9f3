//! Directions gateway error types.

/// Errors from the directions gateway.
///
/// None of these reach planner callers: the planner logs them and falls
/// back to local matching.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed. `body` keeps a prefix of the payload
    /// for debugging.
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Provider found no route between the points
    #[error("no route found")]
    NoRoute,

    /// Rate limited or over quota
    #[error("rate limited by directions API")]
    RateLimited,

    /// Invalid API key or request denied
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// The request did not complete within the planner's deadline
    #[error("directions request timed out")]
    Timeout,
}
