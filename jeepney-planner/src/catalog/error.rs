//! Route catalog error types.

/// Errors that can occur when loading the route catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse route JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Failed to read a local routes file
    #[error("I/O error: {message}")]
    Io { message: String },

    /// No usable route in the payload
    #[error("no valid routes loaded")]
    Empty,
}
