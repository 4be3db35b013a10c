//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reverse geocoding failed or returned no result
    #[error("Geocoding error: {0}")]
    Geocoding(String),

    /// Map provider unavailable (missing key, script load failure)
    #[error("Map provider unavailable: {0}")]
    MapUnavailable(String),

    /// Device geolocation denied or absent
    #[error("Geolocation unavailable")]
    GeolocationUnavailable,

    /// Invoice document rendering failed
    #[error("Document error: {0}")]
    Document(String),

    /// File I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chat hand-off failed (e.g. no browser context)
    #[error("Chat hand-off error: {0}")]
    Handoff(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
