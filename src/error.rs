//! Error types for the EPG coverage checker.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the EPG coverage checker.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("No endpoints configured. Pass URLs, use --config, or set EPG_COVERAGE_ENDPOINTS")]
    NoEndpoints,

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid config file {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    // EPG endpoint errors
    #[error("Endpoint {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
