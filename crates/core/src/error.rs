//! Error types for the soulcoach domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all soulcoach operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Completion backend errors ---
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the external completion service boundary.
///
/// The pipeline does not retry and does not interpret causes beyond
/// surfacing the upstream status to the client.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Completion backend not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl CompletionError {
    /// The HTTP status code the gateway should surface for this failure.
    ///
    /// Upstream API errors pass their status through; everything else maps
    /// onto the closest gateway-side code.
    pub fn upstream_status(&self) -> u16 {
        match self {
            Self::ApiError { status_code, .. } => *status_code,
            Self::RateLimited { .. } => 429,
            Self::AuthenticationFailed(_) => 500,
            Self::NotConfigured(_) => 500,
            Self::Timeout(_) => 504,
            Self::Network(_) => 502,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_status() {
        let err = Error::Completion(CompletionError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn upstream_status_passthrough() {
        let err = CompletionError::ApiError {
            status_code: 418,
            message: "teapot".into(),
        };
        assert_eq!(err.upstream_status(), 418);
    }

    #[test]
    fn transport_failures_map_to_gateway_codes() {
        assert_eq!(
            CompletionError::Timeout("deadline".into()).upstream_status(),
            504
        );
        assert_eq!(
            CompletionError::Network("refused".into()).upstream_status(),
            502
        );
        assert_eq!(
            CompletionError::NotConfigured("no key".into()).upstream_status(),
            500
        );
    }
}
