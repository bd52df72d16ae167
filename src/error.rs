//! Error types for the lookup service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Lookup Error Enum ==
/// Unified error type for the lookup service.
///
/// Every collaborator failure propagates unchanged to the caller; the core
/// performs no recovery, no fallback, no retry.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The document store has no item for the given id
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The cache or store could not be reached
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A required configuration value is missing or empty
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal failure (e.g. undecodable cached payload)
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = match &self {
            LookupError::NotFound(_) => StatusCode::NOT_FOUND,
            LookupError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            LookupError::Configuration(_) | LookupError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup service.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = LookupError::NotFound("27".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_unavailable_maps_to_502() {
        let response =
            LookupError::UpstreamUnavailable("cache connection refused".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_configuration_maps_to_500() {
        let response =
            LookupError::Configuration("STORE_CONNECTION is empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
