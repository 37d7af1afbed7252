//! Error types for the intake REST API.
//!
//! Storage errors from the persistence layer are mapped to HTTP status
//! codes as follows:
//!
//! | Store Error | HTTP Status |
//! |-------------|-------------|
//! | NotFound | 404 |
//! | UnknownDoctor | 400 |
//! | Pool / Database | 500 |
//!
//! Error responses are a JSON object with an `error` message and, where the
//! store produced a diagnostic worth surfacing to operators, a `details`
//! field. The `details` text is for debugging, not for clients to parse.

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_store::StoreError;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum ApiError {
    /// No patient record matched the identifier (HTTP 404).
    NotFound {
        /// The patient identifier.
        id: i64,
    },

    /// The request payload failed boundary validation (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// A store-level failure (HTTP 500).
    Internal {
        /// Generic message for the client.
        message: String,
        /// Underlying store diagnostic, when available.
        details: Option<String>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { id } => write!(f, "Patient not found: {}", id),
            ApiError::BadRequest { message } => write!(f, "Bad request: {}", message),
            ApiError::Internal { message, .. } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::NotFound { id } => (
                StatusCode::NOT_FOUND,
                format!("Patient {} not found", id),
                None,
            ),
            ApiError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, None),
            ApiError::Internal { message, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
        };

        let body = match details {
            Some(details) => serde_json::json!({ "error": error, "details": details }),
            None => serde_json::json!({ "error": error }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound { id },
            StoreError::UnknownDoctor { doctor } => ApiError::BadRequest {
                message: format!("Unknown doctor reference: {}", doctor),
            },
            err => ApiError::Internal {
                message: err.to_string(),
                details: None,
            },
        }
    }
}

/// Result type alias for REST operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ApiError::NotFound { id: 7 };
        assert_eq!(err.to_string(), "Patient not found: 7");
    }

    #[test]
    fn test_bad_request_display() {
        let err = ApiError::BadRequest {
            message: "Missing required field: name".to_string(),
        };
        assert!(err.to_string().contains("Missing required field"));
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err: ApiError = StoreError::NotFound { id: 3 }.into();
        assert!(matches!(err, ApiError::NotFound { id: 3 }));
    }

    #[test]
    fn test_unknown_doctor_maps_to_400() {
        let err: ApiError = StoreError::UnknownDoctor {
            doctor: "dr.x@clinic.example".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::BadRequest { .. }));
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let err: ApiError = StoreError::Database {
            message: "disk I/O error".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::Internal { .. }));
    }
}
