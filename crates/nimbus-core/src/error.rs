//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the Nimbus weather gateway.
///
/// Two kinds matter to API clients: validation failures (bad input, 400)
/// and provider failures (upstream weather source unavailable or returning
/// garbage, 503). The remaining variants cover infrastructure faults.
#[derive(Error, Debug)]
pub enum NimbusError {
    /// Validation error (malformed or out-of-range input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// External weather provider unavailable or returned an unusable payload
    #[error("Weather provider error: {0}")]
    Provider(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NimbusError {
    /// Returns the HTTP status code for this error.
    ///
    /// This is the single kind-to-status table for the whole API surface:
    /// validation is a client error, provider and infrastructure failures
    /// mean the gateway cannot answer right now.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Provider(_) | Self::Database(_) | Self::Cache(_) => 503,
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Provider(_) => "PROVIDER_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a provider error.
    #[must_use]
    pub fn provider<T: Into<String>>(message: T) -> Self {
        Self::Provider(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// True when the detailed cause must stay server-side and the client
    /// should only see a generic message.
    #[must_use]
    pub const fn is_opaque_to_client(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for NimbusError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for NimbusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `NimbusError`.
    ///
    /// Opaque kinds (provider/infrastructure) get a generic message so
    /// upstream internals never leak to clients; the caller is expected
    /// to log the detailed cause.
    #[must_use]
    pub fn from_error(error: &NimbusError) -> Self {
        let message = if error.is_opaque_to_client() {
            "External weather service unavailable".to_string()
        } else {
            error.to_string()
        };

        Self {
            code: error.error_code().to_string(),
            message,
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&NimbusError> for ErrorResponse {
    fn from(error: &NimbusError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(NimbusError::validation("bad date").status_code(), 400);
        assert_eq!(NimbusError::provider("city not found").status_code(), 503);
        assert_eq!(NimbusError::Database("gone".to_string()).status_code(), 503);
        assert_eq!(NimbusError::Cache("down".to_string()).status_code(), 503);
        assert_eq!(NimbusError::Configuration("missing".to_string()).status_code(), 500);
        assert_eq!(NimbusError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(NimbusError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(NimbusError::provider("no data").error_code(), "PROVIDER_ERROR");
        assert_eq!(NimbusError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(NimbusError::Cache("redis".to_string()).error_code(), "CACHE_ERROR");
        assert_eq!(NimbusError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_validation_message_is_echoed() {
        let err = NimbusError::validation("Date cannot be in the past.");
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "VALIDATION_ERROR");
        assert!(response.message.contains("Date cannot be in the past."));
    }

    #[test]
    fn test_provider_detail_is_not_echoed() {
        let err = NimbusError::provider("upstream returned 418 with body teapot");
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "PROVIDER_ERROR");
        assert!(!response.message.contains("teapot"));
    }

    #[test]
    fn test_error_response_with_details() {
        let err = NimbusError::validation("bad input");
        let details = vec![FieldError {
            field: "date".to_string(),
            message: "Unparseable date".to_string(),
            code: "INVALID_DATE".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert_eq!(response.details.unwrap().len(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = NimbusError::provider("no forecast entry for 2025-01-05");
        assert!(err.to_string().contains("no forecast entry"));
    }
}
