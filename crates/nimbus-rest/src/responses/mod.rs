//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nimbus_core::{ErrorResponse, NimbusError};
use serde::Serialize;
use tracing::{error, warn};

/// Application error type for Axum.
///
/// Status selection is the error kind's own `status_code()` table, so every
/// handler maps failures identically and nothing is masked by a catch-all.
#[derive(Debug)]
pub struct AppError(pub NimbusError);

impl From<NimbusError> for AppError {
    fn from(err: NimbusError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Validation failures are expected user input issues; everything
        // else is a server-side problem whose detail stays in the logs.
        match &self.0 {
            NimbusError::Validation(message) => {
                warn!("Request validation failed: {}", message);
            }
            other => {
                error!("Request failed: {}", other);
            }
        }

        let body = Json(ErrorResponse::from_error(&self.0));
        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}
