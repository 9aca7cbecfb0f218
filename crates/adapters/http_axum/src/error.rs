//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use greenhouse_domain::error::GreenhouseError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`GreenhouseError`] to an HTTP response with the matching status.
pub struct ApiError(GreenhouseError);

impl From<GreenhouseError> for ApiError {
    fn from(err: GreenhouseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.0, "request rejected");
        let status = match &self.0 {
            GreenhouseError::UnknownSetting(_) | GreenhouseError::IndexOutOfRange { .. } => {
                StatusCode::NOT_FOUND
            }
            GreenhouseError::InvalidValue { .. } => StatusCode::BAD_REQUEST,
            GreenhouseError::DuplicateConflict => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
