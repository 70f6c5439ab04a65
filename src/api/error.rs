use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::service::ServiceError;

/// Gateway-side wrapper around [`ServiceError`]. This is the only place in
/// the crate where a failure is turned into an HTTP status code and body.
#[derive(Debug)]
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ServiceError::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": self.0.to_string() })),
            )
                .into_response(),

            ServiceError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "message": "Authentication failed" })),
            )
                .into_response(),

            ServiceError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.0.to_string() })),
            )
                .into_response(),

            ServiceError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Listing not found" })),
            )
                .into_response(),

            ServiceError::Store(ref detail) => {
                // Internals are for the log, not the response body.
                tracing::error!("storage failure: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}
