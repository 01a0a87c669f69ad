use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use fleet_core::error::AppError;

use crate::dto::{ErrorResponse, ValidationErrors};

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::Validation(messages) => (
                StatusCode::BAD_REQUEST,
                axum::Json(ValidationErrors { messages }),
            )
                .into_response(),
            AppError::AuthenticationFailed => (
                StatusCode::UNAUTHORIZED,
                axum::Json(ErrorResponse {
                    error: "unauthorized".to_string(),
                    message: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                axum::Json(ErrorResponse {
                    error: "forbidden".to_string(),
                    message: "Insufficient role for this route".to_string(),
                }),
            )
                .into_response(),
            AppError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                axum::Json(ErrorResponse {
                    error: "not_found".to_string(),
                    message: format!("{entity} not found"),
                }),
            )
                .into_response(),
            // Everything else is unexpected; log it, leak nothing.
            other => {
                tracing::error!("internal error: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(ErrorResponse {
                        error: "internal_error".to_string(),
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
