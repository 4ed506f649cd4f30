use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stratmap_core::errors::{Error, ValidationError};

pub type ApiResult<T> = Result<T, ApiError>;

/// Core error carried across the HTTP boundary.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation(ValidationError::NotFound(_)) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => {
                tracing::error!("request failed: {}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(serde_json::json!({
            "error": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}
