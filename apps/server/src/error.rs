use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use fba_core::errors::{DatabaseError, Error};

/// Error type for API handlers; converts core errors into HTTP responses.
pub enum ApiError {
    /// The requested resource does not exist.
    NotFound,
    Core(Error),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Core(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            ApiError::Core(Error::Validation(e)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            ApiError::Core(Error::Database(DatabaseError::NotFound(e))) => {
                (StatusCode::NOT_FOUND, e)
            }
            ApiError::Core(err) => {
                tracing::error!("Internal error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
