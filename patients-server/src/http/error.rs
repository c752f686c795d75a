//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body parsed but failed validation (400)
    Validation(ValidationError),

    /// Body is not valid JSON (400)
    MalformedRequest { message: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) if e.is_missing_field() => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "missing_field",
                    "message": e.to_string()
                }),
            ),
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "malformed_request",
                    "message": e.to_string()
                }),
            ),
            Self::MalformedRequest { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "malformed_request",
                    "message": message
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest {
            message: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_field_is_400() {
        let err = ApiError::Validation(ValidationError::MissingFields {
            fields: vec!["age"],
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "missing_field");
        assert_eq!(body["message"], "missing required field(s): age");
    }

    #[tokio::test]
    async fn wrong_type_is_malformed() {
        let err = ApiError::Validation(ValidationError::NotAnObject);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "malformed_request");
    }

    #[tokio::test]
    async fn database_error_is_500_with_generic_message() {
        let err = ApiError::Database(DbError::Query(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "an internal error occurred");
    }
}
