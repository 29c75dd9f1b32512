//! HTTP boundary error types.
//!
//! The Display strings double as the user-visible Turkish messages of the
//! original client, so they surface inline next to the triggering action.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP boundary errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Create without a reference id (validation failure)
    #[error("Referans ID gerekli")]
    MissingReference,

    /// Identifier absent on update/delete
    #[error("Kayıt bulunamadı")]
    NotFound,

    /// Request body not parseable
    #[error("Hatalı istek")]
    InvalidBody,

    /// Login with a wrong credential pair
    #[error("Geçersiz bilgiler")]
    InvalidCredentials,

    /// Backing file unreadable/unwritable or other server-side failure
    #[error("Sunucu hatası")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingReference => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingReference => ApiError::MissingReference,
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Io(e) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref detail) = self {
            tracing::error!(%detail, "request failed");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingReference.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        assert!(matches!(
            ApiError::from(StoreError::MissingReference),
            ApiError::MissingReference
        ));
        assert!(matches!(
            ApiError::from(StoreError::NotFound("1".to_string())),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "denied"
            ))),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_messages_match_client_expectations() {
        assert_eq!(ApiError::MissingReference.to_string(), "Referans ID gerekli");
        assert_eq!(ApiError::NotFound.to_string(), "Kayıt bulunamadı");
        assert_eq!(ApiError::InvalidBody.to_string(), "Hatalı istek");
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Geçersiz bilgiler");
    }
}
