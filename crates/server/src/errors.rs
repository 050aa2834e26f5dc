use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorResponse;
use service::errors::ServiceError;
use thiserror::Error;

pub const INTERNAL_ERROR: &str = "Internal error";
pub const DUPLICATE_STUDENT: &str = "Student with this id already exists";

/// Error rendered as `{"message": ...}` with the given status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::DuplicateKey => Self::new(StatusCode::CONFLICT, DUPLICATE_STUDENT),
            ServiceError::StorageFailure | ServiceError::NotImplemented => Self::internal(),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors() {
        assert_eq!(JsonApiError::from(ServiceError::DuplicateKey).status, StatusCode::CONFLICT);
        assert_eq!(JsonApiError::from(ServiceError::DuplicateKey).message, DUPLICATE_STUDENT);
        assert_eq!(JsonApiError::from(ServiceError::StorageFailure), JsonApiError::internal());
        assert_eq!(JsonApiError::from(ServiceError::NotImplemented), JsonApiError::internal());
    }
}
