use thiserror::Error;

/// Outcomes that cross the store/service boundary. Engine detail is logged,
/// never carried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ServiceError {
    #[error("duplicate key")]
    DuplicateKey,
    #[error("storage failure")]
    StorageFailure,
    #[error("not implemented")]
    NotImplemented,
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(err: models::errors::ModelError) -> Self {
        if err.is_duplicate() { ServiceError::DuplicateKey } else { ServiceError::StorageFailure }
    }
}
