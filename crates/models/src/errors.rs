use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate key: {0}")]
    Duplicate(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Classify a SeaORM error: unique-constraint violations become `Duplicate`,
    /// everything else is an opaque `Db` error.
    pub fn from_db(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => ModelError::Duplicate(detail),
            _ => ModelError::Db(err.to_string()),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, ModelError::Duplicate(_))
    }
}
