//! Stock service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StockServiceError {
    #[error("product name is required")]
    MissingProductName,

    #[error("quantity cannot be negative, got {0}")]
    InvalidQuantity(i32),

    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error("size not found: {0}")]
    SizeNotFound(String),

    #[error("product {0} is tracked by size and no size was given")]
    SizeRequired(String),

    #[error("related resource not found")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for StockServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
