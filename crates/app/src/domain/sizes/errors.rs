//! Sizes service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SizesServiceError {
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SizesServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
