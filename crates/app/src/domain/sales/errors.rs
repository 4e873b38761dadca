//! Sales service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesServiceError {
    #[error("sales total overflowed for product {0}")]
    Overflow(i32),

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
