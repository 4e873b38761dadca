//! Sizes service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::sizes::{
        errors::SizesServiceError, records::SizeRecord, repository::PgSizesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgSizesService {
    db: Db,
    repository: PgSizesRepository,
}

impl PgSizesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSizesRepository::new(),
        }
    }
}

#[async_trait]
impl SizesService for PgSizesService {
    async fn list_sizes(&self) -> Result<Vec<SizeRecord>, SizesServiceError> {
        self.repository
            .list_sizes(self.db.pool())
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub trait SizesService: Send + Sync {
    /// Lists size definitions in id order.
    async fn list_sizes(&self) -> Result<Vec<SizeRecord>, SizesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn list_sizes_returns_seeded_sizes_in_order() -> TestResult {
        let ctx = TestContext::new().await;

        let sizes = ctx.sizes.list_sizes().await?;
        let names: Vec<&str> = sizes.iter().map(|size| size.name.as_str()).collect();

        assert_eq!(names, ["P", "M", "G", "GG"]);

        Ok(())
    }
}
