//! Sizes Repository

use sqlx::{Executor, FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::sizes::records::{SizeId, SizeRecord};

const LIST_SIZES_SQL: &str = include_str!("sql/list_sizes.sql");
const FIND_SIZE_BY_NAME_SQL: &str = include_str!("sql/find_size_by_name.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSizesRepository;

impl PgSizesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_sizes<'e, E>(&self, executor: E) -> Result<Vec<SizeRecord>, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        query_as::<Postgres, SizeRecord>(LIST_SIZES_SQL)
            .fetch_all(executor)
            .await
    }

    /// Exact (case-sensitive) match on the size label.
    pub(crate) async fn find_size_by_name<'e, E>(
        &self,
        executor: E,
        name: &str,
    ) -> Result<Option<SizeRecord>, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        query_as::<Postgres, SizeRecord>(FIND_SIZE_BY_NAME_SQL)
            .bind(name)
            .fetch_optional(executor)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SizeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: SizeId::from_i32(row.try_get("tamanho_id")?),
            name: row.try_get("nome")?,
        })
    }
}
