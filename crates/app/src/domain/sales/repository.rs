//! Sales Repository

use sqlx::{Executor, FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::{products::records::ProductId, sales::models::SoldQuantity};

const LIST_SOLD_QUANTITIES_SQL: &str = include_str!("sql/list_sold_quantities.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSalesRepository;

impl PgSalesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Sum of `saida` quantities for every product that has any.
    pub(crate) async fn list_sold_quantities<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<SoldQuantity>, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        query_as::<Postgres, SoldQuantity>(LIST_SOLD_QUANTITIES_SQL)
            .fetch_all(executor)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SoldQuantity {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product: ProductId::from_i32(row.try_get("produto_id")?),
            product_name: row.try_get("produto")?,
            quantity: row.try_get("quantidade_vendida")?,
        })
    }
}
