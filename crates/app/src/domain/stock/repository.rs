//! Stock Repository

use sqlx::{Executor, FromRow, Postgres, Row, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    products::records::ProductId, sizes::records::SizeId, stock::models::StockLevelRow,
};

const LIST_STOCK_LEVELS_SQL: &str = include_str!("sql/list_stock_levels.sql");
const SET_STOCK_QUANTITY_SQL: &str = include_str!("sql/set_stock_quantity.sql");
const ADJUST_STOCK_QUANTITY_SQL: &str = include_str!("sql/adjust_stock_quantity.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgStockRepository;

impl PgStockRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_stock_levels<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<StockLevelRow>, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        query_as::<Postgres, StockLevelRow>(LIST_STOCK_LEVELS_SQL)
            .fetch_all(executor)
            .await
    }

    /// Upserts the (product, size) row to an absolute quantity.
    pub(crate) async fn set_stock_quantity<'e, E>(
        &self,
        executor: E,
        product: ProductId,
        size: Option<SizeId>,
        quantity: i32,
    ) -> Result<i32, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        query_scalar::<Postgres, i32>(SET_STOCK_QUANTITY_SQL)
            .bind(product.into_i32())
            .bind(size.map(SizeId::into_i32))
            .bind(quantity)
            .fetch_one(executor)
            .await
    }

    /// Adds `delta` to the (product, size) row, creating it with `delta` when absent.
    pub(crate) async fn adjust_stock_quantity<'e, E>(
        &self,
        executor: E,
        product: ProductId,
        size: Option<SizeId>,
        delta: i32,
    ) -> Result<i32, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        query_scalar::<Postgres, i32>(ADJUST_STOCK_QUANTITY_SQL)
            .bind(product.into_i32())
            .bind(size.map(SizeId::into_i32))
            .bind(delta)
            .fetch_one(executor)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for StockLevelRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product: ProductId::from_i32(row.try_get("produto_id")?),
            product_name: row.try_get("produto_nome")?,
            has_sizes: row.try_get("tem_tamanhos")?,
            size: row
                .try_get::<Option<i32>, _>("tamanho_id")?
                .map(SizeId::from_i32),
            size_name: row.try_get("tamanho")?,
            quantity: row.try_get("quantidade")?,
        })
    }
}
