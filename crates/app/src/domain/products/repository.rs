//! Products Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::products::records::{ProductId, ProductRecord};

const FIND_PRODUCT_BY_NAME_SQL: &str = include_str!("sql/find_product_by_name.sql");
const FIND_PRODUCT_BY_ID_SQL: &str = include_str!("sql/find_product_by_id.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Case-insensitive exact match; the lowest id wins when several match.
    pub(crate) async fn find_product_by_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(FIND_PRODUCT_BY_NAME_SQL)
            .bind(name)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_product_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: ProductId,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(FIND_PRODUCT_BY_ID_SQL)
            .bind(id.into_i32())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i32(row.try_get("produto_id")?),
            name: row.try_get("nome")?,
            has_sizes: row.try_get("tem_tamanhos")?,
            active: row.try_get("status")?,
        })
    }
}
