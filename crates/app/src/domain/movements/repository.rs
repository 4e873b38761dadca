//! Movements Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Executor, FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::{
    movements::{
        data::{MovementFilter, NewMovement},
        records::{MovementId, MovementKind, MovementRecord},
    },
    products::records::ProductId,
    sizes::records::SizeId,
};

const LIST_MOVEMENTS_SQL: &str = include_str!("sql/list_movements.sql");
const CREATE_MOVEMENT_SQL: &str = include_str!("sql/create_movement.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgMovementsRepository;

impl PgMovementsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_movements<'e, E>(
        &self,
        executor: E,
        filter: &MovementFilter,
    ) -> Result<Vec<MovementRecord>, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        query_as::<Postgres, MovementRecord>(LIST_MOVEMENTS_SQL)
            .bind(filter.product.map(ProductId::into_i32))
            .bind(filter.kind.map(MovementKind::as_str))
            .bind(i64::from(filter.effective_limit()))
            .bind(i64::from(filter.offset))
            .fetch_all(executor)
            .await
    }

    pub(crate) async fn create_movement<'e, E>(
        &self,
        executor: E,
        movement: &NewMovement,
    ) -> Result<MovementRecord, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        query_as::<Postgres, MovementRecord>(CREATE_MOVEMENT_SQL)
            .bind(movement.product.into_i32())
            .bind(movement.size.map(SizeId::into_i32))
            .bind(movement.quantity)
            .bind(movement.kind.as_str())
            .fetch_one(executor)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for MovementRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("tipo")?;

        let kind = kind
            .parse::<MovementKind>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "tipo".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: MovementId::from_i32(row.try_get("movimentacao_id")?),
            product: ProductId::from_i32(row.try_get("produto_id")?),
            size: row
                .try_get::<Option<i32>, _>("tamanho_id")?
                .map(SizeId::from_i32),
            quantity: row.try_get("quantidade")?,
            kind,
            created_at: row
                .try_get::<SqlxTimestamp, _>("data_movimentacao")?
                .to_jiff(),
            product_name: row.try_get("produto")?,
            size_name: row.try_get("tamanho")?,
        })
    }
}
