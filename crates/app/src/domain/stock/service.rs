//! Stock service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        movements::{data::NewMovement, repository::PgMovementsRepository},
        products::{records::ProductRecord, repository::PgProductsRepository},
        sizes::{records::SizeId, repository::PgSizesRepository},
        stock::{
            data::{StockUpdate, StockUpdated},
            errors::StockServiceError,
            models::ProductStock,
            repository::PgStockRepository,
            summary::{StockSummary, group_product_stock},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgStockService {
    db: Db,
    repository: PgStockRepository,
    products: PgProductsRepository,
    sizes: PgSizesRepository,
    movements: PgMovementsRepository,
}

impl PgStockService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgStockRepository::new(),
            products: PgProductsRepository::new(),
            sizes: PgSizesRepository::new(),
            movements: PgMovementsRepository::new(),
        }
    }

    async fn resolve_size(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ProductRecord,
        size_name: Option<&str>,
    ) -> Result<Option<SizeId>, StockServiceError> {
        if !product.has_sizes {
            return Ok(None);
        }

        let Some(size_name) = size_name else {
            return Err(StockServiceError::SizeRequired(product.name.clone()));
        };

        self.sizes
            .find_size_by_name(&mut **tx, size_name)
            .await?
            .map(|size| Some(size.id))
            .ok_or_else(|| StockServiceError::SizeNotFound(size_name.to_string()))
    }
}

#[async_trait]
impl StockService for PgStockService {
    async fn list_product_stock(&self) -> Result<Vec<ProductStock>, StockServiceError> {
        let rows = self.repository.list_stock_levels(self.db.pool()).await?;

        Ok(group_product_stock(rows))
    }

    async fn stock_summary(&self) -> Result<StockSummary, StockServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows = self.repository.list_stock_levels(&mut *tx).await?;
        let sizes = self.sizes.list_sizes(&mut *tx).await?;

        tx.commit().await?;

        Ok(StockSummary::build(group_product_stock(rows), &sizes))
    }

    async fn apply_stock_update(
        &self,
        update: StockUpdate,
    ) -> Result<StockUpdated, StockServiceError> {
        let product_name = update.product_name.trim();

        if product_name.is_empty() {
            return Err(StockServiceError::MissingProductName);
        }

        if update.new_quantity < 0 {
            return Err(StockServiceError::InvalidQuantity(update.new_quantity));
        }

        let size_name = update
            .size_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());

        // Dropping `tx` on any early return rolls every write back.
        let mut tx = self.db.begin_transaction().await?;

        let product = self
            .products
            .find_product_by_name(&mut tx, product_name)
            .await?
            .ok_or_else(|| StockServiceError::ProductNotFound(product_name.to_string()))?;

        let size = self.resolve_size(&mut tx, &product, size_name).await?;

        let quantity = self
            .repository
            .set_stock_quantity(&mut *tx, product.id, size, update.new_quantity)
            .await?;

        let movement = match update.operation {
            Some(operation) => {
                let movement = NewMovement {
                    product: product.id,
                    size,
                    quantity: update.new_quantity,
                    kind: operation.movement_kind(),
                };

                Some(self.movements.create_movement(&mut *tx, &movement).await?.id)
            }
            None => None,
        };

        tx.commit().await?;

        info!(
            product_id = %product.id,
            size_id = ?size,
            quantity,
            movement_id = ?movement,
            "stock updated"
        );

        Ok(StockUpdated {
            product: product.id,
            size,
            quantity,
            movement,
        })
    }
}

#[automock]
#[async_trait]
pub trait StockService: Send + Sync {
    /// Stock of every active product, with only the sizes that hold a stock row.
    async fn list_product_stock(&self) -> Result<Vec<ProductStock>, StockServiceError>;

    /// Stock of every active product with all defined sizes filled in.
    async fn stock_summary(&self) -> Result<StockSummary, StockServiceError>;

    /// Resolves names and sets an absolute quantity for one (product, size)
    /// pair, optionally logging a movement, in a single transaction.
    async fn apply_stock_update(
        &self,
        update: StockUpdate,
    ) -> Result<StockUpdated, StockServiceError>;
}
