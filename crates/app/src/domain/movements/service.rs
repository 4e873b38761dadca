//! Movements service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        movements::{
            data::{MovementFilter, NewMovement},
            errors::MovementsServiceError,
            records::MovementRecord,
            repository::PgMovementsRepository,
        },
        products::repository::PgProductsRepository,
        stock::repository::PgStockRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgMovementsService {
    db: Db,
    repository: PgMovementsRepository,
    products: PgProductsRepository,
    stock: PgStockRepository,
}

impl PgMovementsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgMovementsRepository::new(),
            products: PgProductsRepository::new(),
            stock: PgStockRepository::new(),
        }
    }
}

#[async_trait]
impl MovementsService for PgMovementsService {
    async fn list_movements(
        &self,
        filter: MovementFilter,
    ) -> Result<Vec<MovementRecord>, MovementsServiceError> {
        self.repository
            .list_movements(self.db.pool(), &filter)
            .await
            .map_err(Into::into)
    }

    async fn create_movement(
        &self,
        mut movement: NewMovement,
    ) -> Result<MovementRecord, MovementsServiceError> {
        if movement.quantity <= 0 {
            return Err(MovementsServiceError::InvalidQuantity(movement.quantity));
        }

        let mut tx = self.db.begin_transaction().await?;

        let product = self
            .products
            .find_product_by_id(&mut tx, movement.product)
            .await?
            .ok_or(MovementsServiceError::InvalidReference)?;

        // Same row layout as stock updates: sized products only hold sized
        // rows, simple products only the sizeless one.
        if product.has_sizes {
            if movement.size.is_none() {
                return Err(MovementsServiceError::SizeRequired(product.name));
            }
        } else {
            movement.size = None;
        }

        let record = self.repository.create_movement(&mut *tx, &movement).await?;

        let quantity = self
            .stock
            .adjust_stock_quantity(
                &mut *tx,
                movement.product,
                movement.size,
                movement.kind.signed(movement.quantity),
            )
            .await?;

        tx.commit().await?;

        info!(
            movement_id = %record.id,
            product_id = %record.product,
            kind = %record.kind,
            quantity,
            "movement recorded"
        );

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait MovementsService: Send + Sync {
    /// Newest-first page of movements matching `filter`.
    async fn list_movements(
        &self,
        filter: MovementFilter,
    ) -> Result<Vec<MovementRecord>, MovementsServiceError>;

    /// Records a movement and applies it to the matching stock row as a delta.
    async fn create_movement(
        &self,
        movement: NewMovement,
    ) -> Result<MovementRecord, MovementsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            movements::records::MovementKind,
            products::records::ProductId,
            stock::{StockService, data::StockUpdate},
        },
        test::{
            TestContext,
            helpers::{count_movements, count_stock_rows, create_product, size_id, stock_quantity},
        },
    };

    use super::*;

    fn movement(product: ProductId, quantity: i32, kind: MovementKind) -> NewMovement {
        NewMovement {
            product,
            size: None,
            quantity,
            kind,
        }
    }

    #[tokio::test]
    async fn movements_accumulate_on_stock() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Redinha", false).await;

        ctx.movements
            .create_movement(movement(product, 10, MovementKind::Entry))
            .await?;
        ctx.movements
            .create_movement(movement(product, 3, MovementKind::Exit))
            .await?;

        assert_eq!(stock_quantity(&ctx, product, None).await, Some(7));

        Ok(())
    }

    #[tokio::test]
    async fn movement_after_update_adds_instead_of_setting() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Collant", true).await;

        ctx.stock
            .apply_stock_update(StockUpdate {
                product_name: "Collant".to_string(),
                size_name: Some("P".to_string()),
                new_quantity: 5,
                operation: None,
            })
            .await?;

        let size = size_id(&ctx, "P").await;

        ctx.movements
            .create_movement(NewMovement {
                size: Some(size),
                ..movement(product, 2, MovementKind::Entry)
            })
            .await?;

        assert_eq!(stock_quantity(&ctx, product, Some(size)).await, Some(7));

        Ok(())
    }

    #[tokio::test]
    async fn created_movement_carries_names() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Collant", true).await;
        let size = size_id(&ctx, "GG").await;

        let record = ctx
            .movements
            .create_movement(NewMovement {
                size: Some(size),
                ..movement(product, 1, MovementKind::Entry)
            })
            .await?;

        assert_eq!(record.product_name.as_deref(), Some("Collant"));
        assert_eq!(record.size_name.as_deref(), Some("GG"));
        assert_eq!(record.kind, MovementKind::Entry);

        Ok(())
    }

    #[tokio::test]
    async fn non_positive_quantity_is_rejected() {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Redinha", false).await;

        let result = ctx
            .movements
            .create_movement(movement(product, 0, MovementKind::Entry))
            .await;

        assert!(
            matches!(result, Err(MovementsServiceError::InvalidQuantity(0))),
            "expected InvalidQuantity, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unknown_product_is_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .movements
            .create_movement(movement(ProductId::from_i32(9_999), 1, MovementKind::Entry))
            .await;

        assert!(
            matches!(result, Err(MovementsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn sized_product_without_size_is_rejected() {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Collant", true).await;

        let result = ctx
            .movements
            .create_movement(movement(product, 7, MovementKind::Entry))
            .await;

        assert!(
            matches!(&result, Err(MovementsServiceError::SizeRequired(name)) if name == "Collant"),
            "expected SizeRequired, got {result:?}"
        );
        assert_eq!(count_stock_rows(&ctx, product, None).await, 0);
        assert_eq!(count_movements(&ctx, product, None).await, 0);
    }

    #[tokio::test]
    async fn simple_product_movement_drops_size() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Redinha", false).await;
        let size = size_id(&ctx, "P").await;

        let record = ctx
            .movements
            .create_movement(NewMovement {
                size: Some(size),
                ..movement(product, 5, MovementKind::Entry)
            })
            .await?;

        assert_eq!(record.size, None);
        assert_eq!(count_stock_rows(&ctx, product, None).await, 1);
        assert_eq!(stock_quantity(&ctx, product, None).await, Some(5));

        Ok(())
    }

    #[tokio::test]
    async fn update_after_sized_movement_on_simple_product_still_sets_total() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Redinha", false).await;
        let size = size_id(&ctx, "P").await;

        ctx.movements
            .create_movement(NewMovement {
                size: Some(size),
                ..movement(product, 5, MovementKind::Entry)
            })
            .await?;

        ctx.stock
            .apply_stock_update(StockUpdate {
                product_name: "Redinha".to_string(),
                size_name: None,
                new_quantity: 12,
                operation: None,
            })
            .await?;

        let summary = ctx.stock.stock_summary().await?;
        let redinha = summary
            .products
            .iter()
            .find(|stock| stock.product() == product)
            .ok_or("Redinha missing from summary")?;

        assert_eq!(redinha.total(), 12);

        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_product_and_kind() -> TestResult {
        let ctx = TestContext::new().await;
        let redinha = create_product(&ctx, "Redinha", false).await;
        let coque = create_product(&ctx, "Coque", false).await;

        for (product, kind) in [
            (redinha, MovementKind::Entry),
            (redinha, MovementKind::Exit),
            (coque, MovementKind::Entry),
        ] {
            ctx.movements
                .create_movement(movement(product, 1, kind))
                .await?;
        }

        let movements = ctx
            .movements
            .list_movements(MovementFilter {
                product: Some(redinha),
                kind: Some(MovementKind::Exit),
                ..MovementFilter::default()
            })
            .await?;

        assert_eq!(movements.len(), 1, "expected one matching movement");
        assert_eq!(movements[0].product, redinha);
        assert_eq!(movements[0].kind, MovementKind::Exit);

        Ok(())
    }

    #[tokio::test]
    async fn list_is_newest_first_and_paged() -> TestResult {
        let ctx = TestContext::new().await;
        let product = create_product(&ctx, "Redinha", false).await;

        let mut created = Vec::new();

        for quantity in 1..=3 {
            created.push(
                ctx.movements
                    .create_movement(movement(product, quantity, MovementKind::Entry))
                    .await?
                    .id,
            );
        }

        let page = ctx
            .movements
            .list_movements(MovementFilter {
                limit: 2,
                offset: 1,
                ..MovementFilter::default()
            })
            .await?;

        let ids: Vec<_> = page.iter().map(|movement| movement.id).collect();

        assert_eq!(ids, [created[1], created[0]]);

        Ok(())
    }
}
