//! Sales service.

use std::{cmp::Reverse, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{
    database::Db,
    domain::sales::{
        errors::SalesServiceError,
        models::{ProductSales, SoldQuantity},
        prices::PriceTable,
        repository::PgSalesRepository,
    },
};

/// Prices sold quantities, highest total value first.
///
/// Products missing from `prices` are valued at zero. Negative sums, which
/// only appear if the log was edited by hand, count as nothing sold.
///
/// # Errors
///
/// Returns [`SalesServiceError::Overflow`] if a total does not fit in `u64`.
pub fn price_sales(
    sold: Vec<SoldQuantity>,
    prices: &PriceTable,
) -> Result<Vec<ProductSales>, SalesServiceError> {
    let mut sales = sold
        .into_iter()
        .map(|sold| -> Result<ProductSales, SalesServiceError> {
            let quantity_sold = u64::try_from(sold.quantity).unwrap_or(0);

            let unit_price = prices.price(sold.product).unwrap_or_else(|| {
                warn!(
                    product_id = %sold.product,
                    product = %sold.product_name,
                    "product has no unit price"
                );

                0
            });

            let total_value = quantity_sold
                .checked_mul(unit_price)
                .ok_or(SalesServiceError::Overflow(sold.product.into_i32()))?;

            Ok(ProductSales {
                product: sold.product,
                product_name: sold.product_name,
                quantity_sold,
                unit_price,
                total_value,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    sales.sort_by_key(|sales| (Reverse(sales.total_value), sales.product));

    Ok(sales)
}

#[derive(Debug, Clone)]
pub struct PgSalesService {
    db: Db,
    repository: PgSalesRepository,
    prices: Arc<PriceTable>,
}

impl PgSalesService {
    #[must_use]
    pub fn new(db: Db, prices: Arc<PriceTable>) -> Self {
        Self {
            db,
            repository: PgSalesRepository::new(),
            prices,
        }
    }
}

#[async_trait]
impl SalesService for PgSalesService {
    async fn sales_value(&self) -> Result<Vec<ProductSales>, SalesServiceError> {
        let sold = self
            .repository
            .list_sold_quantities(self.db.pool())
            .await?;

        price_sales(sold, &self.prices)
    }
}

#[automock]
#[async_trait]
pub trait SalesService: Send + Sync {
    /// Value of all `saida` movements per product, highest first.
    async fn sales_value(&self) -> Result<Vec<ProductSales>, SalesServiceError>;
}
