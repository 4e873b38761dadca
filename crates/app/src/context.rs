//! App Context

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        movements::{MovementsService, PgMovementsService},
        sales::{PgSalesService, SalesService, prices::PriceTable},
        sizes::{PgSizesService, SizesService},
        stock::{PgStockService, StockService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub stock: Arc<dyn StockService>,
    pub movements: Arc<dyn MovementsService>,
    pub sizes: Arc<dyn SizesService>,
    pub sales: Arc<dyn SalesService>,
    pub auth: Arc<dyn AuthService>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build every service over one shared database handle.
    #[must_use]
    pub fn new(db: Db, prices: PriceTable) -> Self {
        Self {
            stock: Arc::new(PgStockService::new(db.clone())),
            movements: Arc::new(PgMovementsService::new(db.clone())),
            sizes: Arc::new(PgSizesService::new(db.clone())),
            sales: Arc::new(PgSalesService::new(db.clone(), Arc::new(prices))),
            auth: Arc::new(PgAuthService::new(db)),
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        max_connections: u32,
        prices: PriceTable,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::new(Db::new(pool), prices))
    }
}
