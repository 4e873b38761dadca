//! Test context for service-level integration tests.

use std::sync::Arc;

use crate::{
    auth::PgAuthService,
    database::Db,
    domain::{
        movements::PgMovementsService,
        sales::{PgSalesService, prices::PriceTable},
        sizes::PgSizesService,
        stock::PgStockService,
    },
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub test_db: TestDb,
    pub db: Db,
    pub stock: PgStockService,
    pub movements: PgMovementsService,
    pub sizes: PgSizesService,
    pub sales: PgSalesService,
    pub auth: PgAuthService,
}

impl TestContext {
    /// Fresh migrated database with every service wired to it.
    ///
    /// The sales service starts with an empty price table.
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            stock: PgStockService::new(db.clone()),
            movements: PgMovementsService::new(db.clone()),
            sizes: PgSizesService::new(db.clone()),
            sales: PgSalesService::new(db.clone(), Arc::new(PriceTable::default())),
            auth: PgAuthService::new(db.clone()),
            db,
            test_db,
        }
    }
}
