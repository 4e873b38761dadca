//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, catcher::Catcher, prelude::*};

use estoque_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        movements::MockMovementsService, sales::MockSalesService, sizes::MockSizesService,
        stock::MockStockService,
    },
};

use crate::{envelope::envelope_catcher, state::State};

/// One mock per service. Defaults refuse every call.
pub(crate) struct StrictMocks {
    pub stock: MockStockService,
    pub movements: MockMovementsService,
    pub sizes: MockSizesService,
    pub sales: MockSalesService,
    pub auth: MockAuthService,
}

impl Default for StrictMocks {
    fn default() -> Self {
        let mut stock = MockStockService::new();

        stock.expect_list_product_stock().never();
        stock.expect_stock_summary().never();
        stock.expect_apply_stock_update().never();

        let mut movements = MockMovementsService::new();

        movements.expect_list_movements().never();
        movements.expect_create_movement().never();

        let mut sizes = MockSizesService::new();

        sizes.expect_list_sizes().never();

        let mut sales = MockSalesService::new();

        sales.expect_sales_value().never();

        let mut auth = MockAuthService::new();

        auth.expect_validate_password().never();

        Self {
            stock,
            movements,
            sizes,
            sales,
            auth,
        }
    }
}

impl StrictMocks {
    pub(crate) fn into_app(self) -> AppContext {
        AppContext {
            stock: Arc::new(self.stock),
            movements: Arc::new(self.movements),
            sizes: Arc::new(self.sizes),
            sales: Arc::new(self.sales),
            auth: Arc::new(self.auth),
        }
    }
}

pub(crate) fn service_with(mocks: StrictMocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::shared(mocks.into_app())))
            .push(route),
    )
    .catcher(Catcher::default().hoop(envelope_catcher))
}
