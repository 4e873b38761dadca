//! Sales Value Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use estoque_app::domain::sales::models::ProductSales;

use crate::{
    envelope::ApiError, extensions::*, movements::errors::sales_into_api_error, state::State,
};

/// Sold product line, prices in cents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductSalesResponse {
    pub produto_id: i32,
    pub produto: String,
    pub quantidade_vendida: u64,
    pub preco_unitario: u64,
    pub valor_total: u64,
}

impl From<ProductSales> for ProductSalesResponse {
    fn from(sales: ProductSales) -> Self {
        Self {
            produto_id: sales.product.into_i32(),
            produto: sales.product_name,
            quantidade_vendida: sales.quantity_sold,
            preco_unitario: sales.unit_price,
            valor_total: sales.total_value,
        }
    }
}

/// Sales Value Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SalesValueResponse {
    pub success: bool,
    pub data: Vec<ProductSalesResponse>,
}

/// Sales Value Handler
///
/// Totals every `saida` movement against the configured price table.
#[endpoint(
    tags("movimentacoes"),
    summary = "Sales value per product",
    responses(
        (status_code = StatusCode::OK, description = "Sales, highest value first"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "movements.sales_value", skip_all, err(Debug))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SalesValueResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sales = state
        .app
        .sales
        .sales_value()
        .await
        .map_err(sales_into_api_error)?;

    Ok(Json(SalesValueResponse {
        success: true,
        data: sales.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use estoque_app::domain::{
        products::records::ProductId,
        sales::{MockSalesService, SalesServiceError},
    };

    use crate::{
        envelope::ErrorResponse,
        test_helpers::{StrictMocks, service_with},
    };

    use super::*;

    fn make_service(sales: MockSalesService) -> Service {
        service_with(
            StrictMocks {
                sales,
                ..StrictMocks::default()
            },
            Router::with_path("movimentacoes/vendas-valor").get(handler),
        )
    }

    #[tokio::test]
    async fn test_sales_value_lists_priced_lines() -> TestResult {
        let mut sales = MockSalesService::new();

        sales.expect_sales_value().once().return_once(|| {
            Ok(vec![ProductSales {
                product: ProductId::from_i32(3),
                product_name: "Collant".to_string(),
                quantity_sold: 4,
                unit_price: 8_990,
                total_value: 35_960,
            }])
        });

        let mut res = TestClient::get("http://example.com/movimentacoes/vendas-valor")
            .send(&make_service(sales))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: SalesValueResponse = res.take_json().await?;

        assert!(body.success, "expected success envelope");
        assert_eq!(
            body.data,
            vec![ProductSalesResponse {
                produto_id: 3,
                produto: "Collant".to_string(),
                quantidade_vendida: 4,
                preco_unitario: 8_990,
                valor_total: 35_960,
            }]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_overflow_is_internal_error() -> TestResult {
        let mut sales = MockSalesService::new();

        sales
            .expect_sales_value()
            .once()
            .return_once(|| Err(SalesServiceError::Overflow(3)));

        let mut res = TestClient::get("http://example.com/movimentacoes/vendas-valor")
            .send(&make_service(sales))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let body: ErrorResponse = res.take_json().await?;

        assert!(!body.success, "expected failure envelope");
        assert_eq!(body.message, "Erro interno do servidor");

        Ok(())
    }
}
