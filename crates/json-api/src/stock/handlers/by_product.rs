//! Stock By Product Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    envelope::ApiError,
    extensions::*,
    state::State,
    stock::{errors::into_api_error, views},
};

/// Stock By Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductStockResponse {
    pub success: bool,

    /// Display name → every defined size plus `total`
    pub data: BTreeMap<String, BTreeMap<String, i64>>,
}

/// Stock By Product Handler
#[endpoint(
    tags("produtos"),
    summary = "Stock per product with every size",
    responses(
        (status_code = StatusCode::OK, description = "Stock per product"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "stock.by_product", skip(depot), err(Debug))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductStockResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summary = state
        .app
        .stock
        .stock_summary()
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductStockResponse {
        success: true,
        data: views::by_product(&summary),
    }))
}
