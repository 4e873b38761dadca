//! Stock Snapshot Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    envelope::ApiError,
    extensions::*,
    state::State,
    stock::{
        errors::into_api_error,
        views::{self, StockValue},
    },
};

/// Stock Snapshot Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockSnapshotResponse {
    pub success: bool,

    /// Normalized product key → per-size quantities or a single quantity
    pub data: BTreeMap<String, StockValue>,
}

/// Stock Snapshot Handler
///
/// Sized products list only the sizes that have a stock row.
#[endpoint(
    tags("estoque"),
    summary = "Stock snapshot",
    responses(
        (status_code = StatusCode::OK, description = "Stock of every active product"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "stock.index", skip(depot), err(Debug))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StockSnapshotResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .stock
        .list_product_stock()
        .await
        .map_err(into_api_error)?;

    Ok(Json(StockSnapshotResponse {
        success: true,
        data: views::by_key(&products),
    }))
}
