//! Stock Summary Handler

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

/// Stock Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockSummaryResponse {
    pub success: bool,

    /// Normalized key → every defined size (missing ones as 0), or a quantity
    pub data: BTreeMap<String, StockValue>,

    /// Display name → per-size quantities plus `total`
    #[serde(rename = "byName")]
    pub by_name: BTreeMap<String, BTreeMap<String, i64>>,
}

/// Stock Summary Handler
#[endpoint(
    tags("estoque"),
    summary = "Stock summary by key and by name",
    responses(
        (status_code = StatusCode::OK, description = "Stock summary"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "stock.summary", skip(depot), err(Debug))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StockSummaryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summary = state
        .app
        .stock
        .stock_summary()
        .await
        .map_err(into_api_error)?;

    Ok(Json(StockSummaryResponse {
        success: true,
        data: views::by_key(&summary.products),
        by_name: views::by_name(&summary),
    }))
}
