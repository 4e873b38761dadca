//! Update Stock Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use estoque_app::domain::stock::data::{OperationKind, StockUpdate};

use crate::{
    envelope::{ApiError, MessageResponse},
    extensions::*,
    state::State,
    stock::errors::into_api_error,
};

pub(crate) const STOCK_UPDATED_MESSAGE: &str = "Estoque atualizado com sucesso";

/// Update Stock Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStockRequest {
    /// Product display name, matched case-insensitively
    pub produto_nome: Option<String>,

    /// Size label; required for sized products, ignored otherwise
    pub tamanho: Option<String>,

    /// New absolute quantity
    pub nova_quantidade: Option<i64>,

    /// `adicionar` logs an entry, any other value logs an exit
    pub tipo_operacao: Option<String>,
}

impl TryFrom<UpdateStockRequest> for StockUpdate {
    type Error = ApiError;

    fn try_from(request: UpdateStockRequest) -> Result<Self, Self::Error> {
        let (Some(product_name), Some(new_quantity)) =
            (request.produto_nome, request.nova_quantidade)
        else {
            return Err(ApiError::bad_request(
                "Campos obrigatórios: produto_nome e nova_quantidade",
            ));
        };

        let new_quantity = i32::try_from(new_quantity)
            .ok()
            .ok_or_else(|| ApiError::bad_request(format!("Quantidade inválida: {new_quantity}")))?;

        Ok(StockUpdate {
            product_name,
            size_name: request.tamanho,
            new_quantity,
            operation: request
                .tipo_operacao
                .filter(|label| !label.is_empty())
                .map(|label| OperationKind::from_label(&label)),
        })
    }
}

/// Update Stock Handler
///
/// Sets the absolute quantity of one (product, size) pair and optionally logs
/// a movement, all in one transaction. Products tracked by size need
/// `tamanho`; simple products ignore it.
#[endpoint(
    tags("estoque"),
    summary = "Set stock quantity",
    description = "Sets the absolute quantity of one (product, size) pair. Products tracked by size require `tamanho` and answer 400 without it; for simple products `tamanho` is ignored and the sizeless row is written.",
    responses(
        (status_code = StatusCode::OK, description = "Stock updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing fields, negative quantity, or no `tamanho` for a product tracked by size"),
        (status_code = StatusCode::NOT_FOUND, description = "Product or size not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "stock.update",
    skip(json, depot),
    fields(
        product_name = tracing::field::Empty,
        size_name = tracing::field::Empty,
        new_quantity = tracing::field::Empty
    ),
    err(Debug)
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateStockRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let update = StockUpdate::try_from(json.into_inner())?;

    let span = tracing::Span::current();

    span.record("product_name", update.product_name.as_str());
    span.record("size_name", tracing::field::debug(&update.size_name));
    span.record("new_quantity", update.new_quantity);

    state
        .app
        .stock
        .apply_stock_update(update)
        .await
        .map_err(into_api_error)?;

    Ok(Json(MessageResponse::ok(STOCK_UPDATED_MESSAGE)))
}
