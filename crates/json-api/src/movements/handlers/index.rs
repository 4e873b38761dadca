//! List Movements Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use estoque_app::domain::{
    movements::{
        data::{DEFAULT_MOVEMENTS_LIMIT, MovementFilter},
        records::MovementKind,
    },
    products::records::ProductId,
};

use crate::{
    envelope::ApiError,
    extensions::*,
    movements::{errors::into_api_error, models::MovementsResponse},
    state::State,
};

pub(crate) fn parse_kind(value: &str) -> Result<MovementKind, ApiError> {
    value
        .parse::<MovementKind>()
        .ok()
        .ok_or_else(|| ApiError::bad_request(format!("Tipo inválido: {value}")))
}

/// List Movements Handler
///
/// Newest first; `limite` defaults to 50 and is capped at 500.
#[endpoint(
    tags("movimentacoes"),
    summary = "List stock movements",
    responses(
        (status_code = StatusCode::OK, description = "Movements, newest first"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "movements.index", skip_all, err(Debug))]
pub(crate) async fn handler(
    produto_id: QueryParam<i32, false>,
    tipo: QueryParam<String, false>,
    limite: QueryParam<u32, false>,
    offset: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<MovementsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = MovementFilter {
        product: produto_id.into_inner().map(ProductId::from_i32),
        kind: tipo.into_inner().as_deref().map(parse_kind).transpose()?,
        limit: limite.into_inner().unwrap_or(DEFAULT_MOVEMENTS_LIMIT),
        offset: offset.into_inner().unwrap_or(0),
    };

    let movements = state
        .app
        .movements
        .list_movements(filter)
        .await
        .map_err(into_api_error)?;

    Ok(Json(MovementsResponse {
        success: true,
        data: movements.into_iter().map(Into::into).collect(),
    }))
}
