//! Create Movement Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use estoque_app::domain::{
    movements::data::NewMovement, products::records::ProductId, sizes::records::SizeId,
};

use crate::{
    envelope::ApiError,
    extensions::*,
    movements::{
        errors::into_api_error,
        handlers::index::parse_kind,
        models::MovementCreatedResponse,
    },
    state::State,
};

/// Create Movement Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateMovementRequest {
    pub produto_id: i32,
    pub tamanho_id: Option<i32>,

    /// Positive magnitude
    pub quantidade: i32,

    /// `entrada` or `saida`
    pub tipo: String,
}

impl TryFrom<CreateMovementRequest> for NewMovement {
    type Error = ApiError;

    fn try_from(request: CreateMovementRequest) -> Result<Self, Self::Error> {
        Ok(NewMovement {
            product: ProductId::from_i32(request.produto_id),
            size: request.tamanho_id.map(SizeId::from_i32),
            quantity: request.quantidade,
            kind: parse_kind(&request.tipo)?,
        })
    }
}

/// Create Movement Handler
///
/// Records the movement and adds its signed quantity to the stock row.
#[endpoint(
    tags("movimentacoes"),
    summary = "Create stock movement",
    status_codes(201, 400, 500),
    responses(
        (status_code = StatusCode::CREATED, description = "Movement created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "movements.create",
    skip(json, depot, res),
    fields(product_id = tracing::field::Empty, kind = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    json: JsonBody<CreateMovementRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MovementCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let movement = NewMovement::try_from(json.into_inner())?;

    let span = tracing::Span::current();

    span.record("product_id", movement.product.into_i32());
    span.record("kind", movement.kind.as_str());

    let record = state
        .app
        .movements
        .create_movement(movement)
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(MovementCreatedResponse {
        success: true,
        data: record.into(),
    }))
}
