//! Movement Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use estoque_app::domain::movements::records::MovementRecord;

/// Movement Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MovementResponse {
    pub movimentacao_id: i32,
    pub produto_id: i32,
    pub tamanho_id: Option<i32>,
    pub quantidade: i32,

    /// `entrada` or `saida`
    pub tipo: String,

    /// RFC 3339 timestamp
    pub data_movimentacao: String,

    /// Product display name
    pub produto: Option<String>,

    /// Size label
    pub tamanho: Option<String>,
}

impl From<MovementRecord> for MovementResponse {
    fn from(record: MovementRecord) -> Self {
        Self {
            movimentacao_id: record.id.into_i32(),
            produto_id: record.product.into_i32(),
            tamanho_id: record.size.map(|size| size.into_i32()),
            quantidade: record.quantity,
            tipo: record.kind.to_string(),
            data_movimentacao: record.created_at.to_string(),
            produto: record.product_name,
            tamanho: record.size_name,
        }
    }
}

/// Movement List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MovementsResponse {
    pub success: bool,
    pub data: Vec<MovementResponse>,
}

/// Movement Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MovementCreatedResponse {
    pub success: bool,
    pub data: MovementResponse,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use jiff::Timestamp;

    use estoque_app::domain::{
        movements::records::{MovementId, MovementKind, MovementRecord},
        products::records::ProductId,
    };

    pub(crate) fn movement(id: i32, kind: MovementKind, quantity: i32) -> MovementRecord {
        MovementRecord {
            id: MovementId::from_i32(id),
            product: ProductId::from_i32(2),
            size: None,
            quantity,
            kind,
            created_at: Timestamp::UNIX_EPOCH,
            product_name: Some("Redinha".to_string()),
            size_name: None,
        }
    }
}
