//! Sizes Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use estoque_app::domain::sizes::records::SizeRecord;

use crate::{envelope::ApiError, extensions::*, state::State};

/// Size definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct SizeResponse {
    pub tamanho_id: i32,
    pub nome: String,
}

impl From<SizeRecord> for SizeResponse {
    fn from(size: SizeRecord) -> Self {
        Self {
            tamanho_id: size.id.into_i32(),
            nome: size.name,
        }
    }
}

/// Sizes Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SizesResponse {
    pub success: bool,
    pub data: Vec<SizeResponse>,
}

/// List Sizes Handler
#[endpoint(
    tags("tamanhos"),
    summary = "List size definitions",
    responses(
        (status_code = StatusCode::OK, description = "Sizes in id order"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "sizes.index", skip_all, err(Debug))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SizesResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sizes = state
        .app
        .sizes
        .list_sizes()
        .await
        .or_500("failed to list sizes")?;

    Ok(Json(SizesResponse {
        success: true,
        data: sizes.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use estoque_app::domain::sizes::{MockSizesService, records::SizeId};

    use crate::test_helpers::{StrictMocks, service_with};

    use super::*;

    #[tokio::test]
    async fn test_sizes_are_listed() -> TestResult {
        let mut sizes = MockSizesService::new();

        sizes.expect_list_sizes().once().return_once(|| {
            Ok(vec![
                SizeRecord {
                    id: SizeId::from_i32(1),
                    name: "P".to_string(),
                },
                SizeRecord {
                    id: SizeId::from_i32(2),
                    name: "M".to_string(),
                },
            ])
        });

        let service = service_with(
            StrictMocks {
                sizes,
                ..StrictMocks::default()
            },
            Router::with_path("tamanhos").get(handler),
        );

        let mut res = TestClient::get("http://example.com/tamanhos")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: SizesResponse = res.take_json().await?;

        assert!(body.success, "expected success envelope");
        assert_eq!(
            body.data,
            vec![
                SizeResponse {
                    tamanho_id: 1,
                    nome: "P".to_string(),
                },
                SizeResponse {
                    tamanho_id: 2,
                    nome: "M".to_string(),
                },
            ]
        );

        Ok(())
    }
}
