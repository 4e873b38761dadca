//! Movement Errors

use estoque_app::domain::{movements::MovementsServiceError, sales::SalesServiceError};

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: MovementsServiceError) -> ApiError {
    match error {
        MovementsServiceError::InvalidQuantity(quantity) => {
            ApiError::bad_request(format!("Quantidade deve ser positiva: {quantity}"))
        }
        MovementsServiceError::InvalidReference => {
            ApiError::bad_request("Produto ou tamanho inexistente")
        }
        MovementsServiceError::InvalidData => ApiError::bad_request("Movimentação inválida"),
        MovementsServiceError::SizeRequired(product) => {
            ApiError::bad_request(format!("Tamanho é obrigatório para o produto {product}"))
        }
        MovementsServiceError::Sql(source) => {
            ApiError::internal("movement storage failure", &source)
        }
    }
}

pub(crate) fn sales_into_api_error(error: SalesServiceError) -> ApiError {
    match error {
        SalesServiceError::Overflow(product) => {
            ApiError::internal("sales total overflow", &format!("product {product}"))
        }
        SalesServiceError::Sql(source) => ApiError::internal("sales storage failure", &source),
    }
}
