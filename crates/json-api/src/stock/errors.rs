//! Stock Errors

use estoque_app::domain::stock::StockServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: StockServiceError) -> ApiError {
    match error {
        StockServiceError::MissingProductName => {
            ApiError::bad_request("Nome do produto é obrigatório")
        }
        StockServiceError::InvalidQuantity(quantity) => {
            ApiError::bad_request(format!("Quantidade inválida: {quantity}"))
        }
        StockServiceError::SizeRequired(product) => {
            ApiError::bad_request(format!("Tamanho é obrigatório para o produto {product}"))
        }
        StockServiceError::ProductNotFound(product) => {
            ApiError::not_found(format!("Produto não encontrado: {product}"))
        }
        StockServiceError::SizeNotFound(size) => {
            ApiError::not_found(format!("Tamanho não encontrado: {size}"))
        }
        StockServiceError::InvalidReference | StockServiceError::InvalidData => {
            ApiError::bad_request("Dados de estoque inválidos")
        }
        StockServiceError::Sql(source) => ApiError::internal("stock storage failure", &source),
    }
}
