//! Catcher that turns bare error statuses into the failure envelope.

use salvo::{http::ResBody, prelude::*};

use super::{ApiError, error::INTERNAL_ERROR_MESSAGE};

pub(crate) const ROUTE_NOT_FOUND_MESSAGE: &str = "Rota não encontrada";

fn message_for(status: StatusCode, body: ResBody) -> String {
    if status == StatusCode::NOT_FOUND || status == StatusCode::METHOD_NOT_ALLOWED {
        return ROUTE_NOT_FOUND_MESSAGE.to_string();
    }

    if status.is_server_error() {
        return INTERNAL_ERROR_MESSAGE.to_string();
    }

    match body {
        ResBody::Error(error) => error.brief,
        _ => status
            .canonical_reason()
            .unwrap_or("Requisição inválida")
            .to_string(),
    }
}

#[handler]
pub(crate) async fn envelope_catcher(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(status) = res.status_code else {
        return;
    };

    if !status.is_client_error() && !status.is_server_error() {
        return;
    }

    // Bodies already written by a handler are left alone.
    if !matches!(res.body, ResBody::None | ResBody::Error(_)) {
        return;
    }

    let message = message_for(status, res.take_body());

    ApiError::new(status, message).render(res);

    ctrl.skip_rest();
}
