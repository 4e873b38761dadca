//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    catcher::Catcher,
    cors::{Any, Cors},
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{
    envelope::envelope_catcher, healthcheck, login, movements, observability::request_logging,
    sizes, state::State, stock,
};

/// Every API route, with state injected and request logging in front.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("estoque")
                .get(stock::index::handler)
                .push(Router::with_path("resumo").get(stock::summary::handler))
                .push(Router::with_path("atualizar").put(stock::update::handler)),
        )
        .push(
            Router::with_path("movimentacoes")
                .get(movements::index::handler)
                .post(movements::create::handler)
                .push(Router::with_path("vendas-valor").get(movements::sales_value::handler)),
        )
        .push(Router::with_path("produtos/estoque").get(stock::by_product::handler))
        .push(Router::with_path("tamanhos").get(sizes::handler))
        .push(Router::with_path("login/validar").post(login::validate::handler))
}

/// Mounts the OpenAPI document and Swagger UI next to the API routes.
pub(crate) fn with_docs(router: Router) -> Router {
    let doc = OpenApi::new("Estoque API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}

/// Wraps the router with permissive CORS and the JSON error envelope.
pub(crate) fn app_service(router: Router) -> Service {
    let cors = Cors::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .into_handler();

    Service::new(router)
        .hoop(cors)
        .catcher(Catcher::default().hoop(envelope_catcher))
}
