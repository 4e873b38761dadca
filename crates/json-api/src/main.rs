//! Estoque JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use estoque_app::{context::AppContext, domain::sales::prices::PriceTable};

use crate::{config::ServerConfig, state::State};

mod config;
mod envelope;
mod extensions;
mod healthcheck;
mod login;
mod movements;
mod observability;
mod router;
mod shutdown;
mod sizes;
mod state;
mod stock;
#[cfg(test)]
mod test_helpers;

/// Estoque JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so tracing macros would be dropped"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    observability::apply_runtime_config(&config.logging);
    envelope::set_expose_error_details(config.errors.expose_error_details);

    let prices = match config.pricing.price_table.as_deref() {
        Some(path) => match PriceTable::load(path) {
            Ok(prices) => {
                info!(path = %path.display(), products = prices.len(), "loaded price table");
                prices
            }
            Err(load_error) => {
                error!("failed to load price table: {load_error}");

                process::exit(1);
            }
        },
        None => PriceTable::default(),
    };

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        config.database.max_connections,
        prices,
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let service = router::app_service(router::with_docs(router::app_router(State::shared(app))));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::wait_and_stop(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service).await;
}
