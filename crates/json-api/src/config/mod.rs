//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, errors::ErrorsConfig, logging::LoggingConfig, pricing::PricingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod errors;
pub(crate) mod logging;
pub(crate) mod pricing;
pub(crate) mod server;

pub(crate) use logging::LogFormat;

/// Estoque JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "estoque-json", about = "Estoque JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Sales pricing settings.
    #[command(flatten)]
    pub pricing: PricingConfig,

    /// Error response settings.
    #[command(flatten)]
    pub errors: ErrorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // .env is optional
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}
