//! Pricing Config

use std::path::PathBuf;

use clap::Args;

/// Sales pricing settings.
#[derive(Debug, Args)]
pub struct PricingConfig {
    /// YAML file mapping product id to unit price in cents
    #[arg(long, env = "PRICE_TABLE_PATH")]
    pub price_table: Option<PathBuf>,
}
