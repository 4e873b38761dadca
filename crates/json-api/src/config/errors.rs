//! Error Response Config

use clap::Args;

/// Error response settings.
#[derive(Debug, Args)]
pub struct ErrorsConfig {
    /// Attach the underlying error message to 500 responses
    #[arg(long, env = "EXPOSE_ERROR_DETAILS", default_value_t = false)]
    pub expose_error_details: bool,
}
