//! JSON response envelope.
//!
//! Every response body carries `success`, and then `data`, `message` or
//! `error` as the endpoint needs.

mod catcher;
mod error;
mod settings;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

pub(crate) use catcher::envelope_catcher;
pub(crate) use error::{ApiError, ErrorResponse};
pub(crate) use settings::set_expose_error_details;

/// Success envelope with only a message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
