//! Validate Password Handler

use std::{fmt, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use estoque_app::auth::AuthServiceError;

use crate::{envelope::ApiError, extensions::*, state::State};

pub(crate) const PASSWORD_REQUIRED_MESSAGE: &str = "Senha é obrigatória";
pub(crate) const PASSWORD_REJECTED_MESSAGE: &str = "Senha incorreta";
pub(crate) const PASSWORD_ACCEPTED_MESSAGE: &str = "Senha válida";

/// Validate Password Request
#[derive(Deserialize, ToSchema)]
pub(crate) struct ValidatePasswordRequest {
    pub senha: Option<String>,
}

impl fmt::Debug for ValidatePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatePasswordRequest")
            .field("senha", &self.senha.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

/// Granted permission
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PermissionData {
    pub permissao: String,
}

/// Validate Password Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidatePasswordResponse {
    pub success: bool,
    pub message: String,
    pub data: PermissionData,
}

fn into_api_error(error: AuthServiceError) -> ApiError {
    match error {
        AuthServiceError::MissingPassword => ApiError::bad_request(PASSWORD_REQUIRED_MESSAGE),
        AuthServiceError::InvalidCredential => {
            ApiError::unauthorized(PASSWORD_REJECTED_MESSAGE)
        }
        AuthServiceError::AlreadyExists => {
            ApiError::internal("unexpected credential conflict", &error)
        }
        AuthServiceError::Sql(source) => ApiError::internal("credential lookup failure", &source),
    }
}

/// Validate Password Handler
///
/// Checks a shared password and returns the permission level bound to it.
#[endpoint(
    tags("login"),
    summary = "Validate shared password",
    responses(
        (status_code = StatusCode::OK, description = "Password accepted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Password missing"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Password rejected"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "login.validate", skip_all, err(Debug))]
pub(crate) async fn handler(
    json: JsonBody<ValidatePasswordRequest>,
    depot: &mut Depot,
) -> Result<Json<ValidatePasswordResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let password = Zeroizing::new(json.into_inner().senha.unwrap_or_default());

    let permission = state
        .app
        .auth
        .validate_password(&password)
        .await
        .map_err(into_api_error)?;

    Ok(Json(ValidatePasswordResponse {
        success: true,
        message: PASSWORD_ACCEPTED_MESSAGE.to_string(),
        data: PermissionData {
            permissao: permission.to_string(),
        },
    }))
}
