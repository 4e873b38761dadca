//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::{AuthServiceError, NewCredential, Permission, repository::PgAuthRepository},
    database::Db,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAuthRepository::new(),
        }
    }

    /// Store a new shared password with its permission level.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::MissingPassword`] for an empty password,
    /// [`AuthServiceError::AlreadyExists`] when the password is already stored,
    /// or a storage error.
    pub async fn create_credential(
        &self,
        credential: NewCredential,
    ) -> Result<Permission, AuthServiceError> {
        if credential.password.is_empty() {
            return Err(AuthServiceError::MissingPassword);
        }

        let permission = self
            .repository
            .create_credential(self.db.pool(), &credential)
            .await?;

        info!(permission = %permission, "credential created");

        Ok(permission)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn validate_password(&self, password: &str) -> Result<Permission, AuthServiceError> {
        if password.is_empty() {
            return Err(AuthServiceError::MissingPassword);
        }

        self.repository
            .find_permission_by_password(self.db.pool(), password)
            .await?
            .ok_or(AuthServiceError::InvalidCredential)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exact match of `password` against stored credentials.
    async fn validate_password(&self, password: &str) -> Result<Permission, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use zeroize::Zeroizing;

    use crate::test::TestContext;

    use super::*;

    fn credential(password: &str, permission: &str) -> NewCredential {
        NewCredential {
            password: Zeroizing::new(password.to_string()),
            permission: Permission::new(permission),
        }
    }

    #[tokio::test]
    async fn matching_password_returns_permission() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.auth
            .create_credential(credential("sapatilha123", "Admin"))
            .await?;

        let permission = ctx.auth.validate_password("sapatilha123").await?;

        assert_eq!(permission, Permission::new("Admin"));

        Ok(())
    }

    #[tokio::test]
    async fn password_match_is_exact() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.auth
            .create_credential(credential("Sapatilha", "Usuario"))
            .await?;

        for attempt in ["sapatilha", "Sapatilha ", "Sapat%"] {
            let result = ctx.auth.validate_password(attempt).await;

            assert!(
                matches!(result, Err(AuthServiceError::InvalidCredential)),
                "{attempt:?} should not match, got {result:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn empty_password_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.validate_password("").await;

        assert!(
            matches!(result, Err(AuthServiceError::MissingPassword)),
            "expected MissingPassword, got {result:?}"
        );
    }

    #[tokio::test]
    async fn duplicate_credential_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.auth
            .create_credential(credential("collant", "Usuario"))
            .await?;

        let result = ctx
            .auth
            .create_credential(credential("collant", "Admin"))
            .await;

        assert!(
            matches!(result, Err(AuthServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn default_permission_is_usuario() {
        assert_eq!(Permission::default().as_str(), "Usuario");
    }
}
