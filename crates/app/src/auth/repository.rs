//! Auth Repository

use sqlx::{Executor, Postgres, query_scalar};

use crate::auth::{NewCredential, Permission};

const FIND_PERMISSION_BY_PASSWORD_SQL: &str = include_str!("sql/find_permission_by_password.sql");
const CREATE_CREDENTIAL_SQL: &str = include_str!("sql/create_credential.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAuthRepository;

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_permission_by_password<'e, E>(
        &self,
        executor: E,
        password: &str,
    ) -> Result<Option<Permission>, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        query_scalar::<Postgres, String>(FIND_PERMISSION_BY_PASSWORD_SQL)
            .bind(password)
            .fetch_optional(executor)
            .await
            .map(|permission| permission.map(Permission::new))
    }

    pub(crate) async fn create_credential<'e, E>(
        &self,
        executor: E,
        credential: &NewCredential,
    ) -> Result<Permission, sqlx::Error>
    where
        E: Executor<'e, Database = Postgres>,
    {
        query_scalar::<Postgres, String>(CREATE_CREDENTIAL_SQL)
            .bind(credential.password.as_str())
            .bind(credential.permission.as_str())
            .fetch_one(executor)
            .await
            .map(Permission::new)
    }
}
