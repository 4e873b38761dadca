use clap::Args;
use estoque_app::{
    auth::{DEFAULT_PERMISSION, NewCredential, Permission, PgAuthService},
    database::{self, Db},
};
use zeroize::Zeroizing;

#[derive(Debug, Args)]
pub(crate) struct CreateCredentialArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Shared password to store
    #[arg(long, env = "ESTOQUE_SENHA", hide_env_values = true)]
    senha: String,

    /// Permission level returned on a successful login
    #[arg(long, default_value = DEFAULT_PERMISSION)]
    permissao: String,
}

pub(crate) async fn run(args: CreateCredentialArgs) -> Result<(), String> {
    let password = Zeroizing::new(args.senha);

    if password.trim().is_empty() {
        return Err("senha cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgAuthService::new(Db::new(pool));

    let permission = service
        .create_credential(NewCredential {
            password,
            permission: Permission::new(args.permissao),
        })
        .await
        .map_err(|error| format!("failed to create credential: {error}"))?;

    println!("permissao: {permission}");

    Ok(())
}
