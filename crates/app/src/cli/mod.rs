use clap::{Parser, Subcommand};

mod credential;
mod db;

#[derive(Debug, Parser)]
#[command(name = "estoque-app", about = "Estoque CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Credential(credential::CredentialCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Credential(command) => credential::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
